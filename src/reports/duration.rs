use crate::error::EmptyDataset;
use crate::loader::Dataset;
use crate::reports::types::DurationReport;

/// Computes the total trip duration in hours and the mean in minutes.
///
/// An empty dataset is an error rather than a zero (or NaN) result, so a
/// filter that matched nothing is always distinguishable from a dataset of
/// zero-length trips.
pub fn duration_report(data: &Dataset) -> Result<DurationReport, EmptyDataset> {
    let records = data.records();
    if records.is_empty() {
        return Err(EmptyDataset);
    }

    let total: f64 = records.iter().map(|r| r.duration_seconds).sum();
    let mean = total / records.len() as f64;

    Ok(DurationReport {
        trips: records.len(),
        total_hours: total / 3600.0,
        mean_minutes: mean / 60.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::TripRecord;
    use crate::schema::City;
    use chrono::NaiveDateTime;

    fn trip(duration_seconds: f64) -> TripRecord {
        let start_time =
            NaiveDateTime::parse_from_str("2017-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(
            start_time,
            start_time + chrono::Duration::seconds(duration_seconds as i64),
            duration_seconds,
            "A".to_string(),
            "X".to_string(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_total_and_mean() {
        let data = Dataset::new(City::Washington, vec![trip(3600.0), trip(1800.0)]);

        let report = duration_report(&data).unwrap();
        assert_eq!(report.trips, 2);
        assert!((report.total_hours - 1.5).abs() < 1e-9);
        assert!((report.mean_minutes - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_conversions_round_trip() {
        let durations = [321.0, 1610.0, 416.0, 909.5];
        let data = Dataset::new(
            City::Washington,
            durations.iter().map(|&d| trip(d)).collect(),
        );

        let report = duration_report(&data).unwrap();
        let sum: f64 = durations.iter().sum();
        assert!((report.total_hours * 3600.0 - sum).abs() < 1e-6);
        assert!((report.mean_minutes * 60.0 - sum / durations.len() as f64).abs() < 1e-6);
    }

    #[test]
    fn test_zero_length_trips_are_not_an_error() {
        let data = Dataset::new(City::Washington, vec![trip(0.0)]);

        let report = duration_report(&data).unwrap();
        assert_eq!(report.total_hours, 0.0);
        assert_eq!(report.mean_minutes, 0.0);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let data = Dataset::new(City::Washington, vec![]);
        assert_eq!(duration_report(&data), Err(EmptyDataset));
    }
}
