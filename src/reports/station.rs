use crate::error::EmptyDataset;
use crate::loader::Dataset;
use crate::reports::types::StationReport;
use crate::reports::utility::mode_min;

/// Computes the most common start station, end station, and (start, end)
/// combination, with their occurrence counts.
///
/// Stations are grouped by exact string match; no case folding or trimming
/// is applied. Ties resolve to the lexicographically smallest name, and for
/// pairs the start station compares first.
pub fn station_report(data: &Dataset) -> Result<StationReport, EmptyDataset> {
    let records = data.records();

    let (start_station, start_count) =
        mode_min(records.iter().map(|r| r.start_station.as_str())).ok_or(EmptyDataset)?;
    let (end_station, end_count) =
        mode_min(records.iter().map(|r| r.end_station.as_str())).ok_or(EmptyDataset)?;
    let ((pair_start, pair_end), pair_count) = mode_min(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )
    .ok_or(EmptyDataset)?;

    Ok(StationReport {
        start_station: start_station.to_string(),
        start_count,
        end_station: end_station.to_string(),
        end_count,
        pair: (pair_start.to_string(), pair_end.to_string()),
        pair_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::TripRecord;
    use crate::schema::City;
    use chrono::NaiveDateTime;

    fn trip(from: &str, to: &str) -> TripRecord {
        let start_time =
            NaiveDateTime::parse_from_str("2017-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(
            start_time,
            start_time + chrono::Duration::minutes(5),
            300.0,
            from.to_string(),
            to.to_string(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_most_common_stations_and_pair() {
        let data = Dataset::new(
            City::Washington,
            vec![trip("A", "X"), trip("B", "Y"), trip("A", "X")],
        );

        let report = station_report(&data).unwrap();
        assert_eq!(report.start_station, "A");
        assert_eq!(report.start_count, 2);
        assert_eq!(report.end_station, "X");
        assert_eq!(report.end_count, 2);
        assert_eq!(report.pair, ("A".to_string(), "X".to_string()));
        assert_eq!(report.pair_count, 2);
    }

    #[test]
    fn test_station_tie_is_lexicographic() {
        let data = Dataset::new(City::Washington, vec![trip("B", "Y"), trip("A", "X")]);

        let report = station_report(&data).unwrap();
        assert_eq!(report.start_station, "A");
        assert_eq!(report.start_count, 1);
        assert_eq!(report.end_station, "X");
    }

    #[test]
    fn test_pair_tie_compares_start_station_first() {
        let data = Dataset::new(City::Washington, vec![trip("B", "A"), trip("A", "Z")]);

        let report = station_report(&data).unwrap();
        assert_eq!(report.pair, ("A".to_string(), "Z".to_string()));
    }

    #[test]
    fn test_no_name_normalization() {
        // "a" and "A" are distinct stations.
        let data = Dataset::new(
            City::Washington,
            vec![trip("a", "X"), trip("A", "X"), trip("A", "X")],
        );

        let report = station_report(&data).unwrap();
        assert_eq!(report.start_station, "A");
        assert_eq!(report.start_count, 2);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let data = Dataset::new(City::Washington, vec![]);
        assert_eq!(station_report(&data), Err(EmptyDataset));
    }
}
