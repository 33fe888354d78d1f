use crate::error::EmptyDataset;
use crate::loader::{Dataset, TripRecord};
use crate::reports::types::{BirthYearStats, FieldStat, UserReport};
use crate::reports::utility::{count_values, mode_min};

/// Computes rider demographics: user type counts, gender counts, and birth
/// year statistics.
///
/// Each sub-report is [`FieldStat::Unavailable`] when the city's schema
/// does not carry the column, so "no data for this city" never looks like
/// an empty result. Within an available column, per-record missing values
/// are simply excluded.
pub fn user_report(data: &Dataset) -> Result<UserReport, EmptyDataset> {
    let records = data.records();
    if records.is_empty() {
        return Err(EmptyDataset);
    }

    let schema = data.schema();

    let user_types = if schema.user_type {
        FieldStat::Available(count_values(records.iter().map(|r| r.user_type.as_deref())))
    } else {
        FieldStat::Unavailable
    };

    let genders = if schema.gender {
        FieldStat::Available(count_values(records.iter().map(|r| r.gender.as_deref())))
    } else {
        FieldStat::Unavailable
    };

    let birth_years = if schema.birth_year {
        FieldStat::Available(birth_year_stats(records))
    } else {
        FieldStat::Unavailable
    };

    Ok(UserReport {
        user_types,
        genders,
        birth_years,
    })
}

/// Range and mode over the records that carry a birth year. `None` when no
/// record does.
fn birth_year_stats(records: &[TripRecord]) -> Option<BirthYearStats> {
    let years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();

    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let (most_common, _) = mode_min(years)?;

    Some(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}
