//! Result types produced by the report generators.

use serde::Serialize;
use std::collections::BTreeMap;

/// Modal travel times across a dataset. Ties break toward the smallest
/// value, so the result is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    /// Most common start month, 1-12.
    pub month: u32,
    /// Most common start weekday, Monday = 0 .. Sunday = 6.
    pub weekday: u32,
    /// Most common start hour, 0-23.
    pub hour: u32,
}

/// Most popular stations and station pair, with occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub start_station: String,
    pub start_count: usize,
    pub end_station: String,
    pub end_count: usize,
    /// Most common (start, end) combination.
    pub pair: (String, String),
    pub pair_count: usize,
}

/// Total and mean trip duration over the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationReport {
    pub trips: usize,
    /// Sum of trip durations, in hours.
    pub total_hours: f64,
    /// Mean trip duration, in minutes.
    pub mean_minutes: f64,
}

/// A statistic over a per-city optional column.
///
/// `Unavailable` means the city's schema does not carry the column at all;
/// it is distinct from an available-but-empty result, so "zero subscribers"
/// and "no User Type data for this city" never collapse into each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldStat<T> {
    Available(T),
    Unavailable,
}

impl<T> FieldStat<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, FieldStat::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            FieldStat::Available(value) => Some(value),
            FieldStat::Unavailable => None,
        }
    }
}

/// Birth year range and mode over the records that carry a birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    /// Most common year, smallest on ties.
    pub most_common: i32,
}

/// Rider demographics: user type and gender counts plus birth year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub user_types: FieldStat<BTreeMap<String, usize>>,
    /// Records with a missing gender are excluded from the counts; they do
    /// not form a "missing" bucket.
    pub genders: FieldStat<BTreeMap<String, usize>>,
    /// `Available(None)` when the column exists for the city but no record
    /// carries a value.
    pub birth_years: FieldStat<Option<BirthYearStats>>,
}
