//! Display-ready report structures.
//!
//! Turns the numeric report values into structures with month and weekday
//! names spelled out, ready for the presentation layer. Supports plain-text
//! rendering via `Display`, pretty-printing, and JSON serialization. Holds
//! no process-wide formatting state.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::reports::types::{
    BirthYearStats, DurationReport, FieldStat, StationReport, TimeReport, UserReport,
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of a 1-based calendar month index.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("unknown")
}

/// Name of a weekday index, Monday = 0 .. Sunday = 6.
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES
        .get(weekday as usize)
        .copied()
        .unwrap_or("unknown")
}

/// Travel time report with names resolved for display.
#[derive(Debug, Serialize)]
pub struct TimeDisplay {
    pub most_common_month: &'static str,
    pub most_common_day: &'static str,
    pub most_common_hour: u32,
}

impl From<&TimeReport> for TimeDisplay {
    fn from(report: &TimeReport) -> Self {
        TimeDisplay {
            most_common_month: month_name(report.month),
            most_common_day: weekday_name(report.weekday),
            most_common_hour: report.hour,
        }
    }
}

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most common month is {}", self.most_common_month)?;
        writeln!(f, "The most common day is {}", self.most_common_day)?;
        write!(f, "The most common hour is {}", self.most_common_hour)
    }
}

/// Station popularity report for display.
#[derive(Debug, Serialize)]
pub struct StationDisplay {
    pub most_common_start_station: String,
    pub start_count: usize,
    pub most_common_end_station: String,
    pub end_count: usize,
    pub most_common_trip: (String, String),
    pub trip_count: usize,
}

impl From<&StationReport> for StationDisplay {
    fn from(report: &StationReport) -> Self {
        StationDisplay {
            most_common_start_station: report.start_station.clone(),
            start_count: report.start_count,
            most_common_end_station: report.end_station.clone(),
            end_count: report.end_count,
            most_common_trip: report.pair.clone(),
            trip_count: report.pair_count,
        }
    }
}

impl fmt::Display for StationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The most common start station is {} ({} trips)",
            self.most_common_start_station, self.start_count
        )?;
        writeln!(
            f,
            "The most common end station is {} ({} trips)",
            self.most_common_end_station, self.end_count
        )?;
        write!(
            f,
            "The most common trip is {} -> {} ({} trips)",
            self.most_common_trip.0, self.most_common_trip.1, self.trip_count
        )
    }
}

/// Trip duration report for display.
#[derive(Debug, Serialize)]
pub struct DurationDisplay {
    pub trips: usize,
    pub total_hours: f64,
    pub mean_minutes: f64,
}

impl From<&DurationReport> for DurationDisplay {
    fn from(report: &DurationReport) -> Self {
        DurationDisplay {
            trips: report.trips,
            total_hours: report.total_hours,
            mean_minutes: report.mean_minutes,
        }
    }
}

impl fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The total travel time was {:.2} hours over {} trips",
            self.total_hours, self.trips
        )?;
        write!(
            f,
            "The mean travel time was {:.2} minutes",
            self.mean_minutes
        )
    }
}

/// User demographics report for display.
#[derive(Debug, Serialize)]
pub struct UserDisplay {
    pub user_types: FieldStat<BTreeMap<String, usize>>,
    pub genders: FieldStat<BTreeMap<String, usize>>,
    pub birth_years: FieldStat<Option<BirthYearStats>>,
}

impl From<&UserReport> for UserDisplay {
    fn from(report: &UserReport) -> Self {
        UserDisplay {
            user_types: report.user_types.clone(),
            genders: report.genders.clone(),
            birth_years: report.birth_years.clone(),
        }
    }
}

fn write_counts(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    counts: &FieldStat<BTreeMap<String, usize>>,
) -> fmt::Result {
    match counts {
        FieldStat::Available(counts) => {
            writeln!(f, "{label} counts:")?;
            for (value, count) in counts {
                writeln!(f, "  {value}: {count}")?;
            }
            Ok(())
        }
        FieldStat::Unavailable => {
            writeln!(f, "{label} data is not available for this city")
        }
    }
}

impl fmt::Display for UserDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User type", &self.user_types)?;
        write_counts(f, "Gender", &self.genders)?;
        match &self.birth_years {
            FieldStat::Available(Some(stats)) => write!(
                f,
                "The earliest birth year is {}, the latest is {}, and the most common is {}",
                stats.earliest, stats.latest, stats.most_common
            ),
            FieldStat::Available(None) => write!(f, "No birth years recorded"),
            FieldStat::Unavailable => {
                write!(f, "Birth year data is not available for this city")
            }
        }
    }
}

/// Logs a display structure using Rust's debug pretty-print format.
pub fn print_pretty<T: fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a display structure as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "unknown");
        assert_eq!(month_name(13), "unknown");
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(0), "Monday");
        assert_eq!(weekday_name(6), "Sunday");
        assert_eq!(weekday_name(7), "unknown");
    }

    #[test]
    fn test_time_display() {
        let report = TimeReport {
            month: 6,
            weekday: 4,
            hour: 17,
        };
        let display = TimeDisplay::from(&report);
        assert_eq!(display.most_common_month, "June");
        assert_eq!(display.most_common_day, "Friday");

        let text = display.to_string();
        assert!(text.contains("The most common month is June"));
        assert!(text.contains("The most common hour is 17"));
    }

    #[test]
    fn test_station_display() {
        let report = StationReport {
            start_station: "A".to_string(),
            start_count: 2,
            end_station: "X".to_string(),
            end_count: 2,
            pair: ("A".to_string(), "X".to_string()),
            pair_count: 2,
        };
        let text = StationDisplay::from(&report).to_string();
        assert!(text.contains("start station is A (2 trips)"));
        assert!(text.contains("trip is A -> X (2 trips)"));
    }

    #[test]
    fn test_user_display_unavailable_fields() {
        let report = UserReport {
            user_types: FieldStat::Unavailable,
            genders: FieldStat::Unavailable,
            birth_years: FieldStat::Unavailable,
        };
        let text = UserDisplay::from(&report).to_string();
        assert!(text.contains("User type data is not available for this city"));
        assert!(text.contains("Gender data is not available for this city"));
        assert!(text.contains("Birth year data is not available for this city"));
    }

    #[test]
    fn test_user_display_counts() {
        let mut counts = BTreeMap::new();
        counts.insert("Subscriber".to_string(), 3);
        counts.insert("Customer".to_string(), 1);

        let report = UserReport {
            user_types: FieldStat::Available(counts),
            genders: FieldStat::Available(BTreeMap::new()),
            birth_years: FieldStat::Available(None),
        };
        let text = UserDisplay::from(&report).to_string();
        assert!(text.contains("  Subscriber: 3"));
        assert!(text.contains("  Customer: 1"));
        assert!(text.contains("No birth years recorded"));
    }

    #[test]
    fn test_duration_display() {
        let report = DurationReport {
            trips: 2,
            total_hours: 1.5,
            mean_minutes: 45.0,
        };
        let text = DurationDisplay::from(&report).to_string();
        assert!(text.contains("1.50 hours over 2 trips"));
        assert!(text.contains("45.00 minutes"));
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = TimeReport {
            month: 1,
            weekday: 0,
            hour: 8,
        };
        print_pretty(&TimeDisplay::from(&report));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = DurationReport {
            trips: 2,
            total_hours: 1.5,
            mean_minutes: 45.0,
        };
        print_json(&DurationDisplay::from(&report)).unwrap();
    }
}
