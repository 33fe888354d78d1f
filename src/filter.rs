//! Month and weekday filtering over a loaded dataset.

use crate::error::InvalidFilterValue;
use crate::loader::Dataset;
use crate::schema::City;
use chrono::Weekday;
use std::str::FromStr;

/// A month the trip datasets span. The source files only cover the first
/// half of the year, so July through December are not valid filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// 1-based calendar index, January = 1.
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

impl FromStr for Month {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            _ => Err(InvalidFilterValue::new("month", s)),
        }
    }
}

/// A month restriction: no restriction, or one specific month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl FromStr for MonthFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MonthFilter::All)
        } else {
            Ok(MonthFilter::Month(s.parse()?))
        }
    }
}

/// A weekday restriction: no restriction, or one specific weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl FromStr for DayFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            Ok(DayFilter::All)
        } else {
            s.parse::<Weekday>()
                .map(DayFilter::Day)
                .map_err(|_| InvalidFilterValue::new("weekday", s))
        }
    }
}

/// A complete, validated query selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    /// Parses the three free-text selections, rejecting anything outside
    /// the supported enumerations.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<FilterCriteria, InvalidFilterValue> {
        Ok(FilterCriteria {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

/// Returns a new dataset containing the trips that satisfy both
/// restrictions, in their original relative order. The source dataset is
/// never mutated.
pub fn filter_trips(data: &Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    let records = data
        .records()
        .iter()
        .filter(|r| {
            let month_ok = match month {
                MonthFilter::All => true,
                MonthFilter::Month(m) => r.month() == m.index(),
            };
            let day_ok = match day {
                DayFilter::All => true,
                DayFilter::Day(d) => r.weekday() == d.num_days_from_monday(),
            };
            month_ok && day_ok
        })
        .cloned()
        .collect();

    Dataset::new(data.city(), records)
}
