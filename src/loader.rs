//! Trip dataset loading and time-field derivation.
//!
//! Reads a city's CSV into an ordered, immutable [`Dataset`]. Timestamps
//! are parsed once at load and the month/weekday/hour projections derived
//! from the start time; they are never re-derived downstream.

use crate::error::LoadError;
use crate::schema::{City, CitySchema};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every city's CSV must carry.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];

/// One bicycle rental event.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // Projections of start_time, private so they cannot drift from the
    // timestamp they were derived from.
    month: u32,
    weekday: u32,
    hour: u32,
}

impl TripRecord {
    /// Builds a record, deriving the month/weekday/hour projections from
    /// `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_seconds: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> TripRecord {
        TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration_seconds,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Calendar month of the start time, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Weekday of the start time, Monday = 0 .. Sunday = 6.
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Hour of the start time, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

/// An ordered batch of trips for one city, immutable once loaded.
///
/// Filtering produces a new `Dataset`; the source sequence is never
/// mutated, so repeated reports over one load are reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: City,
    schema: CitySchema,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: City, records: Vec<TripRecord>) -> Dataset {
        Dataset {
            city,
            schema: city.schema(),
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> CitySchema {
        self.schema
    }

    /// Records in their original file order.
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A row as it appears in the source CSV, before validation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Source files carry birth years as floats ("1992.0").
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads every trip for `city` from its CSV file under `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset, LoadError> {
    let path = data_dir.join(city.csv_file());
    debug!(path = %path.display(), city = %city, "Opening trip CSV");

    let file = File::open(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    load_from_reader(city, file)
}

/// Loads a city's trips from any CSV reader.
pub fn load_from_reader<R: Read>(city: City, reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                city: city.name(),
                column,
            });
        }
    }

    let schema = city.schema();
    let mut records = Vec::new();

    for (i, row) in rdr.deserialize().enumerate() {
        let raw: RawTrip = row?;
        records.push(build_record(&schema, raw, i + 1)?);
    }

    info!(city = %city, rows = records.len(), "Trip CSV loaded");

    Ok(Dataset {
        city,
        schema,
        records,
    })
}

fn build_record(schema: &CitySchema, raw: RawTrip, row: usize) -> Result<TripRecord, LoadError> {
    let start_time = parse_timestamp(&raw.start_time, row)?;
    let end_time = parse_timestamp(&raw.end_time, row)?;

    let duration = raw.trip_duration.ok_or(LoadError::MissingValue {
        row,
        column: "Trip Duration",
    })?;
    if duration < 0.0 {
        return Err(LoadError::NegativeDuration {
            row,
            value: duration,
        });
    }

    let start_station = raw.start_station.ok_or(LoadError::MissingValue {
        row,
        column: "Start Station",
    })?;
    let end_station = raw.end_station.ok_or(LoadError::MissingValue {
        row,
        column: "End Station",
    })?;

    // Mask columns the city's schema does not carry, so absence stays
    // schema-wide even if the file happens to include the column.
    let user_type = if schema.user_type { raw.user_type } else { None };
    let gender = if schema.gender { raw.gender } else { None };
    let birth_year = if schema.birth_year {
        raw.birth_year.map(|y| y as i32)
    } else {
        None
    };

    Ok(TripRecord::new(
        start_time,
        end_time,
        duration,
        start_station,
        end_station,
        user_type,
        gender,
        birth_year,
    ))
}

fn parse_timestamp(value: &str, row: usize) -> Result<NaiveDateTime, LoadError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| LoadError::Timestamp {
        row,
        value: value.to_string(),
        source,
    })
}
