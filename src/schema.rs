//! Per-city schema registry.
//!
//! Each supported city ships its trip log as a CSV file with a slightly
//! different column set. The registry declares which optional columns a
//! city carries, so callers branch on an explicit capability flag instead
//! of probing the parsed file at runtime.

use crate::error::InvalidFilterValue;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A city with a supported trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of this city's trip CSV inside the data directory.
    pub fn csv_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Which optional columns this city's dataset carries.
    pub fn schema(self) -> CitySchema {
        match self {
            City::Chicago | City::NewYorkCity => CitySchema {
                user_type: true,
                gender: true,
                birth_year: true,
            },
            City::Washington => CitySchema {
                user_type: false,
                gender: false,
                birth_year: false,
            },
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(InvalidFilterValue::new("city", s)),
        }
    }
}

/// Optional-column capabilities for one city's dataset.
///
/// Absence is schema-wide: when a flag is false the loader masks the column
/// for every record, so a field is never sparsely populated for a city that
/// does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitySchema {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}
