//! Error types for the load/filter/report pipeline.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading a city's trip CSV.
///
/// Any of these aborts the current query cycle; the load is not retried.
#[derive(Debug)]
pub enum LoadError {
    /// The source file could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV itself was malformed.
    Csv(csv::Error),

    /// A column required by every city's schema is missing.
    MissingColumn {
        city: &'static str,
        column: &'static str,
    },

    /// A timestamp value could not be parsed. Rows are 1-based data rows.
    Timestamp {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },

    /// A required value was empty.
    MissingValue { row: usize, column: &'static str },

    /// A trip duration was negative.
    NegativeDuration { row: usize, value: f64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Csv(e) => write!(f, "malformed CSV: {e}"),
            LoadError::MissingColumn { city, column } => {
                write!(f, "{city} data is missing required column \"{column}\"")
            }
            LoadError::Timestamp { row, value, source } => {
                write!(f, "row {row}: unparsable timestamp \"{value}\": {source}")
            }
            LoadError::MissingValue { row, column } => {
                write!(f, "row {row}: missing required value for \"{column}\"")
            }
            LoadError::NegativeDuration { row, value } => {
                write!(f, "row {row}: negative trip duration {value}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv(e) => Some(e),
            LoadError::Timestamp { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

/// A report was requested over a dataset with zero records, so no mode,
/// mean, or range exists. Distinct from a computed-but-zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDataset;

impl fmt::Display for EmptyDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no trips match the current filter")
    }
}

impl std::error::Error for EmptyDataset {}

/// A city, month, or weekday name outside the supported enumeration.
///
/// The CLI validates its inputs before constructing filter values, so this
/// reaching a caller means that validation was bypassed; it fails loudly
/// rather than silently matching nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilterValue {
    kind: &'static str,
    value: String,
}

impl InvalidFilterValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        InvalidFilterValue {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for InvalidFilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} name: \"{}\"", self.kind, self.value)
    }
}

impl std::error::Error for InvalidFilterValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::MissingColumn {
            city: "washington",
            column: "Start Time",
        };
        assert_eq!(
            err.to_string(),
            "washington data is missing required column \"Start Time\""
        );

        let err = LoadError::MissingValue {
            row: 7,
            column: "Trip Duration",
        };
        assert_eq!(
            err.to_string(),
            "row 7: missing required value for \"Trip Duration\""
        );

        let err = LoadError::NegativeDuration {
            row: 2,
            value: -30.0,
        };
        assert!(err.to_string().contains("negative trip duration"));
    }

    #[test]
    fn test_empty_dataset_display() {
        assert_eq!(EmptyDataset.to_string(), "no trips match the current filter");
    }

    #[test]
    fn test_invalid_filter_value_display() {
        let err = InvalidFilterValue::new("month", "july");
        assert_eq!(err.to_string(), "invalid month name: \"july\"");
    }
}
