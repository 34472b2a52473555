//! Error types for loading and querying launch records.

use std::path::PathBuf;

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Error type for the launch table and the chart queries built on it.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The CSV file could not be opened or read.
    #[error("Failed to read launch data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// polars failed to parse, cast or aggregate the table.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A column the dashboard relies on is absent from the CSV header.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// An outcome value other than 0 or 1 was found. `row` counts data rows
    /// of the source file from zero, before incomplete rows are dropped.
    #[error("Invalid outcome class '{value}' at row {row}; expected 0 or 1")]
    InvalidOutcome { row: usize, value: String },

    /// A numeric column holds text that is not a number.
    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    /// No usable launch records remain after cleaning.
    #[error("Launch dataset is empty")]
    EmptyDataset,

    /// The requested launch site does not appear in the dataset.
    #[error("Unknown launch site '{0}'")]
    UnknownSite(String),

    /// The payload range is inverted.
    #[error("Invalid payload range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DataError::InvalidOutcome {
            row: 3,
            value: "2".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid outcome class '2' at row 3; expected 0 or 1"
        );
        let err = DataError::InvalidValue {
            column: "Payload Mass (kg)".into(),
            row: 0,
            value: "heavy".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'heavy' in column 'Payload Mass (kg)' at row 0"
        );
        assert_eq!(
            DataError::UnknownSite("LC-99".into()).to_string(),
            "Unknown launch site 'LC-99'"
        );
    }
}
