//! Error types for anniv-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the anniv-io crate.
///
/// Covers missing files, Parquet and Arrow failures, schema problems
/// (absent or unconvertible columns) and null cells in required fields.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column cannot be converted to the expected type.
    #[error("column '{name}' cannot be read: {reason}")]
    InvalidColumn {
        /// Name of the offending column.
        name: String,
        /// Description of the conversion failure.
        reason: String,
    },

    /// Returned when a required cell is null.
    #[error("missing {field} at row {row}")]
    MissingField {
        /// Column the null was found in.
        field: String,
        /// Zero-based row across the whole file.
        row: usize,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}
