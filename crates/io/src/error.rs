//! Error types for isithot-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the isithot-io crate.
///
/// This enum covers missing files, format-specific failures from the CSV and
/// Parquet readers, columns absent from a file, unparseable cell values and
/// JSON serialisation problems.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when a mapped column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be interpreted.
    #[error("invalid value '{value}' in column '{column}' at row {row} of {}", path.display())]
    InvalidValue {
        /// File being read.
        path: PathBuf,
        /// Column of the offending cell.
        column: String,
        /// 0-based data row of the offending cell.
        row: usize,
        /// Raw cell contents.
        value: String,
    },

    /// Returned when a column has a type that cannot be read.
    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// Arrow data type of the column.
        data_type: String,
    },

    /// Returned when output cannot be serialised or written.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
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

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialization {
            reason: e.to_string(),
        }
    }
}
