//! Error types for the users file
//!
//! A [`RecordError`] concerns one row and never stops a load; a [`StoreError`]
//! concerns the underlying stream and does.

use thiserror::Error;

/// Number of fields in every row of the users file
pub const FIELD_COUNT: usize = 7;

/// Why a single row did not produce a user record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The row does not have exactly seven fields
    #[error("Expected 7 fields, got {found}")]
    FieldCount {
        /// Number of fields found
        found: usize,
    },

    /// The level is not one of the known levels
    #[error("Got invalid level '{0}'")]
    InvalidLevel(String),

    /// A timestamp field does not match the file format
    #[error("Invalid timestamp in {field}: '{value}'")]
    InvalidTimestamp {
        /// Name of the field
        field: &'static str,
        /// The rejected text
        value: String,
    },

    /// The row is not valid UTF-8
    #[error("Row is not valid UTF-8: {0}")]
    Encoding(String),
}

impl RecordError {
    /// Whether the skip should be reported to the operator at warning level
    ///
    /// A wrong field count is routine (blank separators, stray lines); the other
    /// errors point at a record someone meant to be loaded.
    pub fn is_logged(&self) -> bool {
        !matches!(self, RecordError::FieldCount { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RecordError::FieldCount { .. } => "Field Count",
            RecordError::InvalidLevel(_) => "Level",
            RecordError::InvalidTimestamp { .. } => "Timestamp",
            RecordError::Encoding(_) => "Encoding",
        }
    }
}

/// Errors of the stream the users file is read from or written to
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV layer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for users file operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_record_error_messages() {
        assert_eq!(RecordError::FieldCount { found: 6 }.to_string(), "Expected 7 fields, got 6");
        assert_eq!(
            RecordError::InvalidLevel("admin".to_string()).to_string(),
            "Got invalid level 'admin'"
        );
        assert_eq!(
            RecordError::InvalidTimestamp { field: "valid_from", value: "soon".to_string() }
                .to_string(),
            "Invalid timestamp in valid_from: 'soon'"
        );
    }

    #[test]
    fn test_record_error_logging_policy() {
        assert!(!RecordError::FieldCount { found: 3 }.is_logged());
        assert!(RecordError::InvalidLevel("x".to_string()).is_logged());
        assert!(RecordError::Encoding("bad".to_string()).is_logged());
    }

    #[test]
    fn test_record_error_categories() {
        assert_eq!(RecordError::FieldCount { found: 0 }.category(), "Field Count");
        assert_eq!(RecordError::InvalidLevel(String::new()).category(), "Level");
    }

    #[test]
    fn test_store_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let store_error: StoreError = io_error.into();
        assert!(matches!(store_error, StoreError::Io(_)));
    }
}
