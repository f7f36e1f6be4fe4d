//! Error types for Gridline tables

use thiserror::Error;

/// Core error type for table operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Row has {actual} values but the table has {expected} columns")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("Row {index} is out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Row {0} is deleted")]
    RowDeleted(usize),

    #[error("Cannot convert value '{value}' in column '{column}' (row {row}) to {target}")]
    Conversion {
        column: String,
        row: usize,
        value: String,
        target: &'static str,
    },
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, GridError>;
