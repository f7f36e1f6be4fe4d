//! Filter errors

use gridline_core::GridError;
use thiserror::Error;

use crate::operator::FilterOperator;

pub type FilterResult<T> = Result<T, FilterError>;

/// Filter errors carrying enough context to tell the user which column and term failed
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Unknown filter column: {0}")]
    UnknownColumn(String),

    #[error("Invalid operand '{operand}' for {operator} on column '{column}': {reason}")]
    InvalidOperand {
        column: String,
        operator: FilterOperator,
        operand: String,
        reason: String,
    },

    #[error("Operator {operator} is not supported on {kind} column '{column}'")]
    UnsupportedOperator {
        column: String,
        operator: FilterOperator,
        kind: &'static str,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Core(#[from] GridError),
}
