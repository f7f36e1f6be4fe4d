//! Semantic column kinds

use gridline_core::{ColumnType, Value};
use serde::{Deserialize, Serialize};

/// What a column holds, derived from its declared type and observed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticKind {
    String,
    Numeric,
    BooleanEnum,
    Binary,
    Other,
}

impl SemanticKind {
    /// Kind implied by the declared type alone, before looking at any values
    pub fn from_declared(data_type: ColumnType) -> Self {
        match data_type {
            ColumnType::String => Self::String,
            ColumnType::Number => Self::Numeric,
            ColumnType::Binary => Self::Binary,
            ColumnType::Boolean | ColumnType::Other => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::BooleanEnum => "boolean_enum",
            Self::Binary => "binary",
            Self::Other => "other",
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::BooleanEnum)
    }
}

/// State of a tri-state checkbox bound to a boolean-enum column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    Checked,
    Unchecked,
    #[default]
    Indeterminate,
}

/// Literal tokens stored in a boolean-enum column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanTokens {
    pub true_value: String,
    pub false_value: String,
    pub indeterminate_value: String,
}

impl Default for BooleanTokens {
    fn default() -> Self {
        Self {
            true_value: "TRUE".to_string(),
            false_value: "FALSE".to_string(),
            indeterminate_value: "FALSE".to_string(),
        }
    }
}

impl BooleanTokens {
    /// True when the text is exactly the true or the false token
    pub fn is_literal(&self, text: &str) -> bool {
        text == self.true_value || text == self.false_value
    }

    pub fn token_for(&self, state: CheckState) -> &str {
        match state {
            CheckState::Checked => &self.true_value,
            CheckState::Unchecked => &self.false_value,
            CheckState::Indeterminate => &self.indeterminate_value,
        }
    }

    /// Checkbox state for a stored cell value
    pub fn state_of(&self, value: &Value) -> CheckState {
        let text = value.to_text();
        if text == self.true_value.as_str() {
            CheckState::Checked
        } else if text == self.false_value.as_str() {
            CheckState::Unchecked
        } else {
            CheckState::Indeterminate
        }
    }
}
