//! Query synthesis from per-column search text

use gridline_schema::{BooleanTokens, CheckState, ColumnLayout, ColumnWidget, SemanticKind};
use serde::{Deserialize, Serialize};

use crate::expression::{Comparison, FilterExpression};
use crate::operator::{WILDCARD, parse_operator_with};

/// Search-text syntax configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSyntax {
    /// Separates several terms typed into one column's search box
    pub separator: char,
    /// Marks a term as a pattern
    pub wildcard: char,
}

impl Default for FilterSyntax {
    fn default() -> Self {
        Self {
            separator: ';',
            wildcard: WILDCARD,
        }
    }
}

impl FilterSyntax {
    /// Non-empty, trimmed terms of a search text
    pub fn terms<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.split(self.separator)
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Search text entered for one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub column: String,
    pub kind: SemanticKind,
    /// Raw text, possibly several terms separated by the syntax separator
    pub text: String,
    /// Checkbox literals, for boolean-enum columns
    pub boolean_tokens: Option<BooleanTokens>,
    pub is_function: bool,
}

impl SearchEntry {
    pub fn new(column: impl Into<String>, kind: SemanticKind, text: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            kind,
            text: text.into(),
            boolean_tokens: None,
            is_function: false,
        }
    }

    /// Blank entry for a generated grid column
    pub fn for_column(layout: &ColumnLayout) -> Self {
        let boolean_tokens = match &layout.widget {
            ColumnWidget::CheckBox(tokens) => Some(tokens.clone()),
            _ => None,
        };
        Self {
            column: layout.name.clone(),
            kind: layout.kind,
            text: String::new(),
            boolean_tokens,
            is_function: layout.is_function,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Search by checkbox state; the text becomes the matching literal.
    ///
    /// Has no effect on entries without boolean tokens.
    pub fn with_check_state(mut self, state: CheckState) -> Self {
        if let Some(tokens) = &self.boolean_tokens {
            self.text = tokens.token_for(state).to_string();
        }
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Combine every entry's terms into one conjunctive filter.
///
/// Blank entries impose no constraint and contribute no comparison. The
/// expression records the syntax wildcard for evaluation.
pub fn build_filter(entries: &[SearchEntry], syntax: &FilterSyntax) -> FilterExpression {
    let mut expression = FilterExpression::default().with_wildcard(syntax.wildcard);
    for entry in entries.iter().filter(|e| !e.is_blank()) {
        for term in syntax.terms(&entry.text) {
            let (operator, operand) = parse_operator_with(term, syntax.wildcard);
            expression.push(Comparison::new(entry.column.clone(), operator, operand));
        }
    }
    tracing::debug!(
        "Synthesized filter with {} comparisons: {}",
        expression.len(),
        expression
    );
    expression
}
