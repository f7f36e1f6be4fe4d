//! Search conditions for server-side search
//!
//! When the data source filters remotely, the raw search text is forwarded
//! per column and the server applies the same term grammar.

use gridline_schema::SemanticKind;
use serde::{Deserialize, Serialize};

use crate::synthesizer::{FilterSyntax, SearchEntry};

/// One column's search text, as sent to the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCondition {
    pub column: String,
    /// Trimmed terms, rejoined with the separator
    pub value: String,
    #[serde(rename = "type")]
    pub kind: SemanticKind,
    pub is_function: bool,
}

/// Conditions for every entry with at least one term. Empty terms are dropped.
pub fn search_conditions(entries: &[SearchEntry], syntax: &FilterSyntax) -> Vec<SearchCondition> {
    let separator = syntax.separator.to_string();
    entries
        .iter()
        .filter_map(|entry| {
            let terms: Vec<&str> = syntax.terms(&entry.text).collect();
            if terms.is_empty() {
                return None;
            }
            Some(SearchCondition {
                column: entry.column.clone(),
                value: terms.join(separator.as_str()),
                kind: entry.kind,
                is_function: entry.is_function,
            })
        })
        .collect()
}
