//! Column classification
//!
//! Declared types map straight to a [`SemanticKind`], except for string
//! columns: those are scanned in full and become [`SemanticKind::BooleanEnum`]
//! when the values present are boolean literals. The scan is O(rows x
//! columns) and runs once per bind, never per keystroke.

use gridline_core::{Column, ColumnType, Table};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kind::{BooleanTokens, SemanticKind};

/// Column name to kind, in column order
pub type ColumnKinds = IndexMap<String, SemanticKind>;

/// How much literal evidence a string column needs to count as a boolean enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanEvidence {
    /// Every non-null value is a boolean literal, and there is at least one
    #[default]
    AllLiterals,
    /// At least one non-null value is a boolean literal
    AnyLiteral,
}

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Literals that mark a string column as a boolean enum
    pub boolean_tokens: BooleanTokens,
    pub evidence: BooleanEvidence,
}

/// Classify every column of the table.
///
/// Must be re-run whenever the table's row set is replaced, since the
/// boolean-enum decision depends on the rows present.
#[tracing::instrument(skip_all, fields(table = table.name(), rows = table.row_count()))]
pub fn classify(table: &Table, options: &ClassifierOptions) -> ColumnKinds {
    let kinds: ColumnKinds = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            (
                column.name.clone(),
                classify_column(table, index, column, options),
            )
        })
        .collect();

    tracing::debug!(
        "Classified {} columns: {:?}",
        kinds.len(),
        kinds.iter().map(|(n, k)| (n.as_str(), k.label())).collect::<Vec<_>>()
    );
    kinds
}

fn classify_column(
    table: &Table,
    index: usize,
    column: &Column,
    options: &ClassifierOptions,
) -> SemanticKind {
    let declared = SemanticKind::from_declared(column.data_type);
    if column.data_type != ColumnType::String {
        return declared;
    }

    let tokens = &options.boolean_tokens;
    let mut observed = table
        .rows()
        .iter()
        .filter_map(|row| row.get(index))
        .filter(|value| !value.is_null())
        .map(|value| value.to_text())
        .peekable();

    // No evidence at all: empty table or an all-NULL column
    if observed.peek().is_none() {
        return declared;
    }

    let is_boolean = match options.evidence {
        BooleanEvidence::AllLiterals => observed.all(|text| tokens.is_literal(&text)),
        BooleanEvidence::AnyLiteral => observed.any(|text| tokens.is_literal(&text)),
    };

    if is_boolean {
        SemanticKind::BooleanEnum
    } else {
        declared
    }
}
