//! Column layout descriptors
//!
//! Everything a grid needs to generate its columns for a bound table, without
//! depending on any widget toolkit.

use gridline_core::Table;
use serde::{Deserialize, Serialize};

use crate::caption::display_caption;
use crate::classifier::{ClassifierOptions, ColumnKinds, classify};
use crate::kind::{BooleanTokens, SemanticKind};

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Columns that are bound but never shown
    pub hidden_columns: Vec<String>,
    /// Column holding a per-row background color name
    pub highlight_column: String,
    /// Display format for numeric columns
    pub numeric_format: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            hidden_columns: vec!["HIGHLIGHT_COLOR".to_string()],
            highlight_column: "HIGHLIGHT_COLOR".to_string(),
            numeric_format: "N2".to_string(),
        }
    }
}

/// Widget a grid should generate for a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnWidget {
    TextBox,
    CheckBox(BooleanTokens),
    Image,
}

impl ColumnWidget {
    fn for_kind(kind: SemanticKind, tokens: &BooleanTokens) -> Self {
        match kind {
            SemanticKind::Binary => Self::Image,
            SemanticKind::BooleanEnum => Self::CheckBox(tokens.clone()),
            SemanticKind::String | SemanticKind::Numeric | SemanticKind::Other => Self::TextBox,
        }
    }
}

/// Layout of a single column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub name: String,
    /// Caption after display formatting
    pub caption: String,
    pub kind: SemanticKind,
    pub widget: ColumnWidget,
    pub visible: bool,
    pub editable: bool,
    /// Value is computed server side
    pub is_function: bool,
    pub align_right: bool,
    pub number_format: Option<String>,
}

/// Layout of a whole table
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub columns: Vec<ColumnLayout>,
    /// Searching only makes sense with more than one row to choose from
    pub search_enabled: bool,
}

impl TableLayout {
    /// Classify the table and describe every column
    pub fn build(
        table: &Table,
        classifier: &ClassifierOptions,
        options: &LayoutOptions,
    ) -> Self {
        let kinds = classify(table, classifier);
        let columns = table
            .columns()
            .iter()
            .zip(kinds.values())
            .map(|(column, &kind)| {
                let numeric = kind == SemanticKind::Numeric;
                ColumnLayout {
                    name: column.name.clone(),
                    caption: display_caption(&column.caption),
                    kind,
                    widget: ColumnWidget::for_kind(kind, &classifier.boolean_tokens),
                    visible: !options.hidden_columns.contains(&column.name),
                    editable: column.edit_allowed && !column.is_function,
                    is_function: column.is_function,
                    align_right: numeric,
                    number_format: numeric.then(|| options.numeric_format.clone()),
                }
            })
            .collect();

        Self {
            columns,
            search_enabled: table.row_count() > 1,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnLayout> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column kinds in column order
    pub fn kinds(&self) -> ColumnKinds {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.kind))
            .collect()
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnLayout> {
        self.columns.iter().filter(|c| c.visible)
    }
}

/// Background color name for a row, from the highlight column if the table has one
pub fn row_highlight(table: &Table, row: usize, options: &LayoutOptions) -> Option<String> {
    let col = table.column_index(&options.highlight_column)?;
    let text = table.row(row)?.get(col)?.to_text();
    let color = text.trim();
    (!color.is_empty()).then(|| color.to_string())
}
