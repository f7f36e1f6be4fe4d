//! Versioned in-memory table
//!
//! A [`Table`] holds ordered [`Column`] definitions and ordered [`Row`]s. Each
//! row pairs an owned current snapshot with the immutable original snapshot it
//! was edited from, tagged with an explicit [`RowState`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{GridError, Result};
use crate::types::{ColumnType, Value};

/// Column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Declared value type
    pub data_type: ColumnType,
    /// Raw caption before display formatting
    pub caption: String,
    /// Part of the primary key
    #[serde(default)]
    pub primary_key: bool,
    /// Must carry a value before the row can be saved
    #[serde(default)]
    pub mandatory: bool,
    /// Whether the grid lets the user edit this column
    #[serde(default = "default_edit_allowed")]
    pub edit_allowed: bool,
    /// Value is computed by a server-side function
    #[serde(default)]
    pub is_function: bool,
}

fn default_edit_allowed() -> bool {
    true
}

impl Column {
    /// Create a column whose caption is its name
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        let name = name.into();
        Self {
            caption: name.clone(),
            name,
            data_type,
            primary_key: false,
            mandatory: false,
            edit_allowed: true,
            is_function: false,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.mandatory = true;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.edit_allowed = false;
        self
    }

    pub fn function(mut self) -> Self {
        self.is_function = true;
        self
    }

    /// Same column with key and mandatory constraints removed
    pub fn without_constraints(&self) -> Self {
        Self {
            primary_key: false,
            mandatory: false,
            ..self.clone()
        }
    }
}

/// Lifecycle state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RowState {
    #[default]
    Unchanged,
    Added,
    Modified,
    Deleted,
}

impl RowState {
    /// Added, Modified or Deleted
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
        }
    }
}

/// A table row with its edit history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    state: RowState,
    current: Vec<Value>,
    original: Option<Vec<Value>>,
}

impl Row {
    /// A row as loaded from the data source
    pub fn unchanged(values: Vec<Value>) -> Self {
        Self {
            state: RowState::Unchanged,
            current: values,
            original: None,
        }
    }

    /// A row inserted in this session
    pub fn added(values: Vec<Value>) -> Self {
        Self {
            state: RowState::Added,
            current: values,
            original: None,
        }
    }

    /// A loaded row whose values were edited
    pub fn modified(original: Vec<Value>, current: Vec<Value>) -> Self {
        Self {
            state: RowState::Modified,
            current,
            original: Some(original),
        }
    }

    /// A loaded row marked for deletion
    pub fn deleted(values: Vec<Value>) -> Self {
        Self {
            state: RowState::Deleted,
            original: Some(values.clone()),
            current: values,
        }
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    /// Current values, one per column
    pub fn values(&self) -> &[Value] {
        &self.current
    }

    /// Values before the first edit, if the row was edited or deleted
    pub fn original_values(&self) -> Option<&[Value]> {
        self.original.as_deref()
    }

    /// Get a current value by column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.current.get(index)
    }

    /// Get an original value by column index
    pub fn get_original(&self, index: usize) -> Option<&Value> {
        self.original.as_ref().and_then(|values| values.get(index))
    }

    /// True when every current value is NULL or blank
    pub fn is_blank(&self) -> bool {
        self.current.iter().all(Value::is_blank)
    }

    fn len(&self) -> usize {
        self.current.len()
    }
}

/// Ordered columns plus versioned rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table, rejecting duplicate column names
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(GridError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Column index, or `UnknownColumn`
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| GridError::UnknownColumn(name.to_string()))
    }

    /// Current value of a cell
    pub fn value(&self, row: usize, column: &str) -> Result<&Value> {
        let col = self.require_column(column)?;
        let row_data = self.require_row(row)?;
        Ok(&row_data.current[col])
    }

    /// Append a row in whatever state it carries
    pub fn push_row(&mut self, row: Row) -> Result<usize> {
        self.check_width(row.len())?;
        if let Some(original) = &row.original {
            self.check_width(original.len())?;
        }
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Replace the whole row set
    pub fn set_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        for row in &rows {
            self.check_width(row.len())?;
        }
        self.rows = rows;
        tracing::debug!("Replaced row set of '{}', rows={}", self.name, self.rows.len());
        Ok(())
    }

    /// Append a row loaded from the data source
    pub fn load_row(&mut self, values: Vec<Value>) -> Result<usize> {
        self.push_row(Row::unchanged(values))
    }

    /// Append a new row
    pub fn add_row(&mut self, values: Vec<Value>) -> Result<usize> {
        let index = self.push_row(Row::added(values))?;
        tracing::info!(
            "Added new row, pending_count={}",
            self.change_count()
        );
        Ok(index)
    }

    /// Append a new row with every cell NULL
    pub fn add_blank_row(&mut self) -> usize {
        self.rows
            .push(Row::added(vec![Value::Null; self.columns.len()]));
        tracing::info!(
            "Added blank row, pending_count={}",
            self.change_count()
        );
        self.rows.len() - 1
    }

    /// Edit a cell. The first edit of an unchanged row snapshots its original values.
    pub fn set_value(&mut self, row: usize, column: &str, value: impl Into<Value>) -> Result<()> {
        let col = self.require_column(column)?;
        let row_data = self.require_row_mut(row)?;
        match row_data.state {
            RowState::Deleted => return Err(GridError::RowDeleted(row)),
            RowState::Unchanged => {
                row_data.original = Some(row_data.current.clone());
                row_data.state = RowState::Modified;
            }
            RowState::Added | RowState::Modified => {}
        }
        row_data.current[col] = value.into();
        Ok(())
    }

    /// Mark a row for deletion. New rows are dropped outright.
    pub fn delete_row(&mut self, row: usize) -> Result<()> {
        let row_data = self.require_row_mut(row)?;
        match row_data.state {
            RowState::Added => {
                self.rows.remove(row);
                tracing::info!("Removed unsaved row {}", row);
            }
            RowState::Deleted => {}
            RowState::Unchanged | RowState::Modified => {
                if row_data.original.is_none() {
                    row_data.original = Some(row_data.current.clone());
                }
                row_data.state = RowState::Deleted;
                tracing::info!(
                    "Marked row {} for deletion, pending_count={}",
                    row,
                    self.change_count()
                );
            }
        }
        Ok(())
    }

    /// Undo a deletion, returning the row to unchanged or modified
    pub fn restore_row(&mut self, row: usize) -> Result<()> {
        let row_data = self.require_row_mut(row)?;
        if row_data.state != RowState::Deleted {
            return Ok(());
        }
        if row_data.original.as_ref() == Some(&row_data.current) {
            row_data.original = None;
            row_data.state = RowState::Unchanged;
        } else {
            row_data.state = RowState::Modified;
        }
        Ok(())
    }

    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(|r| r.state.is_change())
    }

    /// Rows flagged Added, Modified or Deleted
    pub fn change_count(&self) -> usize {
        self.rows.iter().filter(|r| r.state.is_change()).count()
    }

    /// Commit every pending change: deleted rows go, the rest become unchanged
    pub fn accept_changes(&mut self) {
        self.rows.retain(|r| r.state != RowState::Deleted);
        for row in &mut self.rows {
            row.state = RowState::Unchanged;
            row.original = None;
        }
        tracing::info!("Accepted pending changes on '{}'", self.name);
    }

    /// Discard every pending change: new rows go, edited rows get their originals back
    pub fn reject_changes(&mut self) {
        self.rows.retain(|r| r.state != RowState::Added);
        for row in &mut self.rows {
            if let Some(original) = row.original.take() {
                row.current = original;
            }
            row.state = RowState::Unchanged;
        }
        tracing::info!("Discarded all pending changes on '{}'", self.name);
    }

    /// Largest integer in a column, ignoring NULLs.
    ///
    /// Any non-NULL value that is not an integer is a conversion error naming
    /// the offending row.
    pub fn max_int(&self, column: &str) -> Result<Option<i64>> {
        let col = self.require_column(column)?;
        let mut max = None;
        for (index, row) in self.rows.iter().enumerate() {
            let value = &row.current[col];
            if value.is_null() {
                continue;
            }
            let n = value.as_i64().ok_or_else(|| GridError::Conversion {
                column: column.to_string(),
                row: index,
                value: value.to_text().into_owned(),
                target: "integer",
            })?;
            max = Some(max.map_or(n, |m: i64| m.max(n)));
        }
        Ok(max)
    }

    /// The textual value shared by a column across the selected rows.
    ///
    /// Returns `None` for an empty selection or when the rows disagree.
    pub fn common_value(&self, rows: &[usize], column: &str) -> Result<Option<String>> {
        let col = self.require_column(column)?;
        let mut common: Option<String> = None;
        for &index in rows {
            let text = self.require_row(index)?.current[col].to_text();
            match &common {
                None => common = Some(text.into_owned()),
                Some(existing) if *existing == text => {}
                Some(_) => return Ok(None),
            }
        }
        Ok(common)
    }

    /// Current values of a row keyed by column caption
    pub fn row_by_caption(&self, row: usize) -> Result<IndexMap<String, Value>> {
        let row_data = self.require_row(row)?;
        Ok(self
            .columns
            .iter()
            .zip(row_data.current.iter())
            .map(|(c, v)| (c.caption.clone(), v.clone()))
            .collect())
    }

    /// New table named `name` with the same columns and a copy of the rows
    /// `keep` accepts, in order. Row states and snapshots are preserved.
    pub fn project(&self, name: impl Into<String>, mut keep: impl FnMut(usize, &Row) -> bool) -> Table {
        Table {
            name: name.into(),
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .enumerate()
                .filter(|(index, row)| keep(*index, *row))
                .map(|(_, row)| row.clone())
                .collect(),
        }
    }

    /// Clear primary-key and mandatory flags on every column
    pub fn clear_constraints(&mut self) {
        for column in &mut self.columns {
            *column = column.without_constraints();
        }
    }

    fn check_width(&self, actual: usize) -> Result<()> {
        if actual != self.columns.len() {
            return Err(GridError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual,
            });
        }
        Ok(())
    }

    fn require_row(&self, index: usize) -> Result<&Row> {
        let len = self.rows.len();
        self.rows
            .get(index)
            .ok_or(GridError::RowOutOfRange { index, len })
    }

    fn require_row_mut(&mut self, index: usize) -> Result<&mut Row> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(GridError::RowOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests;
