//! Change-set reducer
//!
//! Projects the pending changes of a table into a new table that holds only
//! the rows worth persisting.

use gridline_core::{Row, RowState, Table};
use serde::{Deserialize, Serialize};

use crate::diff::{is_actually_modified, is_vacuous_add};

/// Counts describing one reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeSummary {
    /// Rows in Added, Modified or Deleted state
    pub candidates: usize,
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
    /// Added rows dropped because every cell was blank
    pub pruned_blank: usize,
    /// Modified rows dropped because no value actually changed
    pub pruned_unchanged: usize,
}

impl ChangeSummary {
    /// Rows kept in the change-set
    pub fn kept(&self) -> usize {
        self.added + self.modified + self.deleted
    }

    pub fn is_empty(&self) -> bool {
        self.kept() == 0
    }
}

/// Minimal change-set of `table`, named `table_name`.
///
/// Surviving rows keep their state and snapshots, in source order. Columns are
/// copied with primary-key and mandatory flags cleared. The source table is
/// not modified.
pub fn reduce(table: &Table, table_name: &str) -> Table {
    reduce_with_summary(table, table_name).0
}

/// [`reduce`], also returning what was kept and pruned
#[tracing::instrument(skip(table), fields(source = %table.name(), rows = table.row_count()))]
pub fn reduce_with_summary(table: &Table, table_name: &str) -> (Table, ChangeSummary) {
    let mut summary = ChangeSummary::default();
    let mut changes = table.project(table_name, |index, row| keep(index, row, &mut summary));
    changes.clear_constraints();

    tracing::info!(
        "Reduced {} pending rows to {} (added={}, modified={}, deleted={}, pruned_blank={}, pruned_unchanged={})",
        summary.candidates,
        summary.kept(),
        summary.added,
        summary.modified,
        summary.deleted,
        summary.pruned_blank,
        summary.pruned_unchanged
    );
    (changes, summary)
}

fn keep(index: usize, row: &Row, summary: &mut ChangeSummary) -> bool {
    if row.state().is_change() {
        summary.candidates += 1;
    }
    match row.state() {
        RowState::Unchanged => false,
        RowState::Added if is_vacuous_add(row) => {
            tracing::trace!("Pruning blank new row {}", index);
            summary.pruned_blank += 1;
            false
        }
        RowState::Added => {
            summary.added += 1;
            true
        }
        RowState::Modified if !is_actually_modified(row) => {
            tracing::trace!("Pruning row {} with no effective edits", index);
            summary.pruned_unchanged += 1;
            false
        }
        RowState::Modified => {
            summary.modified += 1;
            true
        }
        RowState::Deleted => {
            summary.deleted += 1;
            true
        }
    }
}
