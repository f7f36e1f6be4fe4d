//! Row-level change detection

use gridline_core::{Row, RowState, Value};

/// Whether a Modified row differs from its original snapshot.
///
/// A row without an original snapshot cannot be proven unchanged and counts
/// as modified.
pub fn is_actually_modified(row: &Row) -> bool {
    let Some(original) = row.original_values() else {
        return true;
    };
    row.values().len() != original.len()
        || row
            .values()
            .iter()
            .zip(original)
            .any(|(current, original)| values_differ(current, original))
}

/// An Added row where every cell is NULL or blank
pub fn is_vacuous_add(row: &Row) -> bool {
    row.state() == RowState::Added && row.is_blank()
}

fn values_differ(current: &Value, original: &Value) -> bool {
    match (current, original) {
        (Value::Null, Value::Null) => false,
        (Value::Null, _) | (_, Value::Null) => true,
        (Value::Bytes(a), Value::Bytes(b)) => a != b,
        (a, b) => a.to_text() != b.to_text(),
    }
}
