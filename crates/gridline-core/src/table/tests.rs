//! Tests for the versioned table

use super::*;
use pretty_assertions::assert_eq;

fn people() -> Table {
    let mut table = Table::new(
        "people",
        vec![
            Column::new("ID", ColumnType::Number).primary_key(),
            Column::new("FIRST_NAME", ColumnType::String),
            Column::new("ACTIVE", ColumnType::String),
        ],
    )
    .expect("valid columns");
    table
        .load_row(vec![Value::Int(1), "Alice".into(), "TRUE".into()])
        .unwrap();
    table
        .load_row(vec![Value::Int(2), "Bob".into(), "FALSE".into()])
        .unwrap();
    table
}

#[test]
fn test_duplicate_columns_rejected() {
    let err = Table::new(
        "t",
        vec![
            Column::new("A", ColumnType::String),
            Column::new("A", ColumnType::Number),
        ],
    )
    .unwrap_err();
    assert_eq!(err, GridError::DuplicateColumn("A".into()));
}

#[test]
fn test_row_width_checked() {
    let mut table = people();
    let err = table.load_row(vec![Value::Int(3)]).unwrap_err();
    assert_eq!(
        err,
        GridError::ColumnCountMismatch {
            expected: 3,
            actual: 1
        }
    );
}

#[test]
fn test_first_edit_snapshots_original() {
    let mut table = people();
    table.set_value(0, "FIRST_NAME", "Alicia").unwrap();
    table.set_value(0, "FIRST_NAME", "Ally").unwrap();

    let row = table.row(0).unwrap();
    assert_eq!(row.state(), RowState::Modified);
    assert_eq!(row.get(1), Some(&Value::from("Ally")));
    assert_eq!(row.get_original(1), Some(&Value::from("Alice")));
    assert_eq!(table.change_count(), 1);
}

#[test]
fn test_editing_added_row_keeps_added_state() {
    let mut table = people();
    let idx = table.add_blank_row();
    table.set_value(idx, "FIRST_NAME", "Carol").unwrap();

    let row = table.row(idx).unwrap();
    assert_eq!(row.state(), RowState::Added);
    assert!(row.original_values().is_none());
}

#[test]
fn test_deleting_added_row_removes_it() {
    let mut table = people();
    let idx = table.add_blank_row();
    table.delete_row(idx).unwrap();
    assert_eq!(table.row_count(), 2);
    assert!(!table.has_changes());
}

#[test]
fn test_deleted_row_rejects_edits_and_can_be_restored() {
    let mut table = people();
    table.delete_row(1).unwrap();
    assert_eq!(table.row(1).unwrap().state(), RowState::Deleted);
    assert_eq!(
        table.set_value(1, "FIRST_NAME", "Robert"),
        Err(GridError::RowDeleted(1))
    );

    table.restore_row(1).unwrap();
    let row = table.row(1).unwrap();
    assert_eq!(row.state(), RowState::Unchanged);
    assert!(row.original_values().is_none());
}

#[test]
fn test_restoring_edited_row_keeps_it_modified() {
    let mut table = people();
    table.set_value(0, "ACTIVE", "FALSE").unwrap();
    table.delete_row(0).unwrap();
    table.restore_row(0).unwrap();
    assert_eq!(table.row(0).unwrap().state(), RowState::Modified);
}

#[test]
fn test_reject_changes_restores_originals() {
    let mut table = people();
    table.set_value(0, "FIRST_NAME", "Alicia").unwrap();
    table.delete_row(1).unwrap();
    table.add_row(vec![Value::Int(3), "Carol".into(), Value::Null]).unwrap();

    table.reject_changes();

    assert_eq!(table, people());
}

#[test]
fn test_accept_changes_commits() {
    let mut table = people();
    table.set_value(0, "FIRST_NAME", "Alicia").unwrap();
    table.delete_row(1).unwrap();
    table.accept_changes();

    assert_eq!(table.row_count(), 1);
    assert!(!table.has_changes());
    assert_eq!(table.value(0, "FIRST_NAME").unwrap(), &Value::from("Alicia"));
}

#[test]
fn test_max_int() {
    let mut table = people();
    table.add_row(vec![Value::Null, "Carol".into(), Value::Null]).unwrap();
    assert_eq!(table.max_int("ID").unwrap(), Some(2));

    let empty = Table::new("e", vec![Column::new("ID", ColumnType::Number)]).unwrap();
    assert_eq!(empty.max_int("ID").unwrap(), None);
}

#[test]
fn test_max_int_reports_offending_cell() {
    let mut table = people();
    table.set_value(1, "ID", "two").unwrap();
    assert_eq!(
        table.max_int("ID"),
        Err(GridError::Conversion {
            column: "ID".into(),
            row: 1,
            value: "two".into(),
            target: "integer",
        })
    );
    assert_eq!(
        table.max_int("MISSING"),
        Err(GridError::UnknownColumn("MISSING".into()))
    );
}

#[test]
fn test_common_value() {
    let mut table = people();
    assert_eq!(table.common_value(&[0, 1], "ACTIVE").unwrap(), None);
    table.set_value(1, "ACTIVE", "TRUE").unwrap();
    assert_eq!(
        table.common_value(&[0, 1], "ACTIVE").unwrap(),
        Some("TRUE".to_string())
    );
    assert_eq!(table.common_value(&[], "ACTIVE").unwrap(), None);
    assert!(table.common_value(&[7], "ACTIVE").is_err());
}

#[test]
fn test_row_by_caption() {
    let mut table = Table::new(
        "t",
        vec![
            Column::new("ID", ColumnType::Number).with_caption("Id"),
            Column::new("NAME", ColumnType::String).with_caption("Name"),
        ],
    )
    .unwrap();
    table.load_row(vec![Value::Int(9), "Zed".into()]).unwrap();

    let picked = table.row_by_caption(0).unwrap();
    let keys: Vec<&str> = picked.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Id", "Name"]);
    assert_eq!(picked["Name"], Value::from("Zed"));
}

#[test]
fn test_without_constraints() {
    let column = Column::new("ID", ColumnType::Number).primary_key().function();
    let stripped = column.without_constraints();
    assert!(!stripped.primary_key);
    assert!(!stripped.mandatory);
    assert!(stripped.is_function);
}

#[test]
fn test_project_keeps_states_and_source() {
    let mut table = people();
    table.set_value(0, "FIRST_NAME", "Ann").unwrap();
    table.delete_row(1).unwrap();

    let mut projected = table.project("changes", |_, row| row.state().is_change());
    projected.clear_constraints();

    assert_eq!(projected.name(), "changes");
    assert_eq!(projected.row_count(), 2);
    assert_eq!(projected.rows()[0].state(), RowState::Modified);
    assert_eq!(projected.rows()[1].state(), RowState::Deleted);
    assert!(projected.columns().iter().all(|c| !c.primary_key && !c.mandatory));
    assert_eq!(table.rows()[1].state(), RowState::Deleted);
    assert!(table.columns()[0].primary_key);
}

#[test]
fn test_table_serializes() {
    let table = people();
    let json = serde_json::to_string(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
