//! Shared fixtures for filter integration tests

use gridline_core::{Column, ColumnType, Table, Value};

/// Initialize logging for tests if not already initialized
pub fn initialize_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("gridline_filter=debug".parse().unwrap()),
            )
            .with_test_writer()
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Pick-list of employees: string, numeric, boolean-enum and binary columns
pub fn employees() -> Table {
    let mut table = Table::new(
        "employees",
        vec![
            Column::new("NAME", ColumnType::String),
            Column::new("AGE", ColumnType::Number),
            Column::new("ACTIVE", ColumnType::String),
            Column::new("PHOTO", ColumnType::Binary),
            Column::new("DEPT CODE", ColumnType::String),
        ],
    )
    .expect("valid columns");

    let rows = [
        ("Alice", Value::Int(34), "TRUE", "HR"),
        ("Bob", Value::Int(19), "FALSE", "IT"),
        ("Smith", Value::Float(52.5), "TRUE", "IT"),
        ("smithers", Value::Null, "FALSE", "OPS"),
    ];
    for (name, age, active, dept) in rows {
        table
            .load_row(vec![
                name.into(),
                age,
                active.into(),
                Value::Bytes(vec![1, 2, 3]),
                dept.into(),
            ])
            .expect("row matches columns");
    }
    table
}
