//! Gridline Core - the versioned table every other Gridline crate works on
//!
//! This crate owns the data model shared by the classifier, the filter
//! engine and the change-set reducer:
//!
//! - `Value` - a single cell value with a stable textual form
//! - `Column` - column definition with declared `ColumnType` and caption
//! - `Row` - a row with a lifecycle `RowState`, a current snapshot and the
//!   original snapshot it was edited from
//! - `Table` - ordered columns and rows plus the edit-tracking operations a
//!   grid applies while the user types
//!
//! The table is supplied by an external loader; nothing here persists it.

mod error;
mod table;
mod types;

pub use error::*;
pub use table::*;
pub use types::*;
