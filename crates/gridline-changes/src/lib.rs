//! Gridline Changes - minimal change-sets for persisting grid edits
//!
//! After a user has been editing a table, [`reduce`] projects the rows a
//! persistence layer actually needs to act on: non-blank inserts, edits that
//! changed something and deletions. The source table is left untouched.

mod diff;
mod reducer;

pub use diff::{is_actually_modified, is_vacuous_add};
pub use reducer::{ChangeSummary, reduce, reduce_with_summary};
