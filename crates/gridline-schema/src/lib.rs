//! Gridline Schema - what each column of a bound table holds
//!
//! Runs once per table bind. The classifier tags every column with a
//! [`SemanticKind`], including the boolean-enum heuristic that looks at the
//! values actually present rather than the declared type. The layout module
//! turns that into the per-column descriptors a grid needs (caption, widget,
//! visibility, alignment).

mod caption;
mod classifier;
mod kind;
mod layout;

pub use caption::display_caption;
pub use classifier::{BooleanEvidence, ClassifierOptions, ColumnKinds, classify};
pub use kind::{BooleanTokens, CheckState, SemanticKind};
pub use layout::{ColumnLayout, ColumnWidget, LayoutOptions, TableLayout, row_highlight};
