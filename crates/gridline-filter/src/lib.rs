//! Gridline Filter - free-text column search
//!
//! Users type search terms per column, optionally several separated by `;`,
//! each optionally prefixed with a comparison operator (`<>`, `!=`, `<=`,
//! `>=`, `<`, `>`) or containing the `%` wildcard. This crate:
//!
//! - parses a single term into an operator and operand ([`parse_operator`])
//! - synthesizes a conjunctive [`FilterExpression`] from every column's
//!   search text ([`build_filter`])
//! - renders the expression as a row-filter string or compiles it into a
//!   predicate evaluated directly against a table ([`CompiledFilter`])
//! - forwards raw search text as [`SearchCondition`]s for server-side search

mod error;
mod evaluate;
mod expression;
mod operator;
mod search_condition;
mod synthesizer;

pub use error::{FilterError, FilterResult};
pub use evaluate::{CompiledFilter, FilterOptions};
pub use expression::{Comparison, FilterExpression};
pub use operator::{FilterOperator, parse_operator};
pub use search_condition::{SearchCondition, search_conditions};
pub use synthesizer::{FilterSyntax, SearchEntry, build_filter};
