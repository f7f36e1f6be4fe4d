//! Filter expression AST

use serde::{Deserialize, Serialize};

use crate::operator::{FilterOperator, WILDCARD};

/// One atomic comparison: column, operator, operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub column: String,
    pub operator: FilterOperator,
    pub operand: String,
}

impl Comparison {
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        operand: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            operand: operand.into(),
        }
    }

    /// Row-filter fragment, e.g. `` `NAME` LIKE 'A%' ``
    pub fn to_row_filter(&self) -> String {
        format!(
            "{} {} {}",
            quote_identifier(&self.column),
            self.operator.symbol(),
            quote_literal(&self.operand)
        )
    }
}

/// Conjunction of comparisons. An empty expression matches every row.
///
/// Carries the wildcard its pattern terms were written with, so evaluation
/// always agrees with parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    comparisons: Vec<Comparison>,
    #[serde(default = "default_wildcard")]
    wildcard: char,
}

fn default_wildcard() -> char {
    WILDCARD
}

impl Default for FilterExpression {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FilterExpression {
    pub fn new(comparisons: Vec<Comparison>) -> Self {
        Self {
            comparisons,
            wildcard: WILDCARD,
        }
    }

    /// Same comparisons, with pattern terms using `wildcard`
    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn push(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    /// Columns referenced, in first-use order
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for comparison in &self.comparisons {
            if !columns.contains(&comparison.column.as_str()) {
                columns.push(&comparison.column);
            }
        }
        columns
    }
}

impl std::fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, comparison) in self.comparisons.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            f.write_str(&comparison.to_row_filter())?;
        }
        Ok(())
    }
}

/// Backtick-quote a column name so it is referenced verbatim
fn quote_identifier(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('`', "\\`");
    format!("`{}`", escaped)
}

/// Single-quote a literal, doubling embedded quotes
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
