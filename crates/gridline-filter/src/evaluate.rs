//! In-memory evaluation of filter expressions
//!
//! A [`FilterExpression`] is compiled once against the table it filters:
//! column names are resolved, numeric operands parsed and patterns turned into
//! regexes, so a bad term fails up front instead of on the first row.

use gridline_core::{GridError, Row, RowState, Table, Value};
use gridline_schema::{ColumnKinds, SemanticKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::expression::{Comparison, FilterExpression};
use crate::operator::FilterOperator;

/// Evaluation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Compare text exactly instead of case-folded
    pub case_sensitive: bool,
}

#[derive(Debug, Clone)]
enum Matcher {
    Text(String),
    Number(f64),
    Pattern(Regex),
}

#[derive(Debug, Clone)]
struct CompiledComparison {
    column: String,
    index: usize,
    operator: FilterOperator,
    matcher: Matcher,
}

/// A filter expression resolved against a table, ready to test rows
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    comparisons: Vec<CompiledComparison>,
    case_sensitive: bool,
}

impl FilterExpression {
    /// Resolve the expression against a table.
    ///
    /// `kinds` comes from the classifier; columns missing from it fall back to
    /// the kind implied by their declared type. Pattern terms use the
    /// wildcard the expression was synthesized with.
    pub fn compile(
        &self,
        table: &Table,
        kinds: &ColumnKinds,
        options: &FilterOptions,
    ) -> FilterResult<CompiledFilter> {
        let comparisons = self
            .comparisons()
            .iter()
            .map(|comparison| {
                compile_comparison(comparison, table, kinds, self.wildcard(), options)
            })
            .collect::<FilterResult<Vec<_>>>()?;
        Ok(CompiledFilter {
            comparisons,
            case_sensitive: options.case_sensitive,
        })
    }
}

fn compile_comparison(
    comparison: &Comparison,
    table: &Table,
    kinds: &ColumnKinds,
    wildcard: char,
    options: &FilterOptions,
) -> FilterResult<CompiledComparison> {
    let Comparison {
        column,
        operator,
        operand,
    } = comparison;

    let index = table
        .column_index(column)
        .ok_or_else(|| FilterError::UnknownColumn(column.clone()))?;
    let kind = kinds.get(column.as_str()).copied().unwrap_or_else(|| {
        SemanticKind::from_declared(table.columns()[index].data_type)
    });

    let matcher = match (kind, operator) {
        (SemanticKind::Binary, _) => {
            return Err(FilterError::UnsupportedOperator {
                column: column.clone(),
                operator: *operator,
                kind: kind.label(),
            });
        }
        (_, FilterOperator::Like) => {
            Matcher::Pattern(like_regex(operand, wildcard, options.case_sensitive)?)
        }
        (SemanticKind::Numeric, _) => {
            let invalid = |reason: String| FilterError::InvalidOperand {
                column: column.clone(),
                operator: *operator,
                operand: operand.clone(),
                reason,
            };
            let number = operand
                .parse::<f64>()
                .map_err(|e| invalid(e.to_string()))?;
            if !number.is_finite() {
                return Err(invalid("not a finite number".to_string()));
            }
            Matcher::Number(number)
        }
        (SemanticKind::String | SemanticKind::BooleanEnum | SemanticKind::Other, _) => {
            Matcher::Text(fold(operand, options.case_sensitive))
        }
    };

    Ok(CompiledComparison {
        column: column.clone(),
        index,
        operator: *operator,
        matcher,
    })
}

/// Anchored regex where the wildcard matches any run of characters
fn like_regex(pattern: &str, wildcard: char, case_sensitive: bool) -> Result<Regex, regex::Error> {
    let body = pattern
        .split(wildcard)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    RegexBuilder::new(&format!("^{}$", body))
        .case_insensitive(!case_sensitive)
        .dot_matches_new_line(true)
        .build()
}

fn fold(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

impl CompiledFilter {
    /// True when the filter has no comparisons and so matches every row
    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    /// Test one row of the table the filter was compiled against.
    ///
    /// NULL cells satisfy no comparison, and neither do NaN cells in a numeric
    /// column. A non-numeric cell in a numeric column is a conversion error
    /// naming the row.
    pub fn matches(&self, table: &Table, row: usize) -> FilterResult<bool> {
        let row_data = table.row(row).ok_or(GridError::RowOutOfRange {
            index: row,
            len: table.row_count(),
        })?;
        self.matches_row(row, row_data)
    }

    /// Indices of the live rows that satisfy every comparison, in table order.
    /// Deleted rows are never part of the view.
    pub fn apply(&self, table: &Table) -> FilterResult<Vec<usize>> {
        let mut matching = Vec::new();
        for (index, row) in table.rows().iter().enumerate() {
            if row.state() == RowState::Deleted {
                continue;
            }
            if self.matches_row(index, row)? {
                matching.push(index);
            }
        }
        tracing::debug!(
            "Filter matched {} of {} rows",
            matching.len(),
            table.row_count()
        );
        Ok(matching)
    }

    fn matches_row(&self, index: usize, row: &Row) -> FilterResult<bool> {
        for comparison in &self.comparisons {
            let cell = row.get(comparison.index).unwrap_or(&Value::Null);
            if cell.is_null() || !self.test(comparison, index, cell)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn test(&self, comparison: &CompiledComparison, row: usize, cell: &Value) -> FilterResult<bool> {
        let matched = match &comparison.matcher {
            Matcher::Pattern(regex) => regex.is_match(&cell.to_text()),
            Matcher::Number(operand) => {
                let value = cell.as_f64().ok_or_else(|| GridError::Conversion {
                    column: comparison.column.clone(),
                    row,
                    value: cell.to_text().into_owned(),
                    target: "number",
                })?;
                // NaN is unordered
                value
                    .partial_cmp(operand)
                    .is_some_and(|ordering| comparison.operator.accepts(ordering))
            }
            Matcher::Text(operand) => {
                let text = fold(&cell.to_text(), self.case_sensitive);
                comparison.operator.accepts(text.as_str().cmp(operand.as_str()))
            }
        };
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_regex_anchoring() {
        let regex = like_regex("Sm%th", '%', false).unwrap();
        assert!(regex.is_match("smith"));
        assert!(regex.is_match("SMOOTH"));
        assert!(!regex.is_match("a smith"));
    }

    #[test]
    fn test_like_regex_escapes_metacharacters() {
        let regex = like_regex("(a+b)%", '%', true).unwrap();
        assert!(regex.is_match("(a+b) total"));
        assert!(!regex.is_match("aab"));
        assert!(!regex.is_match("(A+B)"));
    }

    #[test]
    fn test_wildcard_spans_newlines() {
        let regex = like_regex("a%z", '%', false).unwrap();
        assert!(regex.is_match("a\nz"));
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("MiXed", false), "mixed");
        assert_eq!(fold("MiXed", true), "MiXed");
    }
}
