//! Filter grammar: operator prefixes of a single search term

use serde::{Deserialize, Serialize};

/// Default wildcard character for pattern terms
pub const WILDCARD: char = '%';

/// Comparison operator of a search term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    #[default]
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    /// Pattern match where the wildcard stands for any run of characters
    Like,
}

/// Prefix table, checked in order. Two-character prefixes come first because
/// `<` and `>` are prefixes of them.
const PREFIXES: &[(&str, FilterOperator)] = &[
    ("<>", FilterOperator::NotEqual),
    ("!=", FilterOperator::NotEqual),
    ("<=", FilterOperator::LessOrEqual),
    (">=", FilterOperator::GreaterOrEqual),
    ("<", FilterOperator::LessThan),
    (">", FilterOperator::GreaterThan),
];

impl FilterOperator {
    /// Operator spelling in the row-filter expression language
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::Like => "LIKE",
        }
    }

    /// Returns true for the ordering operators (`<`, `<=`, `>`, `>=`)
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::LessOrEqual | Self::GreaterThan | Self::GreaterOrEqual
        )
    }

    /// Whether an ordering between a cell and the operand satisfies this operator
    pub fn accepts(&self, ordering: std::cmp::Ordering) -> bool {
        match self {
            Self::Equal => ordering.is_eq(),
            Self::NotEqual => ordering.is_ne(),
            Self::LessThan => ordering.is_lt(),
            Self::LessOrEqual => ordering.is_le(),
            Self::GreaterThan => ordering.is_gt(),
            Self::GreaterOrEqual => ordering.is_ge(),
            Self::Like => false,
        }
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Split a search term into its operator and operand using the default `%` wildcard.
///
/// ```
/// use gridline_filter::{FilterOperator, parse_operator};
///
/// assert_eq!(parse_operator("<=3"), (FilterOperator::LessOrEqual, "3"));
/// assert_eq!(parse_operator("A%"), (FilterOperator::Like, "A%"));
/// ```
pub fn parse_operator(token: &str) -> (FilterOperator, &str) {
    parse_operator_with(token, WILDCARD)
}

/// Split a search term into its operator and operand.
///
/// Surrounding whitespace is ignored. Operator prefixes win over the wildcard, so `>A%` is a greater-than
/// comparison with operand `A%`. A term containing the wildcard anywhere is a
/// pattern, which means a literal value containing it can never be matched
/// for equality.
pub(crate) fn parse_operator_with(token: &str, wildcard: char) -> (FilterOperator, &str) {
    let token = token.trim();
    for &(prefix, operator) in PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (operator, rest.trim());
        }
    }
    if token.contains(wildcard) {
        return (FilterOperator::Like, token);
    }
    (FilterOperator::Equal, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_operator() {
        assert_eq!(parse_operator("<>5"), (FilterOperator::NotEqual, "5"));
        assert_eq!(parse_operator("!=5"), (FilterOperator::NotEqual, "5"));
        assert_eq!(parse_operator(">=10"), (FilterOperator::GreaterOrEqual, "10"));
        assert_eq!(parse_operator("<7"), (FilterOperator::LessThan, "7"));
        assert_eq!(parse_operator(">7"), (FilterOperator::GreaterThan, "7"));
        assert_eq!(parse_operator("A%"), (FilterOperator::Like, "A%"));
        assert_eq!(parse_operator("abc"), (FilterOperator::Equal, "abc"));
    }

    #[test]
    fn test_two_char_prefixes_win() {
        assert_eq!(parse_operator("<=3"), (FilterOperator::LessOrEqual, "3"));
        assert_eq!(parse_operator(">=3"), (FilterOperator::GreaterOrEqual, "3"));
        assert_eq!(parse_operator("<>3"), (FilterOperator::NotEqual, "3"));
    }

    #[test]
    fn test_operand_is_trimmed() {
        assert_eq!(parse_operator(">=  10 "), (FilterOperator::GreaterOrEqual, "10"));
        assert_eq!(parse_operator("  %son "), (FilterOperator::Like, "%son"));
    }

    #[test]
    fn test_leading_whitespace_before_operator() {
        assert_eq!(parse_operator(" <5"), (FilterOperator::LessThan, "5"));
        assert_eq!(parse_operator("\t<> x "), (FilterOperator::NotEqual, "x"));
    }

    #[test]
    fn test_operator_beats_wildcard() {
        assert_eq!(parse_operator(">A%"), (FilterOperator::GreaterThan, "A%"));
        assert_eq!(parse_operator("50%"), (FilterOperator::Like, "50%"));
    }

    #[test]
    fn test_custom_wildcard() {
        assert_eq!(parse_operator_with("Sm*", '*'), (FilterOperator::Like, "Sm*"));
        assert_eq!(parse_operator_with("Sm%", '*'), (FilterOperator::Equal, "Sm%"));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(FilterOperator::NotEqual.to_string(), "<>");
        assert_eq!(FilterOperator::Like.to_string(), "LIKE");
    }

    proptest! {
        #[test]
        fn prop_plain_words_are_equality(word in "[A-Za-z0-9_ ]{0,12}") {
            let (operator, operand) = parse_operator(&word);
            prop_assert_eq!(operator, FilterOperator::Equal);
            prop_assert_eq!(operand, word.trim());
        }
    }
}
