//! This module defines [Condition],
//! a predicate comparing one column of a row against a constant.

use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    datavalues::{Row, Value},
    error::Error,
};

/// Comparison operator used in a [Condition]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Column value is equal to the constant
    #[serde(rename = "=")]
    Equal,
    /// Column value is not equal to the constant
    #[serde(rename = "!=")]
    NotEqual,
    /// Column value is smaller than the constant
    #[serde(rename = "<")]
    Less,
    /// Column value is smaller than or equal to the constant
    #[serde(rename = "<=")]
    LessEqual,
    /// Column value is greater than the constant
    #[serde(rename = ">")]
    Greater,
    /// Column value is greater than or equal to the constant
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl Comparison {
    /// Return whether the given ordering satisfies this comparison.
    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Comparison::Equal => ordering.is_eq(),
            Comparison::NotEqual => ordering.is_ne(),
            Comparison::Less => ordering.is_lt(),
            Comparison::LessEqual => ordering.is_le(),
            Comparison::Greater => ordering.is_gt(),
            Comparison::GreaterEqual => ordering.is_ge(),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "!=",
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
        };

        f.write_str(symbol)
    }
}

/// Compares the value at a column position against a constant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    /// Position of the column that is compared
    pub column: usize,
    /// How the column is compared
    pub comparison: Comparison,
    /// Constant the column is compared against
    pub value: Value,
}

impl Condition {
    /// Create a new [Condition].
    pub fn new(column: usize, comparison: Comparison, value: impl Into<Value>) -> Self {
        Self {
            column,
            comparison,
            value: value.into(),
        }
    }

    /// Evaluate the condition on the given row.
    ///
    /// Values that cannot be compared with the constant never satisfy the condition.
    pub fn evaluate(&self, row: &Row) -> Result<bool, Error> {
        let value = row.get(self.column).ok_or(Error::ColumnOutOfBounds {
            column: self.column,
            arity: row.len(),
        })?;

        Ok(value
            .compare(&self.value)
            .is_some_and(|ordering| self.comparison.accepts(ordering)))
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {}", self.column, self.comparison, self.value)
    }
}
