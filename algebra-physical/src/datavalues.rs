//! This module defines [Value] and [Row],
//! the data that flows between physical operators.

use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

/// A single value stored in a column of a row.
///
/// Values of different kinds are never comparable with each other;
/// [Value::Null] is not comparable with anything, including itself.
#[allow(variant_size_differences)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Signed 64-bit integer
    Integer(i64),
    /// Unicode string
    String(String),
}

impl Value {
    /// Compare two values of the same kind.
    ///
    /// Returns `None` if the values are of different kinds or if one of them is [Value::Null].
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Boolean(left), Value::Boolean(right)) => Some(left.cmp(right)),
            (Value::Integer(left), Value::Integer(right)) => Some(left.cmp(right)),
            (Value::String(left), Value::String(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }

    /// Interpret a raw textual field.
    ///
    /// The empty string becomes [Value::Null], `true` and `false` become booleans,
    /// anything that parses as an `i64` becomes an integer, and everything else a string.
    pub fn parse_field(field: &str) -> Self {
        if field.is_empty() {
            return Value::Null;
        }

        match field {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => field
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::String(field.to_string())),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "\"{value}\""),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// A row is an ordered list of column values
pub type Row = Vec<Value>;
