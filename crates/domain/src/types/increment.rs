//! Increment between consecutive sequence elements.

use serde_json::Value;

use super::boundary::json_kind;
use crate::constants::INCREMENT_FIELD;
use crate::errors::{DateSpaceError, Result};

/// Increment as supplied by the caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum IncrementSpec {
    /// Raw millisecond delta; may be fractional, zero or negative.
    Millis(f64),
    /// Duration string such as `"12h"`, `"-1d"` or `"1day.500ms"`.
    Text(String),
}

impl IncrementSpec {
    /// Build an increment from a dynamically typed JSON value.
    pub fn from_json(value: &Value, field: &str) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => number.as_f64().map(Self::Millis).ok_or_else(|| {
                DateSpaceError::type_error(field, format!("{field} must be a valid number"))
            }),
            other => Err(DateSpaceError::type_error(
                field,
                format!("{field} must be either a string or number, got {}", json_kind(other)),
            )),
        }
    }
}

impl TryFrom<&Value> for IncrementSpec {
    type Error = DateSpaceError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value, INCREMENT_FIELD)
    }
}

impl From<f64> for IncrementSpec {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<i64> for IncrementSpec {
    fn from(value: i64) -> Self {
        Self::Millis(value as f64)
    }
}

impl From<&str> for IncrementSpec {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IncrementSpec {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
