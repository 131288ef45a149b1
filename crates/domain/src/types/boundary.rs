//! Start and stop boundaries of a sequence.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::DATE_FIELD;
use crate::errors::{DateSpaceError, Result};

/// A point in time as supplied by the caller, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeBoundary {
    /// Calendar date string, e.g. `"2014-12-02T07:00:55.973Z"`.
    Text(String),
    /// Unix (10-digit, seconds) or JavaScript (13-digit, milliseconds)
    /// timestamp.
    Timestamp(i64),
    /// Already-resolved date/time value.
    DateTime(DateTime<Utc>),
}

impl TimeBoundary {
    /// Build a boundary from a dynamically typed JSON value.
    ///
    /// Strings and numbers map to [`TimeBoundary::Text`] and
    /// [`TimeBoundary::Timestamp`]. Non-integral numbers can never have a
    /// valid digit count and are rejected as validation errors; every other
    /// JSON kind is a type error.
    pub fn from_json(value: &Value, field: &str) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => {
                if let Some(timestamp) = number.as_i64() {
                    return Ok(Self::Timestamp(timestamp));
                }
                match number.as_f64() {
                    Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => {
                        Ok(Self::Timestamp(float as i64))
                    }
                    _ => Err(DateSpaceError::validation(
                        field,
                        format!(
                            "numeric {field} date must be either a Unix or JavaScript timestamp, got {number}"
                        ),
                    )),
                }
            }
            other => Err(DateSpaceError::type_error(
                field,
                format!(
                    "{field} date must be a date string, date/time value, Unix timestamp, or JavaScript timestamp, got {}",
                    json_kind(other)
                ),
            )),
        }
    }
}

/// Labels errors with the generic `"date"` field; use
/// [`TimeBoundary::from_json`] to name the boundary.
impl TryFrom<&Value> for TimeBoundary {
    type Error = DateSpaceError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value, DATE_FIELD)
    }
}

impl From<&str> for TimeBoundary {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimeBoundary {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for TimeBoundary {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for TimeBoundary {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// Name of a JSON value's kind for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
