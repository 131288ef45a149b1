//! Generated sequences of instants

use std::fmt;
use std::slice;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DateSpaceError, Result};

/// A single point in time as epoch milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// Instant at `millis` since the Unix epoch
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Convert to a UTC date/time, if representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => f.write_str(&datetime.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Ordered, fully materialized list of instants
///
/// Serializes as a plain array of epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Instant>);

impl Sequence {
    /// Number of instants
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no instants are held
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First instant, if any
    pub fn first(&self) -> Option<Instant> {
        self.0.first().copied()
    }

    /// Last instant, if any
    pub fn last(&self) -> Option<Instant> {
        self.0.last().copied()
    }

    /// Iterate over the instants
    pub fn iter(&self) -> slice::Iter<'_, Instant> {
        self.0.iter()
    }

    /// Borrow the instants as a slice
    pub fn as_slice(&self) -> &[Instant] {
        &self.0
    }

    /// Unwrap into the underlying vector
    pub fn into_inner(self) -> Vec<Instant> {
        self.0
    }

    /// Epoch milliseconds of every instant, in order
    pub fn millis(&self) -> Vec<i64> {
        self.0.iter().map(|instant| instant.as_millis()).collect()
    }

    /// Convert every instant to a UTC date/time.
    ///
    /// Fails if any instant lies outside chrono's representable range.
    pub fn to_datetimes(&self) -> Result<Vec<DateTime<Utc>>> {
        self.0
            .iter()
            .map(|instant| {
                instant.to_datetime().ok_or_else(|| {
                    DateSpaceError::validation(
                        "sequence",
                        format!("instant {} is outside the representable date range", instant.0),
                    )
                })
            })
            .collect()
    }
}

impl From<Vec<Instant>> for Sequence {
    fn from(value: Vec<Instant>) -> Self {
        Self(value)
    }
}

impl FromIterator<Instant> for Sequence {
    fn from_iter<I: IntoIterator<Item = Instant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Instant;
    type IntoIter = std::vec::IntoIter<Instant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Instant;
    type IntoIter = slice::Iter<'a, Instant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
