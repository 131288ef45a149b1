//! Fixed-duration units accepted in increment strings

use crate::constants::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MILLISECOND, MILLIS_PER_MINUTE, MILLIS_PER_MONTH,
    MILLIS_PER_SECOND, MILLIS_PER_WEEK, MILLIS_PER_YEAR,
};

/// A duration unit with a fixed millisecond length.
///
/// Months and years are calendar averages; see [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl UnitKind {
    /// All units, largest first.
    pub const ALL: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Length of one unit in milliseconds.
    pub const fn millis(self) -> i64 {
        match self {
            Self::Year => MILLIS_PER_YEAR,
            Self::Month => MILLIS_PER_MONTH,
            Self::Week => MILLIS_PER_WEEK,
            Self::Day => MILLIS_PER_DAY,
            Self::Hour => MILLIS_PER_HOUR,
            Self::Minute => MILLIS_PER_MINUTE,
            Self::Second => MILLIS_PER_SECOND,
            Self::Millisecond => MILLIS_PER_MILLISECOND,
        }
    }

    /// Canonical short token, used when formatting.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "b",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
        }
    }

    /// Every accepted spelling. The first entry is [`UnitKind::symbol`].
    pub const fn spellings(self) -> &'static [&'static str] {
        match self {
            Self::Year => &["y", "yr", "yrs", "year", "years"],
            Self::Month => &["b", "month", "months"],
            Self::Week => &["w", "wk", "wks", "week", "weeks"],
            Self::Day => &["d", "day", "days"],
            Self::Hour => &["h", "hr", "hrs", "hour", "hours"],
            Self::Minute => &["m", "min", "mins", "minute", "minutes"],
            Self::Second => &["s", "sec", "secs", "second", "seconds"],
            Self::Millisecond => &["ms", "millisecond", "milliseconds"],
        }
    }

    /// Resolve a unit token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.spellings().contains(&token))
    }
}
