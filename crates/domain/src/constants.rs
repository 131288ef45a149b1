//! Application constants
//!
//! Centralized location for the fixed-duration unit table and generation
//! defaults. Month and year lengths are calendar averages (365.25 days per
//! year), not calendar-aware.

// Unit table (milliseconds)
pub const MILLIS_PER_MILLISECOND: i64 = 1;
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
pub const MILLIS_PER_MONTH: i64 = MILLIS_PER_YEAR / 12; // 365.25 / 12 days
pub const MILLIS_PER_YEAR: i64 = 36_525 * MILLIS_PER_DAY / 100; // 365.25 days

// Generation defaults
pub const DEFAULT_INCREMENT_MS: i64 = MILLIS_PER_DAY;
pub const LARGE_SEQUENCE_THRESHOLD: usize = 64_000;

// Numeric timestamps
pub const UNIX_TIMESTAMP_DIGITS: usize = 10;
pub const JS_TIMESTAMP_DIGITS: usize = 13;

// Input labels used in error messages and log fields
pub const START_FIELD: &str = "start";
pub const STOP_FIELD: &str = "stop";
pub const DATE_FIELD: &str = "date";
pub const INCREMENT_FIELD: &str = "increment";
pub const OPTIONS_FIELD: &str = "options";
pub const ROUND_FIELD: &str = "round";
