//! Shared test helpers for `datespace-core` integration tests.
//!
//! Fixtures are anchored on a single stop instant so expected sequences can
//! be written as literal epoch-millisecond values.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use tracing::Level;

/// Fixed stop boundary used across the suite.
pub const STOP: &str = "2014-12-02T07:00:55.973Z";

/// `STOP` as epoch milliseconds.
pub const STOP_MS: i64 = 1_417_503_655_973;

pub const DAY_MS: i64 = 86_400_000;

/// `STOP` as a native date/time value.
pub fn stop_datetime() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(STOP_MS).expect("fixture instant is in range")
}

/// Install a test-writer subscriber so `debug!` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

/// Consecutive differences of a millisecond sequence.
pub fn deltas(values: &[i64]) -> Vec<i64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}
