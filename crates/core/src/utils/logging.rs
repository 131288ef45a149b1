use datespace_domain::DateSpaceError;
use tracing::{debug, warn};

use crate::generate::BuildStrategy;

/// Log a completed generation with structured fields.
///
/// # Parameters
/// * `start_ms`, `stop_ms` - Normalized boundaries.
/// * `increment_ms` - Normalized increment.
/// * `count` - Number of instants produced.
/// * `strategy` - Construction strategy that was used.
#[inline]
pub fn log_sequence_generated(
    start_ms: i64,
    stop_ms: i64,
    increment_ms: f64,
    count: usize,
    strategy: BuildStrategy,
) {
    debug!(
        start_ms,
        stop_ms,
        increment_ms,
        count,
        strategy = strategy.as_str(),
        "sequence_generated"
    );
}

/// Log the single-element fallback taken when the increment cannot reach
/// the stop boundary.
#[inline]
pub fn log_unreachable_stop(start_ms: i64, stop_ms: i64, increment_ms: f64) {
    debug!(start_ms, stop_ms, increment_ms, "sequence_stop_unreachable");
}

/// Log rejected input. Only the field name and error category are recorded.
#[inline]
pub fn log_input_rejected(error: &DateSpaceError) {
    warn!(field = error.field(), error_kind = error_label(error), "sequence_input_rejected");
}

/// Convert a `DateSpaceError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DateSpaceError) -> &'static str {
    error.kind().as_str()
}
