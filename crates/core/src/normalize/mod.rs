//! Input normalization
//!
//! Validates caller input eagerly and resolves it to canonical millisecond
//! values before any generation runs:
//! - **[`boundary`]**: start/stop boundaries to epoch milliseconds
//! - **[`increment`]**: numeric or duration-string increments to a signed
//!   millisecond delta
//! - **[`options`]**: raw options mapping to [`GenerationOptions`]

pub mod boundary;
pub mod increment;
pub mod options;

use datespace_domain::constants::{DEFAULT_INCREMENT_MS, START_FIELD, STOP_FIELD};
use datespace_domain::{GenerationOptions, IncrementSpec, Result, RoundMode, TimeBoundary};

pub use boundary::normalize_boundary;
pub use increment::{normalize_increment, parse_increment};
pub use options::resolve_options;

/// Fully validated generation input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRequest {
    /// Start boundary in epoch milliseconds
    pub start_ms: i64,
    /// Stop boundary in epoch milliseconds
    pub stop_ms: i64,
    /// Signed, possibly fractional, step between instants
    pub increment_ms: f64,
    /// Rounding policy for accumulated offsets
    pub round: RoundMode,
}

impl NormalizedRequest {
    /// Normalize boundaries and increment in argument order.
    ///
    /// A missing increment defaults to one day.
    pub fn resolve(
        start: &TimeBoundary,
        stop: &TimeBoundary,
        increment: Option<&IncrementSpec>,
        options: GenerationOptions,
    ) -> Result<Self> {
        let start_ms = normalize_boundary(start, START_FIELD)?;
        let stop_ms = normalize_boundary(stop, STOP_FIELD)?;
        let increment_ms = match increment {
            Some(spec) => normalize_increment(spec)?,
            None => DEFAULT_INCREMENT_MS as f64,
        };

        Ok(Self { start_ms, stop_ms, increment_ms, round: options.round })
    }

    /// Replace the options of an already normalized request.
    pub fn with_options(self, options: GenerationOptions) -> Self {
        Self { round: options.round, ..self }
    }
}
