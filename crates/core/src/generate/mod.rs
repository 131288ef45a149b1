//! Sequence generation
//!
//! Produces the instants between two normalized boundaries. The first
//! element is always the start instant, unrounded. Every later element is
//! the rounded running total of `start + increment + increment + ...`,
//! accumulated in double precision one step at a time so fractional
//! increments round exactly as repeated addition dictates.
//!
//! Sequence length is `ceil((stop - start) / increment)`, at least one. When
//! that quotient is negative or not finite (the increment points away from
//! `stop`, or is zero) the result is `[start]`.

use datespace_domain::constants::LARGE_SEQUENCE_THRESHOLD;
use datespace_domain::{Instant, RoundMode, Sequence};

use crate::utils::logging::{log_sequence_generated, log_unreachable_stop};

/// How the output vector is allocated.
///
/// Both strategies yield identical contents; only allocation differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStrategy {
    /// Reserve exactly `count` slots up front.
    Presized,
    /// Grow by appending, for counts above [`LARGE_SEQUENCE_THRESHOLD`].
    Append,
}

impl BuildStrategy {
    /// Strategy for a sequence of `count` instants.
    pub const fn for_count(count: usize) -> Self {
        if count > LARGE_SEQUENCE_THRESHOLD {
            Self::Append
        } else {
            Self::Presized
        }
    }

    /// Label used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presized => "presized",
            Self::Append => "append",
        }
    }
}

/// Number of steps from `start_ms` to `stop_ms`.
///
/// Returns `None` when the stop boundary is unreachable with this increment.
pub fn step_count(start_ms: i64, stop_ms: i64, increment_ms: f64) -> Option<usize> {
    let span = stop_ms as f64 - start_ms as f64;
    let count = (span / increment_ms).ceil();

    if count.is_finite() && count >= 0.0 {
        Some(count as usize)
    } else {
        None
    }
}

/// Generate the sequence for normalized input.
pub fn generate(start_ms: i64, stop_ms: i64, increment_ms: f64, round: RoundMode) -> Sequence {
    let start = Instant::from_millis(start_ms);

    let Some(count) = step_count(start_ms, stop_ms, increment_ms) else {
        log_unreachable_stop(start_ms, stop_ms, increment_ms);
        return Sequence::from(vec![start]);
    };

    let strategy = BuildStrategy::for_count(count);
    let sequence = build(start, count, increment_ms, round, strategy);
    log_sequence_generated(start_ms, stop_ms, increment_ms, sequence.len(), strategy);
    sequence
}

/// Materialize `count` instants (at least one) with the given strategy.
pub fn build(
    start: Instant,
    count: usize,
    increment_ms: f64,
    round: RoundMode,
    strategy: BuildStrategy,
) -> Sequence {
    let steps = Steps::new(start, increment_ms, round).take(count.saturating_sub(1));

    let instants = match strategy {
        BuildStrategy::Presized => {
            let mut instants = Vec::with_capacity(count.max(1));
            instants.push(start);
            instants.extend(steps);
            instants
        }
        BuildStrategy::Append => {
            let mut instants = vec![start];
            for instant in steps {
                instants.push(instant);
            }
            instants
        }
    };

    Sequence::from(instants)
}

/// Rounded running total after the start instant.
struct Steps {
    accumulated: f64,
    increment_ms: f64,
    round: RoundMode,
}

impl Steps {
    fn new(start: Instant, increment_ms: f64, round: RoundMode) -> Self {
        Self { accumulated: start.as_millis() as f64, increment_ms, round }
    }
}

impl Iterator for Steps {
    type Item = Instant;

    #[inline]
    fn next(&mut self) -> Option<Instant> {
        self.accumulated += self.increment_ms;
        Some(Instant::from_millis(self.round.apply(self.accumulated) as i64))
    }
}
