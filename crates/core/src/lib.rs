//! # Datespace Core
//!
//! Generates linearly spaced sequences of instants between two boundaries.
//!
//! This crate contains:
//! - Input normalization for boundaries, increments and options
//!   ([`normalize`])
//! - The sequence generator ([`generate`])
//! - Increment formatting ([`format`])
//! - The [`DateSpace`] builder and the [`generate_sequence`] entry points
//!
//! ## Architecture Principles
//! - Only depends on `datespace-domain` and external crates
//! - Pure computation: no I/O, no shared mutable state
//! - All input is validated before any instant is produced
//!
//! ## Usage
//!
//! ```rust
//! use datespace_core::generate_sequence;
//! use datespace_domain::IncrementSpec;
//! use serde_json::json;
//!
//! let stop = "2014-12-02T07:00:55.973Z";
//! let start = 1_417_503_655_973_i64 - 5;
//!
//! let sequence = generate_sequence(
//!     start,
//!     stop,
//!     Some(IncrementSpec::Millis(0.5)),
//!     Some(&json!({ "round": "ceil" })),
//! )
//! .unwrap();
//!
//! assert_eq!(sequence.len(), 10);
//! assert_eq!(sequence.first().unwrap().as_millis(), start);
//! ```

pub mod builder;
pub mod format;
pub mod generate;
pub mod normalize;
pub mod utils;

use datespace_domain::constants::{INCREMENT_FIELD, START_FIELD, STOP_FIELD};
use datespace_domain::{GenerationOptions, IncrementSpec, Result, Sequence, TimeBoundary};
use serde_json::Value;

pub use builder::DateSpace;
pub use format::format_increment;
pub use generate::{generate, BuildStrategy};
pub use normalize::{
    normalize_boundary, normalize_increment, parse_increment, resolve_options, NormalizedRequest,
};

use crate::utils::logging::log_input_rejected;

/// Generate a sequence from caller input.
///
/// Validation is eager and runs in argument order: start, stop, increment,
/// options. A missing increment defaults to one day; missing options default
/// to floor rounding.
///
/// # Errors
///
/// Returns the first [`DateSpaceError`](datespace_domain::DateSpaceError)
/// raised during normalization. No partial sequence is ever returned.
pub fn generate_sequence(
    start: impl Into<TimeBoundary>,
    stop: impl Into<TimeBoundary>,
    increment: Option<IncrementSpec>,
    options: Option<&Value>,
) -> Result<Sequence> {
    let request = NormalizedRequest::resolve(
        &start.into(),
        &stop.into(),
        increment.as_ref(),
        GenerationOptions::default(),
    )
    .and_then(|request| resolve_options(options).map(|options| request.with_options(options)))
    .inspect_err(log_input_rejected)?;

    Ok(generate(request.start_ms, request.stop_ms, request.increment_ms, request.round))
}

/// Generate a sequence with already-typed options.
///
/// # Errors
///
/// Fails when a boundary or the increment cannot be normalized.
pub fn generate_sequence_with(
    start: impl Into<TimeBoundary>,
    stop: impl Into<TimeBoundary>,
    increment: Option<IncrementSpec>,
    options: GenerationOptions,
) -> Result<Sequence> {
    let request =
        NormalizedRequest::resolve(&start.into(), &stop.into(), increment.as_ref(), options)
            .inspect_err(log_input_rejected)?;

    Ok(generate(request.start_ms, request.stop_ms, request.increment_ms, request.round))
}

/// Generate a sequence from dynamically typed JSON input.
///
/// Absent `increment`/`options` take their defaults; an explicit `null` is a
/// type error like any other value of the wrong kind. When `options` is
/// absent and `increment` is a mapping, that mapping is taken as the options
/// and the increment defaults to one day.
///
/// # Errors
///
/// In addition to the normalization errors, any boundary or increment of the
/// wrong JSON kind is a [`DateSpaceError::Type`](datespace_domain::DateSpaceError::Type).
pub fn generate_sequence_json(
    start: &Value,
    stop: &Value,
    increment: Option<&Value>,
    options: Option<&Value>,
) -> Result<Sequence> {
    let start = TimeBoundary::from_json(start, START_FIELD).inspect_err(log_input_rejected)?;
    let stop = TimeBoundary::from_json(stop, STOP_FIELD).inspect_err(log_input_rejected)?;
    let (increment, options) = match (increment, options) {
        (Some(mapping @ Value::Object(_)), None) => (None, Some(mapping)),
        other => other,
    };
    let increment = increment
        .map(|value| IncrementSpec::from_json(value, INCREMENT_FIELD))
        .transpose()
        .inspect_err(log_input_rejected)?;

    generate_sequence(start, stop, increment, options)
}
