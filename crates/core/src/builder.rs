//! Fluent builder over [`generate_sequence_with`](crate::generate_sequence_with).

use datespace_domain::{
    GenerationOptions, IncrementSpec, Result, RoundMode, Sequence, TimeBoundary,
};
use serde_json::Value;

use crate::normalize::resolve_options;

/// Builder for a single sequence request.
///
/// Increment and options are independently optional; the increment defaults
/// to one day and rounding defaults to floor.
///
/// # Examples
///
/// ```
/// use datespace_core::DateSpace;
/// use datespace_domain::RoundMode;
///
/// let sequence = DateSpace::new("2014-12-02T07:00:00Z", "2014-12-03T07:00:00Z")
///     .increment("12h")
///     .round(RoundMode::Ceil)
///     .generate()
///     .unwrap();
///
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(sequence.last().unwrap().to_string(), "2014-12-02T19:00:00.000Z");
/// ```
#[derive(Debug, Clone)]
pub struct DateSpace {
    start: TimeBoundary,
    stop: TimeBoundary,
    increment: Option<IncrementSpec>,
    options: GenerationOptions,
}

impl DateSpace {
    /// Create a request between two boundaries
    pub fn new(start: impl Into<TimeBoundary>, stop: impl Into<TimeBoundary>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            increment: None,
            options: GenerationOptions::default(),
        }
    }

    /// Set the increment between consecutive instants
    pub fn increment(mut self, increment: impl Into<IncrementSpec>) -> Self {
        self.increment = Some(increment.into());
        self
    }

    /// Set the rounding policy
    pub fn round(mut self, round: RoundMode) -> Self {
        self.options.round = round;
        self
    }

    /// Apply a raw options mapping.
    ///
    /// # Errors
    ///
    /// Fails as [`resolve_options`] does; the mapping is validated here,
    /// before the boundaries.
    pub fn options(mut self, raw: &Value) -> Result<Self> {
        self.options = resolve_options(Some(raw))?;
        Ok(self)
    }

    /// Resolved options for this request
    pub fn generation_options(&self) -> GenerationOptions {
        self.options
    }

    /// Validate the request and generate the sequence.
    pub fn generate(&self) -> Result<Sequence> {
        crate::generate_sequence_with(
            self.start.clone(),
            self.stop.clone(),
            self.increment.clone(),
            self.options,
        )
    }
}
