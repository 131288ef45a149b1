//! Domain types and models
//!
//! Inputs arrive as tagged enums ([`TimeBoundary`], [`IncrementSpec`]) so the
//! kind of every value is known before any normalization runs. Outputs are
//! epoch-millisecond [`Instant`]s collected into a [`Sequence`].

pub mod boundary;
pub mod increment;
pub mod options;
pub mod round;
pub mod sequence;
pub mod unit;

// Re-export for convenience
pub use boundary::TimeBoundary;
pub use increment::IncrementSpec;
pub use options::GenerationOptions;
pub use round::RoundMode;
pub use sequence::{Instant, Sequence};
pub use unit::UnitKind;
