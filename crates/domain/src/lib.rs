//! # Datespace Domain
//!
//! Data types and error definitions for linearly spaced timestamp sequences.
//!
//! This crate contains:
//! - Input types for boundaries and increments (`TimeBoundary`,
//!   `IncrementSpec`)
//! - Generation options and the rounding policy (`GenerationOptions`,
//!   `RoundMode`)
//! - Output types (`Instant`, `Sequence`)
//! - The fixed-duration unit table (`UnitKind`)
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other Datespace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
