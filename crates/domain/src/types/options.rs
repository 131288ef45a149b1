//! Per-call generation options

use serde::{Deserialize, Serialize};

use super::round::RoundMode;

/// Options controlling sequence generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub round: RoundMode,
}

impl GenerationOptions {
    /// Options with the given rounding policy
    pub const fn with_round(round: RoundMode) -> Self {
        Self { round }
    }
}
