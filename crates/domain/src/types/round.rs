//! Rounding policy for fractional accumulated offsets.

use serde::{Deserialize, Serialize};

use crate::impl_keyword_conversions;

/// How a fractional accumulated millisecond offset becomes an integer instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Round toward negative infinity.
    #[default]
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to the nearest integer; halves go toward positive infinity.
    Round,
}

impl_keyword_conversions!(RoundMode {
    Floor => "floor",
    Ceil => "ceil",
    Round => "round",
});

impl RoundMode {
    /// Apply this policy to an accumulated offset.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Round => round_half_up(value),
        }
    }
}

// `f64::round` sends halves away from zero; -2.5 must become -2 here.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
