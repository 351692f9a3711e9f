//! Easing curves over normalized progress.

use serde::{Deserialize, Serialize};

/// Maps linear progress in `0.0..=1.0` to eased progress in `0.0..=1.0`.
///
/// Every curve fixes `0 -> 0` and `1 -> 1` and is non-decreasing in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum Easing {
    /// Identity.
    Linear,
    /// `1 - (1 - t)^power`. Fast start, slow finish.
    EaseOut {
        /// Exponent; values below 1 are treated as 1.
        power: u32,
    },
}

impl Easing {
    /// Cubic ease-out, the default counter curve.
    pub const EASE_OUT_CUBIC: Self = Self::EaseOut { power: 3 };

    /// Apply the curve. Input is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => t,
            Self::EaseOut { power } => {
                let power = i32::try_from(power.max(1)).unwrap_or(i32::MAX);
                1.0 - (1.0 - t).powi(power)
            }
        }
    }

    /// CSS timing-function keyword closest to this curve.
    #[must_use]
    pub fn css_timing(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut { .. } => "ease-out",
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_OUT_CUBIC
    }
}
