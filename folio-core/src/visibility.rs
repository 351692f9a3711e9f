//! One-way visibility latch.
//!
//! An element starts [`Visibility::NotVisible`] and moves to
//! [`Visibility::Visible`] the first time its visible fraction reaches the
//! configured threshold. There is no transition back.

use serde::{Deserialize, Serialize};

/// Whether an observed element has entered the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Not yet seen.
    #[default]
    NotVisible,
    /// Seen at least once. Terminal.
    Visible,
}

/// Outcome of feeding an intersection sample to a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchTransition {
    /// The latch flipped on this sample. Happens exactly once.
    Entered,
    /// Nothing changed.
    Unchanged,
}

/// Two-state visibility machine with a single legal transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    state: Visibility,
    threshold: f64,
}

impl VisibilityLatch {
    /// Create a latch that trips when the visible fraction reaches `threshold`.
    ///
    /// The threshold is clamped to `0.0..=1.0`; a NaN threshold becomes `0.0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            state: Visibility::NotVisible,
            threshold,
        }
    }

    /// Feed one intersection sample (fraction of the element inside the viewport).
    ///
    /// A zero fraction never trips the latch, even with a zero threshold, since
    /// the element is not actually on screen.
    pub fn observe(&mut self, visible_fraction: f64) -> LatchTransition {
        if self.state == Visibility::Visible {
            return LatchTransition::Unchanged;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.state = Visibility::Visible;
            tracing::trace!(
                threshold = self.threshold,
                fraction = visible_fraction,
                "visibility latch entered"
            );
            return LatchTransition::Entered;
        }
        LatchTransition::Unchanged
    }

    /// Trip the latch without a sample, e.g. when the host cannot observe
    /// intersections. Same single transition as [`Self::observe`].
    pub fn trip(&mut self) -> LatchTransition {
        if self.state == Visibility::Visible {
            return LatchTransition::Unchanged;
        }
        self.state = Visibility::Visible;
        LatchTransition::Entered
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Whether the latch has tripped.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Configured threshold after clamping.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(0.1)
    }
}
