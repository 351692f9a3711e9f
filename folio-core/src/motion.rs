//! Scroll- and pointer-linked motion.
//!
//! A [`MotionTracker`] is an owned value: the host creates one when the page
//! mounts, feeds it raw scroll and pointer events, and hands `&MotionTracker`
//! to whatever derives offsets from it. Offsets are recomputed per event with
//! no smoothing.

use serde::{Deserialize, Serialize};

/// Latest raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Vertical scroll position in CSS pixels.
    pub scroll_y: f64,
    /// Pointer x in viewport pixels.
    pub pointer_x: f64,
    /// Pointer y in viewport pixels.
    pub pointer_y: f64,
}

/// Holds the most recent scroll and pointer sample.
#[derive(Debug, Clone, Default)]
pub struct MotionTracker {
    sample: MotionSample,
    scroll_events: u64,
    pointer_events: u64,
}

impl MotionTracker {
    /// Tracker at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if scroll_y.is_finite() {
            self.sample.scroll_y = scroll_y;
        }
        self.scroll_events += 1;
    }

    /// Record a pointer move.
    pub fn on_pointer(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.sample.pointer_x = x;
            self.sample.pointer_y = y;
        }
        self.pointer_events += 1;
    }

    /// Latest sample.
    #[must_use]
    pub fn sample(&self) -> MotionSample {
        self.sample
    }

    /// Number of scroll events seen.
    #[must_use]
    pub fn scroll_events(&self) -> u64 {
        self.scroll_events
    }

    /// Number of pointer events seen.
    #[must_use]
    pub fn pointer_events(&self) -> u64 {
        self.pointer_events
    }

    /// Reading progress through the document, `0.0..=1.0`.
    #[must_use]
    pub fn scroll_progress(&self, document_height: f64, viewport_height: f64) -> f64 {
        scroll_progress(self.sample.scroll_y, document_height, viewport_height)
    }
}

/// Scale factors applied to raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Vertical offset per scrolled pixel.
    pub scroll_factor: f64,
    /// Offset per pointer pixel, both axes.
    pub pointer_factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            scroll_factor: 0.5,
            pointer_factor: 0.02,
        }
    }
}

/// Derived offset for one layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxOffset {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

impl ParallaxOffset {
    /// CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

impl ParallaxConfig {
    /// Offset for a sample: factor times raw input.
    #[must_use]
    pub fn offset(&self, sample: &MotionSample) -> ParallaxOffset {
        ParallaxOffset {
            x: sample.pointer_x * self.pointer_factor,
            y: sample.scroll_y * self.scroll_factor + sample.pointer_y * self.pointer_factor,
        }
    }

    /// Offset for the tracker's latest sample.
    #[must_use]
    pub fn offset_for(&self, tracker: &MotionTracker) -> ParallaxOffset {
        self.offset(&tracker.sample())
    }
}

/// Reading progress through a document, `0.0..=1.0`.
///
/// A document no taller than the viewport counts as fully read.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || scrollable.is_nan() {
        return 1.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Whether the sticky header should switch to its condensed look.
#[must_use]
pub fn header_condensed(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_linear_in_input() {
        let config = ParallaxConfig {
            scroll_factor: 0.5,
            pointer_factor: 0.0,
        };
        let mut tracker = MotionTracker::new();
        tracker.on_scroll(200.0);
        let offset = config.offset_for(&tracker);
        assert!((offset.y - 100.0).abs() < f64::EPSILON);
        assert!(offset.x.abs() < f64::EPSILON);
    }

    #[test]
    fn pointer_contributes_both_axes() {
        let config = ParallaxConfig {
            scroll_factor: 0.0,
            pointer_factor: 0.1,
        };
        let mut tracker = MotionTracker::new();
        tracker.on_pointer(300.0, -50.0);
        let offset = config.offset_for(&tracker);
        assert!((offset.x - 30.0).abs() < 1e-9);
        assert!((offset.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_input_is_ignored_but_counted() {
        let mut tracker = MotionTracker::new();
        tracker.on_scroll(120.0);
        tracker.on_scroll(f64::NAN);
        assert!((tracker.sample().scroll_y - 120.0).abs() < f64::EPSILON);
        assert_eq!(tracker.scroll_events(), 2);
    }

    #[test]
    fn progress_is_clamped_and_handles_short_pages() {
        assert!((scroll_progress(500.0, 1500.0, 500.0) - 0.5).abs() < f64::EPSILON);
        assert!((scroll_progress(5000.0, 1500.0, 500.0) - 1.0).abs() < f64::EPSILON);
        assert!((scroll_progress(0.0, 400.0, 800.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn header_condenses_past_threshold() {
        assert!(!header_condensed(50.0, 50.0));
        assert!(header_condensed(51.0, 50.0));
    }

    #[test]
    fn css_transform_format() {
        let offset = ParallaxOffset { x: 1.0, y: -2.5 };
        assert_eq!(offset.css_transform(), "translate3d(1.00px, -2.50px, 0)");
    }
}
