//! Viewport-triggered fade/slide reveal.
//!
//! The reveal itself is declarative: once the latch trips, [`Reveal::style`]
//! switches from the hidden declarations to the shown ones plus a CSS
//! transition, and the browser interpolates. [`RevealConfig::frame_at`]
//! samples the same curve on the Rust side for tests and non-CSS hosts.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::visibility::{LatchTransition, VisibilityLatch};

/// Per-instance reveal tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between the latch tripping and the transition starting.
    pub delay_ms: f64,
    /// Visible fraction required to trip the latch.
    pub threshold: f64,
    /// Transition length.
    pub duration_ms: f64,
    /// Initial downward offset in CSS pixels.
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            threshold: 0.15,
            duration_ms: 600.0,
            offset_px: 30.0,
        }
    }
}

impl RevealConfig {
    /// Curve the rendering substrate is asked to use.
    pub const EASING: Easing = Easing::EASE_OUT_CUBIC;

    /// Set the start delay.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the trip threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Copy of this config delayed for the `index`-th item of a list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn staggered(self, index: usize, step_ms: f64) -> Self {
        Self {
            delay_ms: self.delay_ms + index as f64 * step_ms,
            ..self
        }
    }

    /// Sample the transition `elapsed_ms` after the latch tripped.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: f64) -> RevealFrame {
        let running = elapsed_ms - self.delay_ms.max(0.0);
        if running < 0.0 || running.is_nan() {
            return RevealFrame::hidden(self.offset_px);
        }
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            running / self.duration_ms
        };
        let eased = Self::EASING.apply(progress);
        RevealFrame {
            opacity: eased,
            offset_y: self.offset_px * (1.0 - eased),
        }
    }

    /// Time from the latch tripping until the element is fully shown.
    #[must_use]
    pub fn settle_ms(&self) -> f64 {
        self.delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }
}

/// Interpolated reveal state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// 0 = transparent, 1 = opaque.
    pub opacity: f64,
    /// Remaining downward offset in pixels.
    pub offset_y: f64,
}

impl RevealFrame {
    /// Initial state.
    #[must_use]
    pub fn hidden(offset_px: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y: offset_px,
        }
    }

    /// Terminal state.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }
}

/// Inline style a reveal wants applied to its element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    /// Target opacity.
    pub opacity: f64,
    /// Target vertical offset in pixels.
    pub translate_y: f64,
    /// CSS `transition` value, present once the reveal is running.
    pub transition: Option<String>,
}

impl RevealStyle {
    /// `(property, value)` pairs ready for `style.setProperty`.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("opacity", format_number(self.opacity)),
            (
                "transform",
                format!("translateY({}px)", format_number(self.translate_y)),
            ),
        ];
        out.push((
            "transition",
            self.transition.clone().unwrap_or_else(|| "none".to_string()),
        ));
        out
    }
}

/// One reveal instance bound to one element.
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    latch: VisibilityLatch,
    visible_at: Option<f64>,
}

impl Reveal {
    /// Create a reveal in the hidden state.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            latch: VisibilityLatch::new(config.threshold),
            config,
            visible_at: None,
        }
    }

    /// Feed an intersection sample taken at `now_ms`.
    pub fn observe(&mut self, visible_fraction: f64, now_ms: f64) -> LatchTransition {
        let transition = self.latch.observe(visible_fraction);
        if transition == LatchTransition::Entered {
            self.visible_at = Some(now_ms);
        }
        transition
    }

    /// Start the reveal regardless of intersection. No-op once started.
    pub fn activate(&mut self, now_ms: f64) -> LatchTransition {
        let transition = self.latch.trip();
        if transition == LatchTransition::Entered {
            self.visible_at = Some(now_ms);
        }
        transition
    }

    /// Whether the latch has tripped.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    /// Configuration this reveal was built with.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Declarative style for the current state.
    #[must_use]
    pub fn style(&self) -> RevealStyle {
        if !self.is_visible() {
            return RevealStyle {
                opacity: 0.0,
                translate_y: self.config.offset_px,
                transition: None,
            };
        }
        let duration = format_number(self.config.duration_ms.max(0.0));
        let delay = format_number(self.config.delay_ms.max(0.0));
        let timing = RevealConfig::EASING.css_timing();
        RevealStyle {
            opacity: 1.0,
            translate_y: 0.0,
            transition: Some(format!(
                "opacity {duration}ms {timing} {delay}ms, transform {duration}ms {timing} {delay}ms"
            )),
        }
    }

    /// Sample the modelled transition at `now_ms`.
    #[must_use]
    pub fn frame(&self, now_ms: f64) -> RevealFrame {
        match self.visible_at {
            Some(start) => self.config.frame_at(now_ms - start),
            None => RevealFrame::hidden(self.config.offset_px),
        }
    }

    /// Whether the transition has finished at `now_ms`.
    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.visible_at
            .is_some_and(|start| now_ms - start >= self.config.settle_ms())
    }
}

/// Format a number for CSS without a trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
