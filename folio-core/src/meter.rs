//! Skill-level bars that grow to their level when scrolled into view.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::reveal::format_number;
use crate::visibility::{LatchTransition, VisibilityLatch};

/// Meter tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Fill level in percent, `0..=100`.
    pub level: u8,
    /// Delay after the latch trips.
    pub delay_ms: f64,
    /// Width transition length.
    pub duration_ms: f64,
    /// Visible fraction required to trip.
    pub threshold: f64,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            level: 0,
            delay_ms: 0.0,
            duration_ms: 1000.0,
            threshold: 0.3,
        }
    }
}

impl MeterConfig {
    /// Meter filling to `level` percent.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            ..Self::default()
        }
    }

    /// Width in percent `elapsed_ms` after the latch tripped.
    #[must_use]
    pub fn width_at(&self, elapsed_ms: f64) -> f64 {
        let level = f64::from(self.level.min(100));
        let running = elapsed_ms - self.delay_ms.max(0.0);
        if running.is_nan() || running < 0.0 {
            return 0.0;
        }
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            running / self.duration_ms
        };
        level * Easing::EASE_OUT_CUBIC.apply(progress)
    }
}

/// Inline style for a meter fill.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterStyle {
    /// Width in percent.
    pub width_percent: f64,
    /// CSS `transition` value once running.
    pub transition: Option<String>,
}

impl MeterStyle {
    /// `(property, value)` pairs ready for `style.setProperty`.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{}%", format_number(self.width_percent))),
            (
                "transition",
                self.transition.clone().unwrap_or_else(|| "none".to_string()),
            ),
        ]
    }
}

/// One meter instance bound to one bar.
#[derive(Debug, Clone)]
pub struct Meter {
    config: MeterConfig,
    latch: VisibilityLatch,
}

impl Meter {
    /// Create an empty meter.
    #[must_use]
    pub fn new(config: MeterConfig) -> Self {
        Self {
            latch: VisibilityLatch::new(config.threshold),
            config,
        }
    }

    /// Feed an intersection sample.
    pub fn observe(&mut self, visible_fraction: f64) -> LatchTransition {
        self.latch.observe(visible_fraction)
    }

    /// Fill regardless of intersection.
    pub fn activate(&mut self) -> LatchTransition {
        self.latch.trip()
    }

    /// Whether the latch has tripped.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    /// Configuration this meter was built with.
    #[must_use]
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Declarative style for the current state.
    #[must_use]
    pub fn style(&self) -> MeterStyle {
        if !self.is_visible() {
            return MeterStyle {
                width_percent: 0.0,
                transition: None,
            };
        }
        MeterStyle {
            width_percent: f64::from(self.config.level.min(100)),
            transition: Some(format!(
                "width {}ms {} {}ms",
                format_number(self.config.duration_ms.max(0.0)),
                Easing::EASE_OUT_CUBIC.css_timing(),
                format_number(self.config.delay_ms.max(0.0)),
            )),
        }
    }
}
