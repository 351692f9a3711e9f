//! Numeric count-up driven by frame callbacks.
//!
//! The counter refuses to start until its visibility latch has tripped, so
//! off-screen stats never burn frames. Once started it samples wall-clock
//! time per frame and asks for another frame until progress reaches 1.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::visibility::{LatchTransition, VisibilityLatch};

/// Counter tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Final displayed value.
    pub target: u64,
    /// Time to go from 0 to `target`.
    pub duration_ms: f64,
    /// Progress curve.
    pub easing: Easing,
    /// Visible fraction required before counting starts.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target: 0,
            duration_ms: 2000.0,
            easing: Easing::default(),
            threshold: 0.5,
        }
    }
}

impl CounterConfig {
    /// Counter to `target` over `duration_ms`, default curve and threshold.
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            ..Self::default()
        }
    }

    /// Replace the curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress after `elapsed_ms`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || self.duration_ms.is_nan() {
            return 1.0;
        }
        if elapsed_ms.is_nan() {
            return 0.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value after `elapsed_ms`.
    ///
    /// `floor(eased * target)` while running and exactly `target` once
    /// progress reaches 1.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = self.progress_at(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let eased = self.easing.apply(progress);
        let value = (eased * self.target as f64).floor() as u64;
        value.min(self.target)
    }
}

/// Mutable counter state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterState {
    /// Value currently on screen.
    pub current_value: u64,
    /// Value shown at completion.
    pub target_value: u64,
    /// Linear progress; frozen at 1.0 when done.
    pub elapsed_fraction: f64,
}

/// What the host scheduler should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Not started; do not schedule anything.
    Idle,
    /// Schedule another frame.
    Continue,
    /// Finished; stop scheduling.
    Done,
}

/// One count-up instance bound to one element.
#[derive(Debug, Clone)]
pub struct Counter {
    config: CounterConfig,
    latch: VisibilityLatch,
    started_at: Option<f64>,
    state: CounterState,
}

impl Counter {
    /// Create an idle counter showing 0.
    #[must_use]
    pub fn new(config: CounterConfig) -> Self {
        Self {
            latch: VisibilityLatch::new(config.threshold),
            state: CounterState {
                current_value: 0,
                target_value: config.target,
                elapsed_fraction: 0.0,
            },
            config,
            started_at: None,
        }
    }

    /// Feed an intersection sample; starts the clock on the first trip.
    pub fn observe(&mut self, visible_fraction: f64, now_ms: f64) -> LatchTransition {
        let transition = self.latch.observe(visible_fraction);
        if transition == LatchTransition::Entered {
            self.start(now_ms);
        }
        transition
    }

    /// Start regardless of intersection. No-op once started.
    pub fn activate(&mut self, now_ms: f64) -> LatchTransition {
        let transition = self.latch.trip();
        if transition == LatchTransition::Entered {
            self.start(now_ms);
        }
        transition
    }

    fn start(&mut self, now_ms: f64) {
        self.started_at = Some(now_ms);
        tracing::debug!(target_value = self.config.target, "counter started");
    }

    /// Advance to `now_ms`.
    ///
    /// Before the latch trips this returns [`FrameRequest::Idle`] without
    /// touching state; after completion it returns [`FrameRequest::Done`]
    /// without touching state.
    pub fn tick(&mut self, now_ms: f64) -> FrameRequest {
        let Some(started_at) = self.started_at else {
            return FrameRequest::Idle;
        };
        if self.is_complete() {
            return FrameRequest::Done;
        }
        let elapsed = now_ms - started_at;
        let fraction = self.config.progress_at(elapsed).max(self.state.elapsed_fraction);
        let value = self.config.value_at(elapsed).max(self.state.current_value);
        self.state.elapsed_fraction = fraction;
        self.state.current_value = value;
        if fraction >= 1.0 {
            self.state.current_value = self.state.target_value;
            FrameRequest::Done
        } else {
            FrameRequest::Continue
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Value currently on screen.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.state.current_value
    }

    /// Whether the counter has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.elapsed_fraction >= 1.0
    }

    /// Whether the clock has started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.is_complete()
    }

    /// Configuration this counter was built with.
    #[must_use]
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }
}
