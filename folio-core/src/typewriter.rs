//! Typed-text effect with a blinking caret.
//!
//! Characters are Unicode scalar values, so accented names type out one
//! glyph at a time rather than one byte at a time.

use serde::{Deserialize, Serialize};

/// Typewriter tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Text to type.
    pub text: String,
    /// Time between characters.
    pub interval_ms: f64,
    /// Time between activation and the first tick.
    pub start_delay_ms: f64,
    /// Full caret blink cycle (on + off).
    pub caret_period_ms: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            interval_ms: 50.0,
            start_delay_ms: 0.0,
            caret_period_ms: 1000.0,
        }
    }
}

impl TypewriterConfig {
    /// Typewriter for `text` with default timing.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the start delay.
    #[must_use]
    pub fn with_start_delay(mut self, start_delay_ms: f64) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }

    /// Set the per-character interval.
    #[must_use]
    pub fn with_interval(mut self, interval_ms: f64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Number of characters in the text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Characters revealed `elapsed_ms` after activation.
    ///
    /// The `k`-th character appears at `start_delay + k * interval`. A
    /// non-positive interval reveals everything once the delay has passed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn revealed_at(&self, elapsed_ms: f64) -> usize {
        let len = self.char_len();
        let typing = elapsed_ms - self.start_delay_ms.max(0.0);
        if typing.is_nan() || typing < 0.0 {
            return 0;
        }
        if self.interval_ms <= 0.0 || self.interval_ms.is_nan() {
            return len;
        }
        let ticks = (typing / self.interval_ms).floor();
        if ticks >= len as f64 {
            len
        } else {
            ticks as usize
        }
    }

    /// Time from activation until the full text shows.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn finish_ms(&self) -> f64 {
        self.start_delay_ms.max(0.0) + self.interval_ms.max(0.0) * self.char_len() as f64
    }
}

/// Whether the caret is drawn `elapsed_ms` into its blink loop.
///
/// First half of each period on, second half off. Runs forever,
/// independent of typing progress.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn caret_visible(elapsed_ms: f64, period_ms: f64) -> bool {
    if period_ms <= 0.0 || elapsed_ms.is_nan() || elapsed_ms < 0.0 {
        return true;
    }
    let half = period_ms / 2.0;
    ((elapsed_ms / half).floor() as u64) % 2 == 0
}

/// Mutable typewriter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterState {
    /// Characters currently shown.
    pub revealed_length: usize,
    /// Whole text.
    pub full_text: String,
}

impl TypewriterState {
    /// The visible prefix.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        match self.full_text.char_indices().nth(self.revealed_length) {
            Some((byte, _)) => &self.full_text[..byte],
            None => &self.full_text,
        }
    }

    /// Whether the whole text is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed_length >= self.full_text.chars().count()
    }
}

/// One typewriter instance bound to one element.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    activated_at: Option<f64>,
    state: TypewriterState,
}

impl Typewriter {
    /// Create an inactive typewriter showing nothing.
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            state: TypewriterState {
                revealed_length: 0,
                full_text: config.text.clone(),
            },
            config,
            activated_at: None,
        }
    }

    /// Start the clock. Returns `false` if already active.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        if self.activated_at.is_some() {
            return false;
        }
        self.activated_at = Some(now_ms);
        true
    }

    /// Whether [`Self::activate`] has been called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// Advance to `now_ms`, revealing at most one more character.
    ///
    /// Returns `true` if the visible text changed. Interval timers call this
    /// once per interval so the one-character step keeps the cadence exact;
    /// a late timer catches up over following ticks rather than jumping.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(started) = self.activated_at else {
            return false;
        };
        if self.state.is_complete() {
            return false;
        }
        let due = self.config.revealed_at(now_ms - started);
        if due > self.state.revealed_length {
            self.state.revealed_length += 1;
            true
        } else {
            false
        }
    }

    /// Jump straight to the full text.
    pub fn finish(&mut self) {
        self.state.revealed_length = self.config.char_len();
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    /// The visible prefix.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        self.state.visible_text()
    }

    /// Whether the whole text is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Configuration this typewriter was built with.
    #[must_use]
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Caret state at `now_ms`; blinks from construction onward.
    #[must_use]
    pub fn caret_visible(&self, now_ms: f64) -> bool {
        let origin = self.activated_at.unwrap_or(0.0);
        caret_visible(now_ms - origin, self.config.caret_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_before_delay() {
        let config = TypewriterConfig::new("Hello").with_start_delay(500.0);
        assert_eq!(config.revealed_at(0.0), 0);
        assert_eq!(config.revealed_at(499.0), 0);
        assert_eq!(config.revealed_at(550.0), 1);
    }

    #[test]
    fn one_char_per_tick() {
        let mut writer = Typewriter::new(TypewriterConfig::new("abc").with_interval(50.0));
        writer.activate(0.0);
        assert!(!writer.tick(49.0));
        assert!(writer.tick(50.0));
        assert_eq!(writer.visible_text(), "a");
        assert!(writer.tick(100.0));
        assert!(writer.tick(150.0));
        assert_eq!(writer.visible_text(), "abc");
        assert!(writer.is_complete());
        assert!(!writer.tick(10_000.0));
    }

    #[test]
    fn late_tick_reveals_only_one() {
        let mut writer = Typewriter::new(TypewriterConfig::new("abcdef"));
        writer.activate(0.0);
        assert!(writer.tick(1_000.0));
        assert_eq!(writer.state().revealed_length, 1);
    }

    #[test]
    fn inactive_tick_is_noop() {
        let mut writer = Typewriter::new(TypewriterConfig::new("abc"));
        assert!(!writer.tick(1_000.0));
        assert_eq!(writer.visible_text(), "");
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let mut writer = Typewriter::new(TypewriterConfig::new("Résumé"));
        writer.activate(0.0);
        writer.tick(50.0);
        writer.tick(100.0);
        assert_eq!(writer.visible_text(), "Ré");
        writer.finish();
        assert_eq!(writer.visible_text(), "Résumé");
    }

    #[test]
    fn second_activate_is_rejected() {
        let mut writer = Typewriter::new(TypewriterConfig::new("x"));
        assert!(writer.activate(0.0));
        assert!(!writer.activate(999.0));
    }

    #[test]
    fn caret_blinks_forever() {
        assert!(caret_visible(0.0, 1000.0));
        assert!(!caret_visible(500.0, 1000.0));
        assert!(caret_visible(1000.0, 1000.0));
        assert!(!caret_visible(1_000_500.0, 1000.0));
    }

    #[test]
    fn zero_interval_reveals_all_after_delay() {
        let config = TypewriterConfig::new("abc").with_interval(0.0);
        assert_eq!(config.revealed_at(0.0), 3);
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let writer = Typewriter::new(TypewriterConfig::new(""));
        assert!(writer.is_complete());
    }
}
