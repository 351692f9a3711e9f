//! Animation tuning for each part of the page.
//!
//! One place fixes the numbers every section uses, so the hero, the lists
//! and the counters stay consistent with each other.

use folio_core::{
    AnimationSpec, CounterConfig, Easing, MeterConfig, ParallaxConfig, RevealConfig,
    TypewriterConfig,
};

/// Page-wide animation tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTuning {
    /// Emit `data-motion` attributes at all. Off yields a static page.
    pub enabled: bool,
    /// Reveal used for section headings and blocks.
    pub section_reveal: RevealConfig,
    /// Extra delay per list item.
    pub stagger_step_ms: f64,
    /// Counter timing for the about-section stats.
    pub counter_duration_ms: f64,
    /// Counter curve.
    pub counter_easing: Easing,
    /// Hero tagline typing cadence.
    pub typewriter_interval_ms: f64,
    /// Delay before the tagline starts typing.
    pub typewriter_delay_ms: f64,
    /// Skill bar fill duration.
    pub meter_duration_ms: f64,
    /// Hero backdrop motion.
    pub parallax: ParallaxConfig,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            section_reveal: RevealConfig::default(),
            stagger_step_ms: 100.0,
            counter_duration_ms: 2000.0,
            counter_easing: Easing::EASE_OUT_CUBIC,
            typewriter_interval_ms: 50.0,
            typewriter_delay_ms: 500.0,
            meter_duration_ms: 1000.0,
            parallax: ParallaxConfig {
                scroll_factor: 0.3,
                pointer_factor: 0.02,
            },
        }
    }
}

impl MotionTuning {
    /// Tuning that emits no animation descriptors.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn gate(&self, spec: AnimationSpec) -> Option<AnimationSpec> {
        self.enabled.then_some(spec)
    }

    /// Reveal for a standalone block.
    #[must_use]
    pub fn reveal(&self) -> Option<AnimationSpec> {
        self.gate(AnimationSpec::Reveal(self.section_reveal))
    }

    /// Reveal for the `index`-th item of a list.
    #[must_use]
    pub fn reveal_item(&self, index: usize) -> Option<AnimationSpec> {
        self.gate(AnimationSpec::Reveal(
            self.section_reveal.staggered(index, self.stagger_step_ms),
        ))
    }

    /// Count-up to `target`.
    #[must_use]
    pub fn counter(&self, target: u64) -> Option<AnimationSpec> {
        self.gate(AnimationSpec::Counter(
            CounterConfig::new(target, self.counter_duration_ms).with_easing(self.counter_easing),
        ))
    }

    /// Typed tagline.
    #[must_use]
    pub fn typewriter(&self, text: &str) -> Option<AnimationSpec> {
        self.gate(AnimationSpec::Typewriter(
            TypewriterConfig::new(text)
                .with_interval(self.typewriter_interval_ms)
                .with_start_delay(self.typewriter_delay_ms),
        ))
    }

    /// Skill bar for the `index`-th skill of a group.
    #[must_use]
    pub fn meter(&self, level: u8, index: usize) -> Option<AnimationSpec> {
        #[allow(clippy::cast_precision_loss)]
        let delay_ms = index as f64 * self.stagger_step_ms;
        self.gate(AnimationSpec::Meter(MeterConfig {
            delay_ms,
            duration_ms: self.meter_duration_ms,
            ..MeterConfig::new(level)
        }))
    }

    /// Hero backdrop parallax.
    #[must_use]
    pub fn parallax(&self) -> Option<AnimationSpec> {
        self.gate(AnimationSpec::Parallax(self.parallax))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_emits_nothing() {
        let tuning = MotionTuning::disabled();
        assert!(tuning.reveal().is_none());
        assert!(tuning.counter(5).is_none());
        assert!(tuning.typewriter("x").is_none());
        assert!(tuning.meter(50, 0).is_none());
        assert!(tuning.parallax().is_none());
    }

    #[test]
    fn list_items_are_staggered() {
        let tuning = MotionTuning::default();
        let Some(AnimationSpec::Reveal(third)) = tuning.reveal_item(2) else {
            panic!("expected reveal");
        };
        assert!((third.delay_ms - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn meter_level_is_capped() {
        let tuning = MotionTuning::default();
        let Some(AnimationSpec::Meter(meter)) = tuning.meter(250, 1) else {
            panic!("expected meter");
        };
        assert_eq!(meter.level, 100);
        assert!((meter.delay_ms - 100.0).abs() < f64::EPSILON);
    }
}
