//! One animated element's state machine, independent of the DOM.
//!
//! A [`Binding`] wraps the matching `folio-core` primitive and answers every
//! input (intersection sample, frame, typing tick, scroll or pointer move)
//! with [`Patch`]es for the host to apply. Nothing here touches `web_sys`,
//! so the whole lifecycle is testable off-browser.

use folio_core::{
    AnimationSpec, Counter, FrameRequest, LatchTransition, Meter, MotionTracker, ParallaxConfig,
    Reveal, Typewriter,
};

/// A change to apply to a bound element.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Inline style declarations, `(property, value)`.
    Style(Vec<(&'static str, String)>),
    /// Replace the element's text.
    Text(String),
    /// Show or hide the typewriter caret.
    Caret(bool),
}

/// Animation state for one element.
#[derive(Debug, Clone)]
pub enum Binding {
    /// Fade/slide in.
    Reveal(Reveal),
    /// Count up.
    Counter(Counter),
    /// Type out.
    Typewriter(Typewriter),
    /// Follow scroll and pointer.
    Parallax(ParallaxConfig),
    /// Grow a bar.
    Meter(Meter),
}

impl Binding {
    /// Build the primitive a descriptor asks for.
    #[must_use]
    pub fn from_spec(spec: AnimationSpec) -> Self {
        match spec {
            AnimationSpec::Reveal(config) => Self::Reveal(Reveal::new(config)),
            AnimationSpec::Counter(config) => Self::Counter(Counter::new(config)),
            AnimationSpec::Typewriter(config) => Self::Typewriter(Typewriter::new(config)),
            AnimationSpec::Parallax(config) => Self::Parallax(config),
            AnimationSpec::Meter(config) => Self::Meter(Meter::new(config)),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reveal(_) => "reveal",
            Self::Counter(_) => "counter",
            Self::Typewriter(_) => "typewriter",
            Self::Parallax(_) => "parallax",
            Self::Meter(_) => "meter",
        }
    }

    /// Visible fraction that starts this binding, if viewport-driven.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        match self {
            Self::Reveal(reveal) => Some(reveal.config().threshold),
            Self::Counter(counter) => Some(counter.config().threshold),
            Self::Meter(meter) => Some(meter.config().threshold),
            Self::Typewriter(_) | Self::Parallax(_) => None,
        }
    }

    /// Typing cadence and caret half-period for typewriters. The caret
    /// half-period is `None` when the caret never blinks.
    #[must_use]
    pub fn typing_periods(&self) -> Option<(f64, Option<f64>)> {
        match self {
            Self::Typewriter(typewriter) => {
                let config = typewriter.config();
                let caret = (config.caret_period_ms > 0.0).then_some(config.caret_period_ms / 2.0);
                Some((config.interval_ms, caret))
            }
            _ => None,
        }
    }

    /// Start time-driven bindings at mount. Viewport-driven ones wait.
    pub fn start(&mut self, now_ms: f64) {
        if let Self::Typewriter(typewriter) = self {
            typewriter.activate(now_ms);
        }
    }

    /// Patches that hide the element's end state until it animates.
    #[must_use]
    pub fn initial(&self) -> Vec<Patch> {
        match self {
            Self::Reveal(reveal) => vec![Patch::Style(reveal.style().declarations())],
            Self::Counter(counter) => vec![Patch::Text(counter.value().to_string())],
            Self::Typewriter(typewriter) => vec![Patch::Text(typewriter.visible_text().to_string())],
            Self::Parallax(_) => Vec::new(),
            Self::Meter(meter) => vec![Patch::Style(meter.style().declarations())],
        }
    }

    /// Feed an intersection sample.
    pub fn observe(&mut self, visible_fraction: f64, now_ms: f64) -> Vec<Patch> {
        let transition = match self {
            Self::Reveal(reveal) => reveal.observe(visible_fraction, now_ms),
            Self::Counter(counter) => counter.observe(visible_fraction, now_ms),
            Self::Meter(meter) => meter.observe(visible_fraction),
            Self::Typewriter(_) | Self::Parallax(_) => LatchTransition::Unchanged,
        };
        if transition == LatchTransition::Entered {
            self.latched_style()
        } else {
            Vec::new()
        }
    }

    fn latched_style(&self) -> Vec<Patch> {
        match self {
            Self::Reveal(reveal) => vec![Patch::Style(reveal.style().declarations())],
            Self::Meter(meter) => vec![Patch::Style(meter.style().declarations())],
            _ => Vec::new(),
        }
    }

    /// Whether a viewport-driven binding has tripped. Others report `true`
    /// so their observation can be dropped.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        match self {
            Self::Reveal(reveal) => reveal.is_visible(),
            Self::Counter(counter) => counter.is_running() || counter.is_complete(),
            Self::Meter(meter) => meter.is_visible(),
            Self::Typewriter(_) | Self::Parallax(_) => true,
        }
    }

    /// Whether this binding wants animation frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        matches!(self, Self::Counter(counter) if counter.is_running())
    }

    /// Advance a running counter.
    pub fn frame(&mut self, now_ms: f64) -> Option<Patch> {
        let Self::Counter(counter) = self else {
            return None;
        };
        match counter.tick(now_ms) {
            FrameRequest::Idle => None,
            FrameRequest::Continue | FrameRequest::Done => {
                Some(Patch::Text(counter.value().to_string()))
            }
        }
    }

    /// Reveal the next typewriter character if it is due.
    pub fn type_next(&mut self, now_ms: f64) -> Option<Patch> {
        let Self::Typewriter(typewriter) = self else {
            return None;
        };
        typewriter
            .tick(now_ms)
            .then(|| Patch::Text(typewriter.visible_text().to_string()))
    }

    /// Caret state at `now_ms`.
    #[must_use]
    pub fn caret(&self, now_ms: f64) -> Option<Patch> {
        match self {
            Self::Typewriter(typewriter) => Some(Patch::Caret(typewriter.caret_visible(now_ms))),
            _ => None,
        }
    }

    /// Parallax transform for the tracker's latest sample.
    #[must_use]
    pub fn follow(&self, tracker: &MotionTracker) -> Option<Patch> {
        match self {
            Self::Parallax(config) => Some(Patch::Style(vec![(
                "transform",
                config.offset_for(tracker).css_transform(),
            )])),
            _ => None,
        }
    }

    /// Whether nothing is left to animate apart from the caret and parallax.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match self {
            Self::Counter(counter) => counter.is_complete(),
            Self::Typewriter(typewriter) => typewriter.is_complete(),
            Self::Reveal(reveal) => reveal.is_visible(),
            Self::Meter(meter) => meter.is_visible(),
            Self::Parallax(_) => true,
        }
    }

    /// Jump to the end state, as for printing.
    pub fn finish(&mut self, now_ms: f64) -> Vec<Patch> {
        match self {
            Self::Reveal(reveal) => {
                reveal.activate(now_ms);
                vec![Patch::Style(reveal.style().declarations())]
            }
            Self::Counter(counter) => {
                counter.activate(now_ms);
                let end = now_ms + counter.config().duration_ms.max(0.0);
                counter.tick(end);
                vec![Patch::Text(counter.value().to_string())]
            }
            Self::Typewriter(typewriter) => {
                typewriter.activate(now_ms);
                typewriter.finish();
                vec![Patch::Text(typewriter.visible_text().to_string())]
            }
            Self::Meter(meter) => {
                meter.activate();
                vec![Patch::Style(meter.style().declarations())]
            }
            Self::Parallax(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{CounterConfig, MeterConfig, RevealConfig, TypewriterConfig};

    fn style_value(patches: &[Patch], property: &str) -> Option<String> {
        patches.iter().find_map(|patch| match patch {
            Patch::Style(declarations) => declarations
                .iter()
                .find(|(name, _)| *name == property)
                .map(|(_, value)| value.clone()),
            _ => None,
        })
    }

    #[test]
    fn reveal_starts_hidden_and_shows_once() {
        let mut binding = Binding::from_spec(AnimationSpec::Reveal(RevealConfig::default()));
        assert_eq!(style_value(&binding.initial(), "opacity").as_deref(), Some("0"));
        assert!(binding.observe(0.05, 10.0).is_empty());
        let shown = binding.observe(0.5, 20.0);
        assert_eq!(style_value(&shown, "opacity").as_deref(), Some("1"));
        assert!(binding.is_latched());
        assert!(binding.observe(1.0, 30.0).is_empty());
    }

    #[test]
    fn counter_runs_on_frames_after_latch() {
        let mut binding = Binding::from_spec(AnimationSpec::Counter(CounterConfig::new(42, 1000.0)));
        assert_eq!(binding.initial(), vec![Patch::Text("0".to_string())]);
        assert_eq!(binding.frame(100.0), None);
        assert!(!binding.needs_frames());

        binding.observe(1.0, 0.0);
        assert!(binding.needs_frames());
        binding.frame(500.0);
        assert_eq!(binding.frame(1000.0), Some(Patch::Text("42".to_string())));
        assert!(!binding.needs_frames());
        assert!(binding.is_settled());
    }

    #[test]
    fn typewriter_types_one_character_per_tick() {
        let config = TypewriterConfig::new("Hi!").with_interval(50.0);
        let mut binding = Binding::from_spec(AnimationSpec::Typewriter(config));
        binding.start(0.0);
        assert_eq!(binding.initial(), vec![Patch::Text(String::new())]);
        assert_eq!(binding.type_next(60.0), Some(Patch::Text("H".to_string())));
        assert_eq!(binding.type_next(1000.0), Some(Patch::Text("Hi".to_string())));
        assert_eq!(binding.type_next(1001.0), Some(Patch::Text("Hi!".to_string())));
        assert_eq!(binding.type_next(2000.0), None);
        assert!(binding.is_settled());
        assert_eq!(binding.typing_periods(), Some((50.0, Some(500.0))));
    }

    #[test]
    fn steady_caret_needs_no_timer() {
        let config = TypewriterConfig {
            caret_period_ms: 0.0,
            ..TypewriterConfig::new("x")
        };
        let mut binding = Binding::from_spec(AnimationSpec::Typewriter(config));
        binding.start(0.0);
        assert_eq!(binding.typing_periods(), Some((50.0, None)));
        assert_eq!(binding.caret(700.0), Some(Patch::Caret(true)));

        let negative = TypewriterConfig {
            caret_period_ms: -10.0,
            ..TypewriterConfig::new("x")
        };
        let binding = Binding::from_spec(AnimationSpec::Typewriter(negative));
        assert_eq!(binding.typing_periods(), Some((50.0, None)));
    }

    #[test]
    fn hidden_start_is_undone_by_finish() {
        let specs = [
            AnimationSpec::Reveal(RevealConfig::default()),
            AnimationSpec::Counter(CounterConfig::new(9, 2000.0)),
            AnimationSpec::Typewriter(TypewriterConfig::new("ok").with_start_delay(60_000.0)),
            AnimationSpec::Meter(MeterConfig::new(40)),
        ];
        for spec in specs {
            let mut binding = Binding::from_spec(spec);
            binding.start(0.0);
            let hidden = binding.initial();
            let restored = binding.finish(1.0);
            assert_ne!(hidden, restored);
            assert!(binding.is_settled());
        }
    }

    #[test]
    fn caret_blinks_for_typewriters_only() {
        let mut binding = Binding::from_spec(AnimationSpec::Typewriter(TypewriterConfig::new("x")));
        binding.start(0.0);
        assert_eq!(binding.caret(100.0), Some(Patch::Caret(true)));
        assert_eq!(binding.caret(700.0), Some(Patch::Caret(false)));
        let meter = Binding::from_spec(AnimationSpec::Meter(MeterConfig::new(50)));
        assert_eq!(meter.caret(0.0), None);
    }

    #[test]
    fn parallax_follows_tracker() {
        let binding = Binding::from_spec(AnimationSpec::Parallax(ParallaxConfig {
            scroll_factor: 0.5,
            pointer_factor: 0.0,
        }));
        let mut tracker = MotionTracker::new();
        tracker.on_scroll(100.0);
        assert_eq!(
            binding.follow(&tracker),
            Some(Patch::Style(vec![(
                "transform",
                "translate3d(0.00px, 50.00px, 0)".to_string()
            )]))
        );
        assert!(binding.threshold().is_none());
    }

    #[test]
    fn finish_reaches_end_state_for_every_kind() {
        let mut counter = Binding::from_spec(AnimationSpec::Counter(CounterConfig::new(7, 2000.0)));
        assert_eq!(counter.finish(0.0), vec![Patch::Text("7".to_string())]);

        let mut typewriter =
            Binding::from_spec(AnimationSpec::Typewriter(TypewriterConfig::new("done")));
        assert_eq!(typewriter.finish(0.0), vec![Patch::Text("done".to_string())]);

        let mut meter = Binding::from_spec(AnimationSpec::Meter(MeterConfig::new(80)));
        assert_eq!(style_value(&meter.finish(0.0), "width").as_deref(), Some("80%"));

        let mut reveal = Binding::from_spec(AnimationSpec::Reveal(RevealConfig::default()));
        assert_eq!(style_value(&reveal.finish(0.0), "opacity").as_deref(), Some("1"));
        assert!(reveal.is_settled());
    }
}
