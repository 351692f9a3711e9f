//! # Folio Core
//!
//! Animation engine for the Folio résumé page.
//! Every primitive is a pure state machine driven by an injected clock, so the
//! same code runs under `requestAnimationFrame` in the browser and under a
//! hand-stepped clock in tests.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               folio-core                    │
//! ├─────────────────────────────────────────────┤
//! │  Visibility      │  Time-based primitives   │
//! │  - Latch         │  - Reveal / Meter        │
//! │  - Threshold     │  - Counter + easing      │
//! │                  │  - Typewriter + caret    │
//! ├─────────────────────────────────────────────┤
//! │  Motion          │  Page data               │
//! │  - Scroll        │  - Profile model         │
//! │  - Pointer       │  - Animation specs       │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod counter;
pub mod easing;
pub mod error;
pub mod meter;
pub mod motion;
pub mod profile;
pub mod reveal;
pub mod spec;
pub mod typewriter;
pub mod visibility;

pub use counter::{Counter, CounterConfig, CounterState, FrameRequest};
pub use easing::Easing;
pub use error::{FolioError, FolioResult};
pub use meter::{Meter, MeterConfig, MeterStyle};
pub use motion::{MotionSample, MotionTracker, ParallaxConfig, ParallaxOffset};
pub use profile::{Contact, Education, Job, Link, Profile, Skill, SkillGroup, Stat};
pub use reveal::{Reveal, RevealConfig, RevealFrame, RevealStyle};
pub use spec::AnimationSpec;
pub use typewriter::{Typewriter, TypewriterConfig, TypewriterState};
pub use visibility::{LatchTransition, Visibility, VisibilityLatch};

/// Folio core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
