//! Animation descriptors carried in markup.
//!
//! The renderer serializes an [`AnimationSpec`] into the `data-motion`
//! attribute of each animated element; the browser binding parses it back
//! and builds the matching primitive.

use serde::{Deserialize, Serialize};

use crate::counter::CounterConfig;
use crate::error::{FolioError, FolioResult};
use crate::meter::MeterConfig;
use crate::motion::ParallaxConfig;
use crate::reveal::RevealConfig;
use crate::typewriter::TypewriterConfig;

/// Attribute holding a serialized [`AnimationSpec`].
pub const MOTION_ATTRIBUTE: &str = "data-motion";

/// Which primitive an element uses and how it is tuned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationSpec {
    /// Fade/slide in on first visibility.
    Reveal(RevealConfig),
    /// Count up on first visibility.
    Counter(CounterConfig),
    /// Type out text after mount.
    Typewriter(TypewriterConfig),
    /// Follow scroll and pointer.
    Parallax(ParallaxConfig),
    /// Grow a bar on first visibility.
    Meter(MeterConfig),
}

impl AnimationSpec {
    /// Parse and validate an attribute value.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or carries non-finite timing.
    pub fn from_attribute(value: &str) -> FolioResult<Self> {
        let spec: Self = serde_json::from_str(value)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Serialize for a `data-motion` attribute (unescaped JSON).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_attribute(&self) -> FolioResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Visible fraction that starts this animation, if it is viewport-driven.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        match self {
            Self::Reveal(config) => Some(config.threshold),
            Self::Counter(config) => Some(config.threshold),
            Self::Meter(config) => Some(config.threshold),
            Self::Typewriter(_) | Self::Parallax(_) => None,
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

    fn validate(&self) -> FolioResult<()> {
        let timings: Vec<(&str, f64)> = match self {
            Self::Reveal(c) => vec![
                ("delay_ms", c.delay_ms),
                ("duration_ms", c.duration_ms),
                ("offset_px", c.offset_px),
                ("threshold", c.threshold),
            ],
            Self::Counter(c) => vec![("duration_ms", c.duration_ms), ("threshold", c.threshold)],
            Self::Typewriter(c) => vec![
                ("interval_ms", c.interval_ms),
                ("start_delay_ms", c.start_delay_ms),
                ("caret_period_ms", c.caret_period_ms),
            ],
            Self::Parallax(c) => vec![
                ("scroll_factor", c.scroll_factor),
                ("pointer_factor", c.pointer_factor),
            ],
            Self::Meter(c) => vec![
                ("delay_ms", c.delay_ms),
                ("duration_ms", c.duration_ms),
                ("threshold", c.threshold),
            ],
        };
        for (name, value) in timings {
            if !value.is_finite() {
                return Err(FolioError::InvalidSpec(format!(
                    "{} {name} must be finite",
                    self.kind()
                )));
            }
        }
        Ok(())
    }
}
