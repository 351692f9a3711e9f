//! # Folio Renderer
//!
//! Composes the résumé page: a static tree of sections rendered from literal
//! profile data into one self-contained HTML document.
//!
//! ## Page Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ header (nav, reading progress)              │
//! ├─────────────────────────────────────────────┤
//! │ hero       parallax · reveal · typewriter   │
//! │ about      reveal · counter                 │
//! │ skills     reveal · meter                   │
//! │ experience reveal (staggered)               │
//! │ education  reveal (staggered)               │
//! │ contact    reveal                           │
//! ├─────────────────────────────────────────────┤
//! │ footer                                      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Animated elements carry a `data-motion` descriptor that `folio-app`
//! picks up in the browser.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod content;
pub mod error;
pub mod html;
pub mod motion;
pub mod sections;
pub mod style;

pub use error::{RenderError, RenderResult};
pub use motion::MotionTuning;

use std::fmt::Write;
use std::path::{Path, PathBuf};

use folio_core::Profile;

/// File name of the composed page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for page composition.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Document language.
    pub lang: String,
    /// Title override; defaults to `name · headline`.
    pub title: Option<String>,
    /// ES module exporting the wasm binding, relative to the page.
    /// `None` leaves the page static.
    pub app_module: Option<String>,
    /// Animation tuning.
    pub motion: MotionTuning,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: None,
            app_module: Some("./pkg/folio_app.js".to_string()),
            motion: MotionTuning::default(),
        }
    }
}

impl PageConfig {
    /// Static page: no script, no animation descriptors.
    #[must_use]
    pub fn static_page() -> Self {
        Self {
            app_module: None,
            motion: MotionTuning::disabled(),
            ..Self::default()
        }
    }
}

/// Renders a [`Profile`] into a complete HTML document.
pub struct PageRenderer {
    config: PageConfig,
}

impl PageRenderer {
    /// Create a renderer with the given configuration.
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Create a renderer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PageConfig::default())
    }

    /// Get the renderer configuration.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Render the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if an animation descriptor cannot be encoded.
    pub fn render(&self, profile: &Profile) -> RenderResult<String> {
        let motion = &self.config.motion;
        let title = self
            .config
            .title
            .clone()
            .unwrap_or_else(|| format!("{} · {}", profile.name, profile.headline));

        let mut out = String::with_capacity(16 * 1024);
        let _ = write!(
            out,
            "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><meta name=\"description\" content=\"{}\"><style>{}</style></head><body>",
            html::escape_attr(&self.config.lang),
            html::escape_text(&title),
            html::escape_attr(&profile.headline),
            style::BASE_CSS,
        );

        sections::header(&mut out, profile);
        out.push_str("<main>");
        sections::hero(&mut out, profile, motion)?;
        sections::about(&mut out, profile, motion)?;
        sections::skills(&mut out, profile, motion)?;
        sections::experience(&mut out, profile, motion)?;
        sections::education(&mut out, profile, motion)?;
        sections::contact(&mut out, profile, motion)?;
        out.push_str("</main>");
        sections::footer(&mut out, profile);

        if let Some(module) = &self.config.app_module {
            let _ = write!(
                out,
                "<script type=\"module\">import init, {{ FolioApp }} from {};await init();window.folio = new FolioApp();window.folio.mount('main');</script>",
                serde_json::to_string(module)?.replace("</", "<\\/"),
            );
        }

        out.push_str("</body></html>");
        tracing::debug!(bytes = out.len(), "page rendered");
        Ok(out)
    }

    /// Render and write `index.html` into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write_to(&self, profile: &Profile, dir: &Path) -> RenderResult<PathBuf> {
        let html = self.render(profile)?;
        std::fs::create_dir_all(dir).map_err(|source| RenderError::Write {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(INDEX_FILE);
        std::fs::write(&path, html).map_err(|source| RenderError::Write {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "page written");
        Ok(path)
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
