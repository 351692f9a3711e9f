//! What one export run does: which page, which file, which paper.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::error::{ExportError, ExportResult};

/// Pre-rendered page the export reads.
pub const SOURCE_PATH: &str = "dist/index.html";

/// PDF the export writes.
pub const OUTPUT_PATH: &str = "resume.pdf";

/// Default bound on waiting for network quiescence.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Millimetres per inch; Chrome takes paper sizes in inches.
pub const MM_PER_INCH: f64 = 25.4;

/// Paper size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperFormat {
    /// Width in millimetres.
    pub width_mm: f64,
    /// Height in millimetres.
    pub height_mm: f64,
}

impl PaperFormat {
    /// ISO A4, portrait.
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// Width in inches.
    #[must_use]
    pub fn width_in(&self) -> f64 {
        self.width_mm / MM_PER_INCH
    }

    /// Height in inches.
    #[must_use]
    pub fn height_in(&self) -> f64 {
        self.height_mm / MM_PER_INCH
    }
}

impl Default for PaperFormat {
    fn default() -> Self {
        Self::A4
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// No margins on any side.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

/// Print settings handed to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Paper size.
    pub paper: PaperFormat,
    /// Margins.
    pub margins: Margins,
    /// Print background colours and images.
    pub print_background: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paper: PaperFormat::A4,
            margins: Margins::zero(),
            print_background: true,
        }
    }
}

/// One export invocation.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Page to print.
    pub source: PathBuf,
    /// PDF to write.
    pub output: PathBuf,
    /// Print settings.
    pub print: PrintOptions,
    /// Bound on waiting for network quiescence.
    pub idle_timeout: Duration,
}

impl Default for ExportJob {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            print: PrintOptions::default(),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl ExportJob {
    /// Job with default print settings for the given paths.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Set the network-idle bound.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// `file://` URL of the source, resolved against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SourceMissing`] if the source does not exist,
    /// or [`ExportError::Navigation`] if it cannot be expressed as a URL.
    pub fn source_url(&self) -> ExportResult<Url> {
        let absolute = canonical(&self.source)?;
        Url::from_file_path(&absolute).map_err(|()| {
            ExportError::navigation(absolute.display().to_string(), "not an absolute file path")
        })
    }
}

fn canonical(path: &Path) -> ExportResult<PathBuf> {
    let absolute = path.canonicalize().map_err(|source| ExportError::SourceMissing {
        path: path.display().to_string(),
        source,
    })?;
    if absolute.is_file() {
        Ok(absolute)
    } else {
        Err(ExportError::SourceMissing {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        })
    }
}
