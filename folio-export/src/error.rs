//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that end an export run. Every variant is fatal; nothing retries.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The pre-rendered page is not on disk.
    #[error("Source page not found at {path}: {source}")]
    SourceMissing {
        /// Path that was looked up.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The browser could not be started.
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    /// The page could not be opened or never went network-idle.
    #[error("Failed to load {url}: {reason}")]
    Navigation {
        /// Document URL.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// Printing to PDF failed.
    #[error("Failed to print PDF: {0}")]
    Export(String),

    /// Writing the PDF failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Navigation failure for `url`.
    pub fn navigation(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Navigation {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
