//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while composing the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An animation descriptor could not be encoded.
    #[error("Animation descriptor error: {0}")]
    Motion(#[from] folio_core::FolioError),

    /// Script literal serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the page to disk failed.
    #[error("Failed to write page to {path}: {source}")]
    Write {
        /// Destination path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
