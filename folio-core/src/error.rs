//! Error types for core operations.
//!
//! The animation primitives themselves never fail; errors only arise when an
//! animation descriptor arriving from markup cannot be understood.

use thiserror::Error;

/// Result type for core operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Animation descriptor serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Descriptor parsed but carries values no primitive can use.
    #[error("Invalid animation descriptor: {0}")]
    InvalidSpec(String),
}
