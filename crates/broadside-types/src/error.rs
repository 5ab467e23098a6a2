//! Error types for the Broadside engine.
//!
//! All crates return `BroadsideResult<T>` from fallible operations.
//! The index and classifier hot paths are infallible by design; errors
//! surface at construction and scene-loading boundaries.

use thiserror::Error;

/// Unified error type for the Broadside engine.
#[derive(Debug, Error)]
pub enum BroadsideError {
    /// Index region is degenerate or non-finite.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene file content is malformed or inconsistent.
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, BroadsideError>`.
pub type BroadsideResult<T> = Result<T, BroadsideError>;
