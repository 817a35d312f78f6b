//! Error types for glyphtext.

use thiserror::Error;

/// Primary error type for text reconstruction and queries.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("glyph dump error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid page rotation: {0} (expected a multiple of 90)")]
    InvalidRotation(i64),

    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for TextError.
pub type Result<T> = std::result::Result<T, TextError>;
