//! Error types for text rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors that can occur while rendering text or playing cues.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Writing output or starting a player process failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A sound player ran but reported failure.
    #[error("playback failed: {0}")]
    Playback(String),
}
