//! Error types for smart-notes.

use thiserror::Error;

/// Result type alias using smart-notes' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for smart-notes operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// An upstream service (the summarization API) failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for both the generic and the note-specific not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::NoteNotFound(_))
    }
}
