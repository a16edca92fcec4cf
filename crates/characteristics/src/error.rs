//! Error types for the characteristics library.

use thiserror::Error;

/// Main error type for characteristic operations.
#[derive(Debug, Error)]
pub enum CharacteristicsError {
    /// A strict write named a characteristic the subject type never declared.
    #[error("Characteristic '{name}' is not declared on {subject}")]
    Undeclared { name: String, subject: &'static str },

    /// Error saving or loading a snapshot.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for characteristic operations.
pub type Result<T> = std::result::Result<T, CharacteristicsError>;
