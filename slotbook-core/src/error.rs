//! Error types for slotbook.

use thiserror::Error;

/// Errors that can occur in slotbook operations.
#[derive(Error, Debug)]
pub enum SlotbookError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Share error: {0}")]
    Share(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SlotbookError {
    pub fn validation(message: impl Into<String>) -> Self {
        SlotbookError::Validation(message.into())
    }
}

/// Result type alias for slotbook operations.
pub type SlotbookResult<T> = Result<T, SlotbookError>;
