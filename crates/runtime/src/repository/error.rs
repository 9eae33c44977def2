//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("match repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("match id {0:?} cannot be used as a storage key")]
    InvalidMatchId(String),

    #[error("sync task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
