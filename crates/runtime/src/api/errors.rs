//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and the scoring
//! engine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use scoring_core::{ExecuteError, SetupError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("scoring worker command channel closed")]
    CommandChannelClosed,

    #[error("scoring worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("{worker} worker join failed")]
    WorkerJoin {
        worker: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires an initial match snapshot before building")]
    MissingInitialState,

    #[error("invalid match setup")]
    Setup(#[from] SetupError),

    #[error("match {0:?} not found in repository")]
    MatchNotFound(String),

    /// The engine refused the action; the match is unchanged.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),
}
