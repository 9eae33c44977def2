//! Repository contracts for saving and loading match snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use scoring_core::Match;

use super::{RepositoryError, Result};

/// Blocking store of the latest snapshot per match.
pub trait MatchRepository: Send + Sync {
    /// Save (replace) the snapshot stored under `snapshot.id`.
    fn save(&self, snapshot: &Match) -> Result<()>;

    /// Load the stored snapshot of a match.
    fn load(&self, match_id: &str) -> Result<Option<Match>>;

    /// Check if a snapshot exists.
    fn exists(&self, match_id: &str) -> bool;

    /// Delete a stored snapshot. Missing ids are not an error.
    fn delete(&self, match_id: &str) -> Result<()>;

    /// List stored match ids, sorted.
    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Destination of fire-and-forget snapshot syncs.
///
/// The sync worker calls this once per committed snapshot, in commit order,
/// and never retries. Implementations decide what "external store" means: a
/// local repository, a remote API, a message queue.
#[async_trait]
pub trait MatchSync: Send + Sync {
    async fn push(&self, snapshot: Arc<Match>) -> Result<()>;
}

/// Pushes snapshots into a [`MatchRepository`] on the blocking thread pool.
pub struct RepositorySync {
    repository: Arc<dyn MatchRepository>,
}

impl RepositorySync {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MatchSync for RepositorySync {
    async fn push(&self, snapshot: Arc<Match>) -> Result<()> {
        let repository = Arc::clone(&self.repository);
        tokio::task::spawn_blocking(move || repository.save(&snapshot))
            .await
            .map_err(|e| RepositoryError::Task(e.to_string()))?
    }
}
