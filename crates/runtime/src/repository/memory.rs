//! In-memory MatchRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use scoring_core::Match;

use super::{MatchRepository, RepositoryError, Result};

/// In-memory implementation of MatchRepository.
pub struct InMemoryMatchRepository {
    matches: RwLock<HashMap<String, Match>>,
}

impl InMemoryMatchRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            matches: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored matches.
    pub fn len(&self) -> usize {
        self.matches.read().map(|matches| matches.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn save(&self, snapshot: &Match) -> Result<()> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        matches.insert(snapshot.id.clone(), snapshot.clone());
        Ok(())
    }

    fn load(&self, match_id: &str) -> Result<Option<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(matches.get(match_id).cloned())
    }

    fn exists(&self, match_id: &str) -> bool {
        self.matches
            .read()
            .map(|matches| matches.contains_key(match_id))
            .unwrap_or(false)
    }

    fn delete(&self, match_id: &str) -> Result<()> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        matches.remove(match_id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = matches.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
