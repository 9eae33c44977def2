//! File-based MatchRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use scoring_core::Match;

use super::{MatchRepository, RepositoryError, Result};

/// Stores each match as `match_{id}.json` (pretty-printed) in a directory.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// reader never sees a half-written snapshot.
pub struct FileMatchRepository {
    base_dir: PathBuf,
}

impl FileMatchRepository {
    /// Create the repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn match_path(&self, match_id: &str) -> Result<PathBuf> {
        let valid = !match_id.is_empty()
            && match_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidMatchId(match_id.to_string()));
        }
        Ok(self.base_dir.join(format!("match_{match_id}.json")))
    }
}

impl MatchRepository for FileMatchRepository {
    fn save(&self, snapshot: &Match) -> Result<()> {
        let path = self.match_path(&snapshot.id)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved match[{}] to {}", snapshot.id, path.display());
        Ok(())
    }

    fn load(&self, match_id: &str) -> Result<Option<Match>> {
        let path = self.match_path(match_id)?;
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let snapshot: Match = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded match[{}] from {}", match_id, path.display());
        Ok(Some(snapshot))
    }

    fn exists(&self, match_id: &str) -> bool {
        self.match_path(match_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, match_id: &str) -> Result<()> {
        let path = self.match_path(match_id)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted match[{}]", match_id);
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("match_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                ids.push(id.to_string());
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
