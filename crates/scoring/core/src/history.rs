//! Undo stack of prior snapshots.

use std::sync::Arc;

use crate::state::Match;

/// Linear history of the snapshots replaced by accepted actions.
///
/// Snapshots are shared through [`Arc`], and each one shares its untouched
/// innings with its neighbours, so keeping the whole match history is cheap.
/// There is no redo.
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    snapshots: Vec<Arc<Match>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the snapshot an action is about to replace.
    pub fn push(&mut self, snapshot: Arc<Match>) {
        self.snapshots.push(snapshot);
    }

    /// Pops the most recent snapshot. `None` on an empty log, which callers
    /// treat as a no-op.
    pub fn undo(&mut self) -> Option<Arc<Match>> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&Arc<Match>> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
