//! Fire-and-forget sync of committed snapshots.
//!
//! Failures are logged and published on [`Topic::Sync`](crate::Topic::Sync);
//! they never touch the authoritative snapshot and are not retried. A later
//! successful push supersedes a failed one because every push carries the
//! whole match.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use scoring_core::Match;

use crate::events::{EventBus, SyncEvent};
use crate::repository::MatchSync;

/// Background task draining the sync queue in commit order.
pub struct SyncWorker {
    sync: Arc<dyn MatchSync>,
    snapshot_rx: mpsc::Receiver<Arc<Match>>,
    event_bus: EventBus,
}

impl SyncWorker {
    pub fn new(
        sync: Arc<dyn MatchSync>,
        snapshot_rx: mpsc::Receiver<Arc<Match>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            sync,
            snapshot_rx,
            event_bus,
        }
    }

    pub async fn run(mut self) {
        while let Some(snapshot) = self.snapshot_rx.recv().await {
            let match_id = snapshot.id.clone();
            match self.sync.push(snapshot).await {
                Ok(()) => {
                    debug!(target: "runtime::sync", "match[{}] synced", match_id);
                    self.event_bus.publish(SyncEvent::Saved { match_id });
                }
                Err(e) => {
                    warn!(target: "runtime::sync", "match[{}] sync failed: {}", match_id, e);
                    self.event_bus.publish(SyncEvent::Failed {
                        match_id,
                        error: e.to_string(),
                    });
                }
            }
        }
        debug!(target: "runtime::sync", "sync worker stopped");
    }
}
