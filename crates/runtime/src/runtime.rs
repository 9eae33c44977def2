//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to score a match.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use scoring_core::{Match, MatchSetup, ScoringConfig};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::repository::{MatchRepository, MatchSync, RepositorySync};
use crate::workers::{Command, ScoringWorker, SyncWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub scoring: ScoringConfig,
    /// Capacity of each event topic.
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Snapshots waiting for the sync worker; beyond this, new snapshots are
    /// dropped with a warning.
    pub sync_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            sync_buffer_size: 64,
        }
    }
}

/// Main runtime that orchestrates match scoring
///
/// Runtime owns the workers; [`RuntimeHandle`] is the cloneable façade for
/// clients.
pub struct Runtime {
    handle: RuntimeHandle,
    scoring_worker_handle: JoinHandle<()>,
    sync_worker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the scoring worker to drain its queue, then for the sync
    /// worker to push every snapshot queued before shutdown. Handles cloned
    /// from this runtime must be dropped first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.scoring_worker_handle
            .await
            .map_err(|source| RuntimeError::WorkerJoin {
                worker: "scoring",
                source,
            })?;

        if let Some(sync_handle) = self.sync_worker_handle {
            sync_handle
                .await
                .map_err(|source| RuntimeError::WorkerJoin {
                    worker: "sync",
                    source,
                })?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<Match>,
    setup: Option<MatchSetup>,
    sync: Option<Arc<dyn MatchSync>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            setup: None,
            sync: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing snapshot (e.g. a resumed match).
    pub fn initial_state(mut self, state: Match) -> Self {
        self.state = Some(state);
        self
    }

    /// Start a new match from its setup. Ignored if an initial state is set.
    pub fn new_match(mut self, setup: MatchSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Resume the match stored under `match_id`.
    pub fn resume(mut self, repository: &dyn MatchRepository, match_id: &str) -> Result<Self> {
        let state = repository
            .load(match_id)?
            .ok_or_else(|| RuntimeError::MatchNotFound(match_id.to_string()))?;
        self.state = Some(state);
        Ok(self)
    }

    /// Push every committed snapshot to `repository`.
    pub fn repository(self, repository: Arc<dyn MatchRepository>) -> Self {
        self.sync(Arc::new(RepositorySync::new(repository)))
    }

    /// Push every committed snapshot to a custom sync target.
    pub fn sync(mut self, sync: Arc<dyn MatchSync>) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let initial_state = match (self.state, self.setup) {
            (Some(state), _) => state,
            (None, Some(setup)) => Match::new(setup)?,
            (None, None) => return Err(RuntimeError::MissingInitialState),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        // Create sync worker (if a target is configured)
        let (sync_tx, sync_worker_handle) = match self.sync {
            Some(sync) => {
                let (sync_tx, sync_rx) = mpsc::channel(self.config.sync_buffer_size);
                let sync_worker = SyncWorker::new(sync, sync_rx, event_bus.clone());
                let sync_handle = tokio::spawn(async move {
                    sync_worker.run().await;
                });
                (Some(sync_tx), Some(sync_handle))
            }
            None => (None, None),
        };

        tracing::info!(
            target: "runtime",
            sync = sync_tx.is_some(),
            "scoring match[{}] ({} overs)",
            initial_state.id,
            initial_state.overs,
        );

        let scoring_worker = ScoringWorker::new(
            initial_state,
            self.config.scoring,
            command_rx,
            event_bus,
            sync_tx,
        );

        let scoring_worker_handle = tokio::spawn(async move {
            scoring_worker.run().await;
        });

        Ok(Runtime {
            handle,
            scoring_worker_handle,
            sync_worker_handle,
        })
    }
}
