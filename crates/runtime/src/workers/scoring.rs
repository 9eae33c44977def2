//! Scoring worker that owns the authoritative [`Match`] snapshot.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`ScoringEngine`], keeps the undo history, and publishes
//! [`MatchEvent`] notifications.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use scoring_core::{
    Action, ExecuteError, HistoryLog, InningsNumber, Match, ScoringConfig, ScoringEngine,
    ScoringError, Signals, Timestamp, TransitionPhase,
};

use crate::api::{Result, Submission};
use crate::events::{EventBus, MatchEvent};

/// Commands that can be sent to the scoring worker
pub enum Command {
    /// Apply an action to the current snapshot.
    Submit {
        action: Action,
        reply: oneshot::Sender<Result<Submission>>,
    },
    /// Restore the previous snapshot, if any.
    Undo {
        reply: oneshot::Sender<Option<Arc<Match>>>,
    },
    /// Query the current snapshot (read-only).
    QueryState { reply: oneshot::Sender<Arc<Match>> },
    /// Query how many snapshots can be undone.
    HistoryDepth { reply: oneshot::Sender<usize> },
}

/// Background task that processes scoring commands one at a time.
pub struct ScoringWorker {
    state: Arc<Match>,
    history: HistoryLog,
    config: ScoringConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    sync_tx: Option<mpsc::Sender<Arc<Match>>>,
}

impl ScoringWorker {
    pub fn new(
        state: Match,
        config: ScoringConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        sync_tx: Option<mpsc::Sender<Arc<Match>>>,
    ) -> Self {
        Self {
            state: Arc::new(state),
            history: HistoryLog::new(),
            config,
            command_rx,
            event_bus,
            sync_tx,
        }
    }

    /// Main worker loop. Exits once every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "scoring worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit { action, reply } => {
                let result = self.submit(action);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "submit reply dropped by caller");
                }
            }
            Command::Undo { reply } => {
                let _ = reply.send(self.undo());
            }
            Command::QueryState { reply } => {
                let _ = reply.send(Arc::clone(&self.state));
            }
            Command::HistoryDepth { reply } => {
                let _ = reply.send(self.history.len());
            }
        }
    }

    fn submit(&mut self, mut action: Action) -> Result<Submission> {
        if let Action::Delivery(delivery) = &mut action
            && delivery.timestamp == Timestamp::ZERO
        {
            delivery.timestamp = Timestamp::from_millis(chrono::Utc::now().timestamp_millis());
        }

        let engine = ScoringEngine::new(&self.config);
        let outcome = match engine.execute(&self.state, &action) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.handle_execute_error(&action, &error);
                return Err(error.into());
            }
        };

        let previous = std::mem::replace(&mut self.state, Arc::new(outcome.snapshot));
        let signals = outcome.signals;

        info!(
            target: "runtime::worker",
            action = action.name(),
            signals = ?signals,
            "match[{}] {}",
            self.state.id,
            scoreline(&self.state),
        );

        self.event_bus.publish(MatchEvent::ActionApplied {
            action,
            signals,
            snapshot: Arc::clone(&self.state),
        });
        self.publish_milestones(&previous, signals);
        self.history.push(previous);
        self.enqueue_sync();

        Ok(Submission {
            snapshot: Arc::clone(&self.state),
            signals,
        })
    }

    fn undo(&mut self) -> Option<Arc<Match>> {
        let restored = self.history.undo()?;
        self.state = restored;

        info!(
            target: "runtime::worker",
            remaining = self.history.len(),
            "match[{}] undo to {}",
            self.state.id,
            scoreline(&self.state),
        );

        self.event_bus.publish(MatchEvent::Undone {
            snapshot: Arc::clone(&self.state),
            remaining: self.history.len(),
        });
        self.enqueue_sync();

        Some(Arc::clone(&self.state))
    }

    fn publish_milestones(&self, previous: &Match, signals: Signals) {
        if signals.contains(Signals::OVER_COMPLETE) {
            // The over belongs to the innings the action was applied in, which
            // may have just handed over.
            let innings = match previous.current_innings {
                InningsNumber::First => Some(self.state.innings1.as_ref()),
                InningsNumber::Second => self.state.innings2.as_deref(),
            };
            if let Some(over) = innings.and_then(|innings| innings.overs_history.last()) {
                self.event_bus.publish(MatchEvent::OverComplete {
                    innings: previous.current_innings,
                    over_number: over.over_number,
                    bowler_id: over.bowler_id.clone(),
                    summary: over.summary(),
                });
            }
        }

        if signals.contains(Signals::INNINGS_COMPLETE) {
            self.event_bus.publish(MatchEvent::InningsComplete {
                target: self.state.target,
            });
        }

        if signals.contains(Signals::MATCH_COMPLETE) {
            info!(
                target: "runtime::worker",
                "match[{}] complete: {}",
                self.state.id,
                self.state.result.as_deref().unwrap_or("no result"),
            );
            self.event_bus.publish(MatchEvent::MatchComplete {
                outcome: self.state.outcome.clone(),
                result: self.state.result.clone(),
            });
        }
    }

    fn enqueue_sync(&self) {
        let Some(sync_tx) = &self.sync_tx else {
            return;
        };
        if let Err(e) = sync_tx.try_send(Arc::clone(&self.state)) {
            warn!(
                target: "runtime::worker",
                "match[{}] snapshot not queued for sync: {}",
                self.state.id,
                e,
            );
        }
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let phase = error.phase();

        // Pre-validation rejections are routine operator mistakes.
        if phase.is_none() || phase == Some(TransitionPhase::PreValidate) {
            debug!(
                target: "runtime::worker",
                action = action.name(),
                code = error.error_code(),
                "action rejected: {}",
                error,
            );
        } else {
            warn!(
                target: "runtime::worker",
                action = action.name(),
                phase = ?phase,
                severity = error.severity().as_str(),
                code = error.error_code(),
                "action failed: {}",
                error,
            );
        }

        self.event_bus.publish(MatchEvent::ActionRejected {
            action: action.clone(),
            phase,
            severity: error.severity(),
            code: error.error_code().to_string(),
            error: error.to_string(),
        });
    }
}

fn scoreline(state: &Match) -> String {
    let innings = state.current_innings();
    format!(
        "{} {}/{} ({} ov)",
        state.team_name(&innings.batting_team_id),
        innings.score,
        innings.wickets,
        innings.overs,
    )
}
