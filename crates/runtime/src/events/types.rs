use std::sync::Arc;

use serde::{Deserialize, Serialize};

use scoring_core::{
    Action, ErrorSeverity, InningsNumber, Match, MatchOutcome, PlayerId, Signals, TransitionPhase,
};

/// Scoring events, published after the scoring worker commits (or refuses)
/// an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    /// An action was applied and its snapshot is now authoritative.
    ActionApplied {
        action: Action,
        signals: Signals,
        snapshot: Arc<Match>,
    },

    /// Six legal balls completed an over; a new bowler is needed.
    OverComplete {
        innings: InningsNumber,
        over_number: u32,
        bowler_id: PlayerId,
        summary: String,
    },

    /// The first innings ended and the chase target is set.
    InningsComplete { target: Option<u32> },

    MatchComplete {
        outcome: Option<MatchOutcome>,
        result: Option<String>,
    },

    /// The previous snapshot was restored.
    Undone {
        snapshot: Arc<Match>,
        remaining: usize,
    },

    /// An action was refused; the authoritative snapshot is unchanged.
    ActionRejected {
        action: Action,
        phase: Option<TransitionPhase>,
        severity: ErrorSeverity,
        code: String,
        error: String,
    },
}

/// Outcome of pushing a committed snapshot to the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SyncEvent {
    Saved { match_id: String },
    Failed { match_id: String, error: String },
}
