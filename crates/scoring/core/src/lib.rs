//! Deterministic ball-by-ball scoring engine for limited-overs cricket.
//!
//! The crate is pure: no I/O, no clocks, no async. A [`Match`] snapshot plus
//! an [`Action`] goes in, a new snapshot plus [`Signals`] comes out.
//!
//! Modules:
//! - [`state`]: match, innings, over, ball and wicket records
//! - [`action`]: operator events and their transitions
//! - [`engine`]: the pre-validate / apply / post-validate pipeline and the
//!   end-of-transition checks
//! - [`rules`]: over tracking, dismissals, innings hand-over, results
//! - [`history`]: undo stack of prior snapshots
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod rules;
pub mod state;

pub use action::{
    AbandonAction, Action, ActionTransition, BowlerChangeAction, DeliveryAction, DeliveryError,
    DeliveryExtra, DismissalInput, LineupAction, LineupError, PenaltyAction, PenaltyError,
    RetirementAction, RetirementError, RetirementKind, SwapStrikeAction, Vacancy,
};
pub use config::ScoringConfig;
pub use engine::{
    ExecuteError, ExecutionOutcome, ScoringEngine, Signals, TransitionPhase, TransitionPhaseError,
};
pub use error::{ErrorSeverity, ScoringError};
pub use history::HistoryLog;
pub use rules::{InningsTransitionManager, InvariantViolation, OverTracker, ResultDeterminer};
pub use state::{
    Ball, BallExtra, BatsmanScore, BattingStatus, BowlerScore, CreaseSlot, DismissalKind,
    ExtraKind, Extras, Innings, InningsNumber, Margin, Match, MatchOutcome, MatchSetup,
    MatchStatus, Over, OversCount, PlayerId, SetupError, TeamId, TeamSheet, Timestamp,
    TossDecision, Wicket,
};
