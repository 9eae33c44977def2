//! Error types for the action execution pipeline.

use core::convert::Infallible;

use crate::action::{DeliveryError, LineupError, PenaltyError, RetirementError};
use crate::error::{ErrorSeverity, ScoringError};
use crate::state::MatchStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the scoring engine.
///
/// The snapshot passed to the engine is never modified, so any of these
/// leaves the match exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("delivery rejected: {0}")]
    Delivery(TransitionPhaseError<DeliveryError>),

    #[error("retirement rejected: {0}")]
    Retirement(TransitionPhaseError<RetirementError>),

    #[error("penalty rejected: {0}")]
    Penalty(TransitionPhaseError<PenaltyError>),

    #[error("lineup rejected: {0}")]
    Lineup(TransitionPhaseError<LineupError>),

    #[error("bowler change rejected: {0}")]
    BowlerChange(TransitionPhaseError<LineupError>),

    #[error("strike swap rejected: {0}")]
    SwapStrike(TransitionPhaseError<LineupError>),

    #[error("match is completed; no further events are accepted")]
    MatchCompleted,

    #[error("{action} needs a live match (status is {status})")]
    NotLive {
        action: String,
        status: MatchStatus,
    },
}

impl ExecuteError {
    /// Transition phase that failed, when the error came from an action.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Delivery(e) => Some(e.phase),
            Self::Retirement(e) => Some(e.phase),
            Self::Penalty(e) => Some(e.phase),
            Self::Lineup(e) | Self::BowlerChange(e) | Self::SwapStrike(e) => Some(e.phase),
            Self::MatchCompleted | Self::NotLive { .. } => None,
        }
    }
}

impl ScoringError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Delivery(e) => e.error.severity(),
            Self::Retirement(e) => e.error.severity(),
            Self::Penalty(e) => e.error.severity(),
            Self::Lineup(e) | Self::BowlerChange(e) | Self::SwapStrike(e) => e.error.severity(),
            Self::MatchCompleted | Self::NotLive { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Delivery(e) => e.error.error_code(),
            Self::Retirement(e) => e.error.error_code(),
            Self::Penalty(e) => e.error.error_code(),
            Self::Lineup(e) | Self::BowlerChange(e) | Self::SwapStrike(e) => e.error.error_code(),
            Self::MatchCompleted => "MATCH_COMPLETED",
            Self::NotLive { .. } => "MATCH_NOT_LIVE",
        }
    }
}

impl From<TransitionPhaseError<Infallible>> for ExecuteError {
    fn from(error: TransitionPhaseError<Infallible>) -> Self {
        match error.error {}
    }
}
