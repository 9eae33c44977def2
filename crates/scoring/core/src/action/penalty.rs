use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::error::{ErrorSeverity, ScoringError};
use crate::rules::{InvariantViolation, check_innings};
use crate::state::Match;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenaltyError {
    #[error("penalty must award at least one run")]
    ZeroRuns,

    #[error("{runs} penalty runs would overflow the score of {score}")]
    ScoreOverflow { score: u32, runs: u32 },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ScoringError for PenaltyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZeroRuns | Self::ScoreOverflow { .. } => ErrorSeverity::Validation,
            Self::Invariant(_) => ErrorSeverity::Consistency,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroRuns => "PENALTY_ZERO_RUNS",
            Self::ScoreOverflow { .. } => "PENALTY_SCORE_OVERFLOW",
            Self::Invariant(_) => "PENALTY_INVARIANT",
        }
    }
}

/// Penalty runs awarded to the batting side. Credits no player and consumes
/// no ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyAction {
    pub runs: u32,
}

impl PenaltyAction {
    pub fn new(runs: u32) -> Self {
        Self { runs }
    }
}

impl ActionTransition for PenaltyAction {
    type Error = PenaltyError;

    fn pre_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        if self.runs == 0 {
            return Err(PenaltyError::ZeroRuns);
        }
        let score = state.current_innings().score;
        if score.checked_add(self.runs).is_none_or(|total| total == u32::MAX) {
            return Err(PenaltyError::ScoreOverflow {
                score,
                runs: self.runs,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        let innings = state.current_innings_mut();
        innings.score += self.runs;
        innings.extras.penalties += self.runs;
        innings.extras.total += self.runs;
        Ok(Signals::empty())
    }

    fn post_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        check_innings(state.current_innings())?;
        Ok(())
    }
}
