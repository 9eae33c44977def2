//! Action execution pipeline.
//!
//! The [`ScoringEngine`] is the authoritative reducer for [`Match`]. It never
//! touches the snapshot it is given: each call clones it, drives the action's
//! transition phases on the clone, runs the end-of-transition checks, and
//! returns the clone. An error discards the clone, so a transition either
//! lands completely or not at all.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use bitflags::bitflags;

use crate::action::Action;
use crate::config::ScoringConfig;
use crate::rules::{InningsTransitionManager, ResultDeterminer};
use crate::state::{InningsNumber, Match, MatchStatus};

bitflags! {
    /// Notable consequences of a transition, reported to collaborators.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Signals: u8 {
        /// Sixth legal ball bowled; a new bowler is needed.
        const OVER_COMPLETE     = 1 << 0;
        const WICKET_FELL       = 1 << 1;
        /// Innings 1 ended and innings 2 is ready for a lineup.
        const INNINGS_COMPLETE  = 1 << 2;
        /// Result is available; the match accepts no more events.
        const MATCH_COMPLETE    = 1 << 3;
        /// A crease slot is unset and must be filled before the next ball.
        const CREASE_VACANT     = 1 << 4;
    }
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// The new snapshot. Shares every innings the action left untouched with
    /// the input snapshot.
    pub snapshot: Match,
    pub signals: Signals,
}

/// Scoring engine applying one action at a time.
#[derive(Clone, Copy, Debug)]
pub struct ScoringEngine<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Applies `action` to a copy of `snapshot`.
    pub fn execute(
        &self,
        snapshot: &Match,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.validate_status(snapshot, action)?;

        let mut next = snapshot.clone();
        let mut signals = transition::execute_transition(action, &mut next, self.config)?;
        if action.may_end_innings() {
            let settled = self.settle(&mut next);
            if settled.contains(Signals::INNINGS_COMPLETE) {
                // Lineup for the next innings (if any) is requested anyway.
                signals.remove(Signals::CREASE_VACANT);
            }
            signals |= settled;
        }

        Ok(ExecutionOutcome {
            snapshot: next,
            signals,
        })
    }

    fn validate_status(&self, snapshot: &Match, action: &Action) -> Result<(), ExecuteError> {
        if snapshot.is_completed() {
            return Err(ExecuteError::MatchCompleted);
        }
        if action.requires_live() && snapshot.status != MatchStatus::Live {
            return Err(ExecuteError::NotLive {
                action: action.name().to_string(),
                status: snapshot.status,
            });
        }
        Ok(())
    }

    /// End-of-transition checks, in order:
    /// 1. a chase that has reached the target ends the match at once;
    /// 2. all out or overs exhausted ends the innings, which hands over to
    ///    innings 2 or decides the result.
    fn settle(&self, state: &mut Match) -> Signals {
        let innings = state.current_innings();

        if state.current_innings == InningsNumber::Second
            && let Some(target) = state.target
            && innings.score >= target
        {
            ResultDeterminer::determine(state, self.config);
            return Signals::INNINGS_COMPLETE | Signals::MATCH_COMPLETE;
        }

        let all_out = innings.wickets >= state.wicket_limit(self.config);
        let overs_done = innings.overs.completed >= state.overs;
        if !(all_out || overs_done) {
            return Signals::empty();
        }

        match state.current_innings {
            InningsNumber::First => {
                InningsTransitionManager::begin_second_innings(state);
                Signals::INNINGS_COMPLETE
            }
            InningsNumber::Second => {
                ResultDeterminer::determine(state, self.config);
                Signals::INNINGS_COMPLETE | Signals::MATCH_COMPLETE
            }
        }
    }
}

#[cfg(test)]
mod tests;
