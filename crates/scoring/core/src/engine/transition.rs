//! Action transition dispatch and execution logic.

use crate::action::{AbandonAction, Action, ActionTransition, SwapStrikeAction};
use crate::config::ScoringConfig;
use crate::state::Match;

use super::Signals;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the working snapshot and report signals
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut Match,
    config: &ScoringConfig,
) -> Result<Signals, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let signals = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(signals)
}

/// Routes each action to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut Match,
    config: &ScoringConfig,
) -> Result<Signals, ExecuteError> {
    match action {
        Action::Delivery(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Delivery)
        }
        Action::Retirement(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Retirement)
        }
        Action::Penalty(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Penalty)
        }
        Action::Lineup(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Lineup)
        }
        Action::BowlerChange(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::BowlerChange)
        }
        Action::SwapStrike => {
            drive_transition(&SwapStrikeAction, state, config).map_err(ExecuteError::SwapStrike)
        }
        Action::Abandon => Ok(drive_transition(&AbandonAction, state, config)?),
    }
}
