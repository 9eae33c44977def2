use core::convert::Infallible;

use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::rules::ResultDeterminer;
use crate::state::Match;

/// Operator ends the match early. Without a second innings the result is
/// "abandoned"; otherwise the scores as they stand decide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AbandonAction;

impl ActionTransition for AbandonAction {
    type Error = Infallible;

    fn apply(&self, state: &mut Match, config: &ScoringConfig) -> Result<Signals, Self::Error> {
        ResultDeterminer::determine(state, config);
        Ok(Signals::MATCH_COMPLETE)
    }
}
