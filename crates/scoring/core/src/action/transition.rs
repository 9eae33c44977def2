use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::state::Match;

/// Defines how a concrete action variant moves a match from one snapshot to
/// the next.
///
/// The engine hands every hook a private clone of the current snapshot, so an
/// error from any phase simply discards the clone. Hooks must stay
/// deterministic: no clock reads, no I/O.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Mutates the working snapshot and reports what happened. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut Match, config: &ScoringConfig) -> Result<Signals, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}
