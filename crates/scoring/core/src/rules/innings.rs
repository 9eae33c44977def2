//! First-to-second innings hand-over.

use std::sync::Arc;

use crate::state::{Innings, InningsNumber, Match};

/// Builds innings 2 once innings 1 is over.
pub struct InningsTransitionManager;

impl InningsTransitionManager {
    /// Swaps the sides, sets the target and clears the crease and bowler so a
    /// fresh lineup must be chosen. Returns `false` (and changes nothing) if
    /// the second innings already exists.
    pub fn begin_second_innings(state: &mut Match) -> bool {
        if state.innings2.is_some() {
            return false;
        }

        let batting = state.innings1.bowling_team_id.clone();
        let bowling = state.innings1.batting_team_id.clone();
        let order = state
            .team(&batting)
            .map(|team| team.players.clone())
            .unwrap_or_default();

        state.target = Some(state.innings1.score.saturating_add(1));
        state.innings2 = Some(Arc::new(Innings::new(batting, bowling, order)));
        state.current_innings = InningsNumber::Second;
        state.striker_id = None;
        state.non_striker_id = None;
        state.current_bowler_id = None;
        true
    }
}
