//! Crease and bowler selection.

use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::error::{ErrorSeverity, ScoringError};
use crate::rules::{WicketRecorder, can_come_in, previous_over_bowler};
use crate::state::{Match, MatchStatus, PlayerId, TeamId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineupError {
    #[error("striker and non-striker must be different players (got {0} twice)")]
    SamePlayer(PlayerId),

    #[error("{player} does not play for {team}")]
    NotInSide { player: PlayerId, team: TeamId },

    #[error("{0} cannot come in to bat")]
    BatsmanUnavailable(PlayerId),

    #[error("{0} is at the crease and must stay in the lineup")]
    DisplacesBatsman(PlayerId),

    #[error("{0} bowled the previous over")]
    ConsecutiveOvers(PlayerId),
}

impl ScoringError for LineupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SamePlayer(_) | Self::ConsecutiveOvers(_) => ErrorSeverity::Validation,
            Self::NotInSide { .. } | Self::BatsmanUnavailable(_) | Self::DisplacesBatsman(_) => {
                ErrorSeverity::Consistency
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SamePlayer(_) => "LINEUP_SAME_PLAYER",
            Self::NotInSide { .. } => "LINEUP_NOT_IN_SIDE",
            Self::BatsmanUnavailable(_) => "LINEUP_BATSMAN_UNAVAILABLE",
            Self::DisplacesBatsman(_) => "LINEUP_DISPLACES_BATSMAN",
            Self::ConsecutiveOvers(_) => "LINEUP_CONSECUTIVE_OVERS",
        }
    }
}

/// Rejects players missing from a non-empty team sheet.
fn ensure_in_side(state: &Match, team: &TeamId, player: &PlayerId) -> Result<(), LineupError> {
    match state.team(team) {
        Some(sheet) if !sheet.players.is_empty() && !sheet.players.contains(player) => {
            Err(LineupError::NotInSide {
                player: player.clone(),
                team: team.clone(),
            })
        }
        _ => Ok(()),
    }
}

fn ensure_fresh_bowler(state: &Match, bowler: &PlayerId) -> Result<(), LineupError> {
    let innings = state.current_innings();
    ensure_in_side(state, &innings.bowling_team_id, bowler)?;
    if previous_over_bowler(innings) == Some(bowler) {
        return Err(LineupError::ConsecutiveOvers(bowler.clone()));
    }
    Ok(())
}

/// Opening selection, or the fill-in after a slot was left vacant.
///
/// Batsmen already at the crease must appear again (either end); new names
/// come in as "not out". The first lineup of the match makes it live.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineupAction {
    pub striker_id: PlayerId,
    pub non_striker_id: PlayerId,
    pub bowler_id: PlayerId,
}

impl LineupAction {
    pub fn new(
        striker_id: impl Into<PlayerId>,
        non_striker_id: impl Into<PlayerId>,
        bowler_id: impl Into<PlayerId>,
    ) -> Self {
        Self {
            striker_id: striker_id.into(),
            non_striker_id: non_striker_id.into(),
            bowler_id: bowler_id.into(),
        }
    }

    fn batsmen(&self) -> [&PlayerId; 2] {
        [&self.striker_id, &self.non_striker_id]
    }
}

impl ActionTransition for LineupAction {
    type Error = LineupError;

    fn pre_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        if self.striker_id == self.non_striker_id {
            return Err(LineupError::SamePlayer(self.striker_id.clone()));
        }

        let innings = state.current_innings();
        for occupant in [&state.striker_id, &state.non_striker_id].into_iter().flatten() {
            if !self.batsmen().contains(&occupant) {
                return Err(LineupError::DisplacesBatsman(occupant.clone()));
            }
        }
        for batsman in self.batsmen() {
            ensure_in_side(state, &innings.batting_team_id, batsman)?;
            let new_arrival = state.slot_of(batsman).is_none();
            if new_arrival && !can_come_in(innings, batsman) {
                return Err(LineupError::BatsmanUnavailable(batsman.clone()));
            }
        }

        if state.current_bowler_id.as_ref() != Some(&self.bowler_id) {
            ensure_fresh_bowler(state, &self.bowler_id)?;
        }
        Ok(())
    }

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        let arrivals: Vec<PlayerId> = self
            .batsmen()
            .into_iter()
            .filter(|batsman| state.slot_of(batsman).is_none())
            .cloned()
            .collect();

        let mut recorder = WicketRecorder::new(state.current_innings_mut());
        for batsman in &arrivals {
            recorder.bring_in(batsman);
        }

        state.striker_id = Some(self.striker_id.clone());
        state.non_striker_id = Some(self.non_striker_id.clone());
        state.current_bowler_id = Some(self.bowler_id.clone());
        if state.status == MatchStatus::Upcoming {
            state.status = MatchStatus::Live;
        }
        Ok(Signals::empty())
    }
}

/// Next bowler, normally chosen after an over completes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BowlerChangeAction {
    pub bowler_id: PlayerId,
}

impl BowlerChangeAction {
    pub fn new(bowler_id: impl Into<PlayerId>) -> Self {
        Self {
            bowler_id: bowler_id.into(),
        }
    }
}

impl ActionTransition for BowlerChangeAction {
    type Error = LineupError;

    fn pre_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        ensure_fresh_bowler(state, &self.bowler_id)
    }

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        state.current_bowler_id = Some(self.bowler_id.clone());
        Ok(Signals::empty())
    }
}

/// Manual exchange of striker and non-striker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SwapStrikeAction;

impl ActionTransition for SwapStrikeAction {
    type Error = LineupError;

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        state.swap_strike();
        Ok(Signals::empty())
    }
}
