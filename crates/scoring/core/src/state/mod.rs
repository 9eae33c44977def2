//! Authoritative match state representation.
//!
//! A [`Match`] is an immutable snapshot from the point of view of callers:
//! the engine clones it, mutates the clone, and hands back a new value.
//! Innings sit behind [`Arc`] so a clone shares every innings the transition
//! does not touch.
mod common;
mod innings;
mod over;
mod wicket;

use std::sync::Arc;

pub use common::{PlayerId, TeamId, Timestamp};
pub use innings::{BatsmanScore, BattingStatus, BowlerScore, Extras, Innings};
pub use over::{Ball, BallExtra, ExtraKind, Over, OversCount};
pub use wicket::{DismissalKind, Wicket};

use crate::config::ScoringConfig;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

/// What the toss winner chose to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TossDecision {
    Bat,
    Bowl,
}

/// Which of the two innings is in progress. Encoded as `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum InningsNumber {
    #[default]
    First,
    Second,
}

impl From<InningsNumber> for u8 {
    fn from(value: InningsNumber) -> Self {
        match value {
            InningsNumber::First => 1,
            InningsNumber::Second => 2,
        }
    }
}

impl TryFrom<u8> for InningsNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InningsNumber::First),
            2 => Ok(InningsNumber::Second),
            other => Err(format!("innings number must be 1 or 2, got {other}")),
        }
    }
}

/// One of the two crease positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CreaseSlot {
    Striker,
    NonStriker,
}

/// A team and the players it fields in this match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TeamSheet {
    pub id: TeamId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<PlayerId>,
}

impl TeamSheet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let short_name = name.chars().take(3).collect::<String>().to_uppercase();
        Self {
            id: TeamId::new(id),
            name,
            short_name,
            players: Vec::new(),
        }
    }

    pub fn with_players<I, P>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }
}

/// Margin of a decided match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Margin {
    Runs(u32),
    Wickets(u32),
}

/// Structured final outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum MatchOutcome {
    Won { winner: TeamId, margin: Margin },
    Tied,
    Abandoned,
}

/// Inputs from the external setup step (team and toss selection).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchSetup {
    pub id: String,
    pub team_a: TeamSheet,
    pub team_b: TeamSheet,
    pub overs: u32,
    pub toss_winner_id: TeamId,
    pub decision: TossDecision,
}

/// Reasons a [`MatchSetup`] cannot produce a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a match needs two different teams (got {0} twice)")]
    SameTeams(TeamId),

    #[error("toss winner {0} is not playing in this match")]
    UnknownTossWinner(TeamId),

    #[error("overs limit must be at least 1")]
    ZeroOvers,
}

/// Canonical snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Match {
    pub id: String,
    pub team_a: TeamSheet,
    pub team_b: TeamSheet,
    /// Overs limit per innings.
    pub overs: u32,
    pub toss_winner_id: TeamId,
    pub decision: TossDecision,
    pub status: MatchStatus,
    pub innings1: Arc<Innings>,
    pub innings2: Option<Arc<Innings>>,
    pub current_innings: InningsNumber,
    pub striker_id: Option<PlayerId>,
    pub non_striker_id: Option<PlayerId>,
    pub current_bowler_id: Option<PlayerId>,
    /// Set once, on entering innings 2: `innings1.score + 1`.
    pub target: Option<u32>,
    pub outcome: Option<MatchOutcome>,
    /// Human-readable result line.
    pub result: Option<String>,
}

impl Match {
    /// Builds an upcoming match. The batting side is derived from the toss.
    pub fn new(setup: MatchSetup) -> Result<Self, SetupError> {
        if setup.team_a.id == setup.team_b.id {
            return Err(SetupError::SameTeams(setup.team_a.id));
        }
        if setup.overs == 0 {
            return Err(SetupError::ZeroOvers);
        }

        if setup.toss_winner_id != setup.team_a.id && setup.toss_winner_id != setup.team_b.id {
            return Err(SetupError::UnknownTossWinner(setup.toss_winner_id));
        }

        let a_bats = match (setup.toss_winner_id == setup.team_a.id, setup.decision) {
            (true, TossDecision::Bat) | (false, TossDecision::Bowl) => true,
            (true, TossDecision::Bowl) | (false, TossDecision::Bat) => false,
        };
        let (batting, bowling) = if a_bats {
            (&setup.team_a, &setup.team_b)
        } else {
            (&setup.team_b, &setup.team_a)
        };
        let innings1 = Innings::new(
            batting.id.clone(),
            bowling.id.clone(),
            batting.players.iter().cloned(),
        );

        Ok(Self {
            id: setup.id,
            overs: setup.overs,
            toss_winner_id: setup.toss_winner_id,
            decision: setup.decision,
            status: MatchStatus::Upcoming,
            innings1: Arc::new(innings1),
            innings2: None,
            current_innings: InningsNumber::First,
            striker_id: None,
            non_striker_id: None,
            current_bowler_id: None,
            target: None,
            outcome: None,
            result: None,
            team_a: setup.team_a,
            team_b: setup.team_b,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Innings currently being scored.
    pub fn current_innings(&self) -> &Innings {
        match (self.current_innings, &self.innings2) {
            (InningsNumber::Second, Some(innings)) => innings,
            _ => &self.innings1,
        }
    }

    /// Mutable access to the current innings, copying it first if another
    /// snapshot still shares it.
    pub fn current_innings_mut(&mut self) -> &mut Innings {
        match (self.current_innings, &mut self.innings2) {
            (InningsNumber::Second, Some(innings)) => Arc::make_mut(innings),
            _ => Arc::make_mut(&mut self.innings1),
        }
    }

    pub fn team(&self, id: &TeamId) -> Option<&TeamSheet> {
        [&self.team_a, &self.team_b]
            .into_iter()
            .find(|team| &team.id == id)
    }

    pub fn team_name(&self, id: &TeamId) -> String {
        self.team(id)
            .map(|team| team.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Players in the side, or the configured default when the sheet is
    /// empty.
    pub fn squad_size(&self, id: &TeamId, config: &ScoringConfig) -> u32 {
        match self.team(id) {
            Some(team) if !team.players.is_empty() => team.players.len() as u32,
            _ => config.default_squad_size,
        }
    }

    /// Wickets that end the current innings (`squad - 1`).
    pub fn wicket_limit(&self, config: &ScoringConfig) -> u32 {
        let batting = &self.current_innings().batting_team_id;
        self.squad_size(batting, config).saturating_sub(1)
    }

    pub fn crease(&self, slot: CreaseSlot) -> Option<&PlayerId> {
        match slot {
            CreaseSlot::Striker => self.striker_id.as_ref(),
            CreaseSlot::NonStriker => self.non_striker_id.as_ref(),
        }
    }

    pub fn set_crease(&mut self, slot: CreaseSlot, player: Option<PlayerId>) {
        match slot {
            CreaseSlot::Striker => self.striker_id = player,
            CreaseSlot::NonStriker => self.non_striker_id = player,
        }
    }

    /// Which crease slot `player` occupies, if any.
    pub fn slot_of(&self, player: &PlayerId) -> Option<CreaseSlot> {
        if self.striker_id.as_ref() == Some(player) {
            Some(CreaseSlot::Striker)
        } else if self.non_striker_id.as_ref() == Some(player) {
            Some(CreaseSlot::NonStriker)
        } else {
            None
        }
    }

    /// First unset crease slot, if any.
    pub fn vacant_slot(&self) -> Option<CreaseSlot> {
        if self.striker_id.is_none() {
            Some(CreaseSlot::Striker)
        } else if self.non_striker_id.is_none() {
            Some(CreaseSlot::NonStriker)
        } else {
            None
        }
    }

    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker_id, &mut self.non_striker_id);
    }

    /// Runs still needed in a chase.
    pub fn runs_needed(&self) -> Option<u32> {
        let target = self.target?;
        let innings = self.innings2.as_ref()?;
        Some(target.saturating_sub(innings.score))
    }

    /// Legal balls left in the current innings.
    pub fn balls_remaining(&self) -> u32 {
        let total = self.overs * u32::from(ScoringConfig::BALLS_PER_OVER);
        total.saturating_sub(self.current_innings().overs.legal_balls())
    }

    /// Runs per over needed to reach the target, `None` outside a live chase.
    pub fn required_run_rate(&self) -> Option<f64> {
        if self.current_innings != InningsNumber::Second || self.is_completed() {
            return None;
        }
        let needed = self.runs_needed()?;
        let balls = self.balls_remaining();
        if balls == 0 {
            return None;
        }
        Some(f64::from(needed) * 6.0 / f64::from(balls))
    }
}
