use crate::state::{Over, OversCount, PlayerId, TeamId, Wicket};

/// Where a batsman stands in the innings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattingStatus {
    #[default]
    #[strum(serialize = "did not bat")]
    #[cfg_attr(feature = "serde", serde(rename = "did not bat"))]
    DidNotBat,
    #[strum(serialize = "not out")]
    #[cfg_attr(feature = "serde", serde(rename = "not out"))]
    NotOut,
    #[cfg_attr(feature = "serde", serde(rename = "out"))]
    Out,
    #[strum(serialize = "retired hurt")]
    #[cfg_attr(feature = "serde", serde(rename = "retired hurt"))]
    RetiredHurt,
}

/// A batsman's card for one innings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BatsmanScore {
    pub player_id: PlayerId,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
    pub status: BattingStatus,
    #[cfg_attr(feature = "serde", serde(rename = "wicketInfo"))]
    pub wicket: Option<Wicket>,
}

impl BatsmanScore {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            is_out: false,
            status: BattingStatus::DidNotBat,
            wicket: None,
        }
    }

    pub fn with_status(mut self, status: BattingStatus) -> Self {
        self.status = status;
        self
    }

    /// Runs per hundred balls faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            f64::from(self.runs) * 100.0 / f64::from(self.balls)
        }
    }

    /// Can walk out as a replacement batsman.
    pub fn is_available(&self) -> bool {
        matches!(
            self.status,
            BattingStatus::DidNotBat | BattingStatus::RetiredHurt
        )
    }
}

/// A bowler's analysis for one innings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BowlerScore {
    pub player_id: PlayerId,
    pub overs: OversCount,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
}

impl BowlerScore {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            overs: OversCount::ZERO,
            maidens: 0,
            runs: 0,
            wickets: 0,
        }
    }

    /// Runs conceded per six legal balls.
    pub fn economy(&self) -> f64 {
        let balls = self.overs.legal_balls();
        if balls == 0 {
            0.0
        } else {
            f64::from(self.runs) * 6.0 / f64::from(balls)
        }
    }
}

/// Extras breakdown for an innings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Extras {
    pub total: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
    pub penalties: u32,
}

/// One side's batting turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Innings {
    pub batting_team_id: TeamId,
    pub bowling_team_id: TeamId,
    pub score: u32,
    pub wickets: u32,
    pub overs: OversCount,
    pub batsmen: Vec<BatsmanScore>,
    pub bowlers: Vec<BowlerScore>,
    pub fall_of_wickets: Vec<Wicket>,
    pub overs_history: Vec<Over>,
    pub extras: Extras,
}

impl Innings {
    /// Fresh innings with every listed batting-side player marked
    /// "did not bat".
    pub fn new(
        batting_team_id: TeamId,
        bowling_team_id: TeamId,
        batting_order: impl IntoIterator<Item = PlayerId>,
    ) -> Self {
        Self {
            batting_team_id,
            bowling_team_id,
            score: 0,
            wickets: 0,
            overs: OversCount::ZERO,
            batsmen: batting_order.into_iter().map(BatsmanScore::new).collect(),
            bowlers: Vec::new(),
            fall_of_wickets: Vec::new(),
            overs_history: Vec::new(),
            extras: Extras::default(),
        }
    }

    pub fn batsman(&self, id: &PlayerId) -> Option<&BatsmanScore> {
        self.batsmen.iter().find(|b| &b.player_id == id)
    }

    pub fn batsman_mut(&mut self, id: &PlayerId) -> Option<&mut BatsmanScore> {
        self.batsmen.iter_mut().find(|b| &b.player_id == id)
    }

    /// Returns the batsman's card, appending a fresh one if the player has no
    /// entry yet.
    pub fn batsman_entry(&mut self, id: &PlayerId) -> &mut BatsmanScore {
        let index = match self.batsmen.iter().position(|b| &b.player_id == id) {
            Some(index) => index,
            None => {
                self.batsmen.push(BatsmanScore::new(id.clone()));
                self.batsmen.len() - 1
            }
        };
        &mut self.batsmen[index]
    }

    pub fn bowler(&self, id: &PlayerId) -> Option<&BowlerScore> {
        self.bowlers.iter().find(|b| &b.player_id == id)
    }

    /// Returns the bowler's analysis, appending a fresh one on first use.
    pub fn bowler_entry(&mut self, id: &PlayerId) -> &mut BowlerScore {
        let index = match self.bowlers.iter().position(|b| &b.player_id == id) {
            Some(index) => index,
            None => {
                self.bowlers.push(BowlerScore::new(id.clone()));
                self.bowlers.len() - 1
            }
        };
        &mut self.bowlers[index]
    }

    /// Players who could come in as the next batsman.
    pub fn available_batsmen(&self) -> impl Iterator<Item = &BatsmanScore> {
        self.batsmen.iter().filter(|b| b.is_available())
    }

    /// Runs per over so far.
    pub fn run_rate(&self) -> f64 {
        let balls = self.overs.legal_balls();
        if balls == 0 {
            0.0
        } else {
            f64::from(self.score) * 6.0 / f64::from(balls)
        }
    }

    /// Sum of runs across every recorded ball. Together with penalties this
    /// always equals `score`.
    pub fn ball_runs(&self) -> u32 {
        self.overs_history
            .iter()
            .flat_map(|over| over.balls.iter())
            .map(|ball| ball.total_runs())
            .sum()
    }

    /// Legal balls recounted from the over history.
    pub fn recorded_legal_balls(&self) -> u32 {
        self.overs_history
            .iter()
            .map(|over| u32::from(over.legal_balls()))
            .sum()
    }

    /// Batsmen whose status records a dismissal (including retired out).
    pub fn dismissed_count(&self) -> u32 {
        self.batsmen.iter().filter(|b| b.is_out).count() as u32
    }
}
