use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::error::{ErrorSeverity, ScoringError};
use crate::rules::{
    InvariantViolation, OverTracker, WicketRecorder, can_come_in, check_innings,
};
use crate::state::{
    Ball, BallExtra, CreaseSlot, DismissalKind, ExtraKind, Match, PlayerId, Timestamp, Wicket,
};

/// Role that must be filled before a ball can be bowled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vacancy {
    Striker,
    NonStriker,
    Bowler,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryError {
    #[error("no {0} selected")]
    IncompleteLineup(Vacancy),

    #[error("a wide cannot carry runs off the bat (got {runs})")]
    RunsOffBatOnWide { runs: u32 },

    #[error("retired out is recorded as a retirement, not on a delivery")]
    RetirementOnDelivery,

    #[error("{0} dismissal needs a fielder")]
    MissingFielder(DismissalKind),

    #[error("{0} is not at the crease")]
    UnknownBatsman(PlayerId),

    #[error("replacement batsman given without a dismissal")]
    ReplacementWithoutWicket,

    #[error("{0} cannot come in to bat")]
    ReplacementUnavailable(PlayerId),

    #[error("{runs} runs on the ball would overflow the score of {score}")]
    ScoreOverflow { score: u32, runs: u64 },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ScoringError for DeliveryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IncompleteLineup(_)
            | Self::RunsOffBatOnWide { .. }
            | Self::RetirementOnDelivery
            | Self::MissingFielder(_)
            | Self::ReplacementWithoutWicket
            | Self::ScoreOverflow { .. } => ErrorSeverity::Validation,
            Self::UnknownBatsman(_) | Self::ReplacementUnavailable(_) | Self::Invariant(_) => {
                ErrorSeverity::Consistency
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteLineup(_) => "DELIVERY_INCOMPLETE_LINEUP",
            Self::RunsOffBatOnWide { .. } => "DELIVERY_RUNS_OFF_BAT_ON_WIDE",
            Self::RetirementOnDelivery => "DELIVERY_RETIREMENT",
            Self::MissingFielder(_) => "DELIVERY_MISSING_FIELDER",
            Self::UnknownBatsman(_) => "DELIVERY_UNKNOWN_BATSMAN",
            Self::ReplacementWithoutWicket => "DELIVERY_REPLACEMENT_WITHOUT_WICKET",
            Self::ReplacementUnavailable(_) => "DELIVERY_REPLACEMENT_UNAVAILABLE",
            Self::ScoreOverflow { .. } => "DELIVERY_SCORE_OVERFLOW",
            Self::Invariant(_) => "DELIVERY_INVARIANT",
        }
    }
}

/// Extra called on a delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")
)]
pub enum DeliveryExtra {
    /// One penalty run plus any runs taken off the wide.
    Wide { extra_runs: u32 },
    NoBall,
    Bye,
    LegBye,
}

impl DeliveryExtra {
    pub const fn kind(self) -> ExtraKind {
        match self {
            DeliveryExtra::Wide { .. } => ExtraKind::Wide,
            DeliveryExtra::NoBall => ExtraKind::NoBall,
            DeliveryExtra::Bye => ExtraKind::Bye,
            DeliveryExtra::LegBye => ExtraKind::LegBye,
        }
    }
}

/// Dismissal confirmed on the delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DismissalInput {
    pub kind: DismissalKind,
    pub player_out_id: PlayerId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fielder_id: Option<PlayerId>,
}

/// One ball as reported by the operator.
///
/// `runs` are the runs taken on the ball: off the bat for a fair ball or a
/// no-ball, run as byes or leg-byes otherwise. Runs taken off a wide go in
/// [`DeliveryExtra::Wide`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DeliveryAction {
    pub runs: u32,
    pub extra: Option<DeliveryExtra>,
    pub wicket: Option<DismissalInput>,
    pub new_batsman_id: Option<PlayerId>,
    pub timestamp: Timestamp,
}

impl DeliveryAction {
    pub fn runs(runs: u32) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn wide(extra_runs: u32) -> Self {
        Self::default().with_extra(DeliveryExtra::Wide { extra_runs })
    }

    pub fn with_extra(mut self, extra: DeliveryExtra) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn with_wicket(mut self, wicket: DismissalInput) -> Self {
        self.wicket = Some(wicket);
        self
    }

    pub fn with_new_batsman(mut self, player: impl Into<PlayerId>) -> Self {
        self.new_batsman_id = Some(player.into());
        self
    }

    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Splits the runs into (batsman-credited, extra record).
    fn split_runs(&self) -> (u32, Option<BallExtra>) {
        let extra = |kind, runs| Some(BallExtra { kind, runs });
        match self.extra {
            None => (self.runs, None),
            Some(DeliveryExtra::Wide { extra_runs }) => {
                (0, extra(ExtraKind::Wide, extra_runs.saturating_add(1)))
            }
            Some(DeliveryExtra::NoBall) => (self.runs, extra(ExtraKind::NoBall, 1)),
            Some(DeliveryExtra::Bye) => (0, extra(ExtraKind::Bye, self.runs)),
            Some(DeliveryExtra::LegBye) => (0, extra(ExtraKind::LegBye, self.runs)),
        }
    }

    /// Every run the ball adds to the score.
    fn score_delta(&self) -> u64 {
        match self.extra {
            Some(DeliveryExtra::Wide { extra_runs }) => u64::from(extra_runs) + 1,
            Some(DeliveryExtra::NoBall) => u64::from(self.runs) + 1,
            None | Some(DeliveryExtra::Bye) | Some(DeliveryExtra::LegBye) => u64::from(self.runs),
        }
    }

    /// Running runs on a legal ball swap the batsmen when odd.
    fn rotates_strike(&self) -> bool {
        let running = matches!(
            self.extra,
            None | Some(DeliveryExtra::Bye) | Some(DeliveryExtra::LegBye)
        );
        running && self.runs % 2 == 1
    }
}

impl ActionTransition for DeliveryAction {
    type Error = DeliveryError;

    fn pre_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        if let Some(slot) = state.vacant_slot() {
            return Err(DeliveryError::IncompleteLineup(slot.into()));
        }
        if state.current_bowler_id.is_none() {
            return Err(DeliveryError::IncompleteLineup(Vacancy::Bowler));
        }

        if let Some(DeliveryExtra::Wide { .. }) = self.extra
            && self.runs > 0
        {
            return Err(DeliveryError::RunsOffBatOnWide { runs: self.runs });
        }

        let score = state.current_innings().score;
        let runs = self.score_delta();
        if u64::from(score) + runs >= u64::from(u32::MAX) {
            return Err(DeliveryError::ScoreOverflow { score, runs });
        }

        let Some(wicket) = &self.wicket else {
            return match &self.new_batsman_id {
                Some(_) => Err(DeliveryError::ReplacementWithoutWicket),
                None => Ok(()),
            };
        };

        if wicket.kind == DismissalKind::RetiredOut {
            return Err(DeliveryError::RetirementOnDelivery);
        }
        if wicket.kind.requires_fielder() && wicket.fielder_id.is_none() {
            return Err(DeliveryError::MissingFielder(wicket.kind));
        }
        if state.slot_of(&wicket.player_out_id).is_none() {
            return Err(DeliveryError::UnknownBatsman(wicket.player_out_id.clone()));
        }

        if let Some(incoming) = &self.new_batsman_id {
            if state.slot_of(incoming).is_some() || !can_come_in(state.current_innings(), incoming) {
                return Err(DeliveryError::ReplacementUnavailable(incoming.clone()));
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        let (Some(striker), Some(bowler)) =
            (state.striker_id.clone(), state.current_bowler_id.clone())
        else {
            return Err(DeliveryError::IncompleteLineup(Vacancy::Striker));
        };
        let (batsman_runs, extra) = self.split_runs();
        let extra_kind = self.extra.map(DeliveryExtra::kind);
        let mut signals = Signals::empty();

        // Slot of the dismissed batsman, resolved before any swap.
        let dismissed_slot = self
            .wicket
            .as_ref()
            .and_then(|wicket| state.slot_of(&wicket.player_out_id));

        let innings = state.current_innings_mut();
        let over_number = innings.overs.completed;
        let ball_number = OverTracker::new(innings).next_ball_number();
        let total_runs = batsman_runs + extra.map_or(0, |extra| extra.runs);

        innings.score += total_runs;
        if let Some(extra) = extra {
            let extras = &mut innings.extras;
            match extra.kind {
                ExtraKind::Wide => extras.wides += extra.runs,
                ExtraKind::NoBall => extras.no_balls += extra.runs,
                ExtraKind::Bye => extras.byes += extra.runs,
                ExtraKind::LegBye => extras.leg_byes += extra.runs,
            }
            extras.total += extra.runs;
        }

        let card = innings.batsman_entry(&striker);
        match extra_kind {
            None | Some(ExtraKind::NoBall) => {
                card.runs += batsman_runs;
                match batsman_runs {
                    4 => card.fours += 1,
                    6 => card.sixes += 1,
                    _ => {}
                }
            }
            Some(ExtraKind::Wide | ExtraKind::Bye | ExtraKind::LegBye) => {}
        }
        if extra_kind.is_none_or(ExtraKind::is_legal) {
            card.balls += 1;
        }

        let ball_wicket = self.wicket.as_ref().map(|input| Wicket {
            kind: input.kind,
            player_out_id: input.player_out_id.clone(),
            bowler_id: Some(bowler.clone()),
            fielder_id: input.fielder_id.clone(),
            over: over_number,
            ball: ball_number,
            total_score: innings.score,
        });

        let ball = Ball {
            ball_number,
            bowler_id: bowler.clone(),
            batsman_id: striker,
            runs: batsman_runs,
            wicket: ball_wicket.clone(),
            extra,
            timestamp: self.timestamp,
        };
        innings.bowler_entry(&bowler).runs += ball.bowler_runs();
        let progress = OverTracker::new(innings).record(ball);

        if let Some(wicket) = ball_wicket {
            let mut recorder = WicketRecorder::new(innings);
            recorder.dismiss(wicket);
            if let Some(incoming) = &self.new_batsman_id {
                recorder.bring_in(incoming);
            }
            signals |= Signals::WICKET_FELL;
        }

        if let Some(slot) = dismissed_slot {
            state.set_crease(slot, self.new_batsman_id.clone());
        }
        if self.rotates_strike() {
            state.swap_strike();
        }
        if progress.completed {
            state.swap_strike();
            state.current_bowler_id = None;
            signals |= Signals::OVER_COMPLETE;
        }
        if state.vacant_slot().is_some() {
            signals |= Signals::CREASE_VACANT;
        }

        Ok(signals)
    }

    fn post_validate(&self, state: &Match, _config: &ScoringConfig) -> Result<(), Self::Error> {
        check_innings(state.current_innings())?;
        Ok(())
    }
}

impl From<CreaseSlot> for Vacancy {
    fn from(slot: CreaseSlot) -> Self {
        match slot {
            CreaseSlot::Striker => Vacancy::Striker,
            CreaseSlot::NonStriker => Vacancy::NonStriker,
        }
    }
}
