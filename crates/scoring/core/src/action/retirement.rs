use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::engine::Signals;
use crate::error::{ErrorSeverity, ScoringError};
use crate::rules::{
    InvariantViolation, WicketRecorder, can_come_in, check_innings, has_eligible_replacement,
};
use crate::state::{DismissalKind, Match, PlayerId, Wicket};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetirementError {
    #[error("{0} is not at the crease")]
    NotAtCrease(PlayerId),

    #[error("a replacement batsman must be selected")]
    ReplacementRequired,

    #[error("{0} cannot come in to bat")]
    ReplacementUnavailable(PlayerId),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ScoringError for RetirementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ReplacementRequired => ErrorSeverity::Validation,
            Self::NotAtCrease(_) | Self::ReplacementUnavailable(_) | Self::Invariant(_) => {
                ErrorSeverity::Consistency
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAtCrease(_) => "RETIREMENT_NOT_AT_CREASE",
            Self::ReplacementRequired => "RETIREMENT_REPLACEMENT_REQUIRED",
            Self::ReplacementUnavailable(_) => "RETIREMENT_REPLACEMENT_UNAVAILABLE",
            Self::Invariant(_) => "RETIREMENT_INVARIANT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RetirementKind {
    /// Leaves the crease without losing a wicket; may bat again later.
    RetiredHurt,
    /// Counts as a wicket and is final.
    RetiredOut,
}

/// A batsman leaving the crease between deliveries. Consumes no ball.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RetirementAction {
    pub player_out_id: PlayerId,
    pub kind: RetirementKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_batsman_id: Option<PlayerId>,
}

impl RetirementAction {
    pub fn new(player_out_id: impl Into<PlayerId>, kind: RetirementKind) -> Self {
        Self {
            player_out_id: player_out_id.into(),
            kind,
            next_batsman_id: None,
        }
    }

    pub fn with_next_batsman(mut self, player: impl Into<PlayerId>) -> Self {
        self.next_batsman_id = Some(player.into());
        self
    }

    /// A replacement can be skipped when the retirement ends the innings or
    /// nobody is left to come in.
    fn replacement_optional(&self, state: &Match, config: &ScoringConfig) -> bool {
        let innings = state.current_innings();
        let wickets_after = innings.wickets + u32::from(self.kind == RetirementKind::RetiredOut);
        wickets_after >= state.wicket_limit(config)
            || !has_eligible_replacement(innings, &self.player_out_id)
    }
}

impl ActionTransition for RetirementAction {
    type Error = RetirementError;

    fn pre_validate(&self, state: &Match, config: &ScoringConfig) -> Result<(), Self::Error> {
        if state.slot_of(&self.player_out_id).is_none() {
            return Err(RetirementError::NotAtCrease(self.player_out_id.clone()));
        }

        match &self.next_batsman_id {
            Some(incoming) => {
                let unavailable = incoming == &self.player_out_id
                    || state.slot_of(incoming).is_some()
                    || !can_come_in(state.current_innings(), incoming);
                if unavailable {
                    return Err(RetirementError::ReplacementUnavailable(incoming.clone()));
                }
                Ok(())
            }
            None if self.replacement_optional(state, config) => Ok(()),
            None => Err(RetirementError::ReplacementRequired),
        }
    }

    fn apply(&self, state: &mut Match, _config: &ScoringConfig) -> Result<Signals, Self::Error> {
        let Some(slot) = state.slot_of(&self.player_out_id) else {
            return Err(RetirementError::NotAtCrease(self.player_out_id.clone()));
        };
        let mut signals = Signals::empty();

        let innings = state.current_innings_mut();
        let wicket = Wicket {
            kind: DismissalKind::RetiredOut,
            player_out_id: self.player_out_id.clone(),
            bowler_id: None,
            fielder_id: None,
            over: innings.overs.completed,
            ball: innings.overs.balls,
            total_score: innings.score,
        };

        let mut recorder = WicketRecorder::new(innings);
        match self.kind {
            RetirementKind::RetiredHurt => recorder.retire_hurt(&self.player_out_id),
            RetirementKind::RetiredOut => {
                recorder.dismiss(wicket);
                signals |= Signals::WICKET_FELL;
            }
        }
        if let Some(incoming) = &self.next_batsman_id {
            recorder.bring_in(incoming);
        }

        state.set_crease(slot, self.next_batsman_id.clone());
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
