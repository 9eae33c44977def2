//! Operator events the engine accepts, one transition each.
//!
//! Every variant carries a concrete type implementing [`ActionTransition`];
//! the engine dispatches on the enum and drives the three phases.

mod abandon;
mod delivery;
mod lineup;
mod penalty;
mod retirement;
mod transition;

pub use abandon::AbandonAction;
pub use delivery::{DeliveryAction, DeliveryError, DeliveryExtra, DismissalInput, Vacancy};
pub use lineup::{BowlerChangeAction, LineupAction, LineupError, SwapStrikeAction};
pub use penalty::{PenaltyAction, PenaltyError};
pub use retirement::{RetirementAction, RetirementError, RetirementKind};
pub use transition::ActionTransition;

/// A single scoring event.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Action {
    Delivery(DeliveryAction),
    Retirement(RetirementAction),
    Penalty(PenaltyAction),
    Lineup(LineupAction),
    BowlerChange(BowlerChangeAction),
    SwapStrike,
    Abandon,
}

impl Action {
    /// Stable snake_case name, used in logs and events.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether the action can only be applied to a live match. Lineup may
    /// start an upcoming match and abandon may end one.
    pub fn requires_live(&self) -> bool {
        !matches!(self, Action::Lineup(_) | Action::Abandon)
    }

    /// Actions after which the innings or match may have ended.
    pub fn may_end_innings(&self) -> bool {
        matches!(
            self,
            Action::Delivery(_) | Action::Retirement(_) | Action::Penalty(_)
        )
    }
}

impl From<DeliveryAction> for Action {
    fn from(action: DeliveryAction) -> Self {
        Action::Delivery(action)
    }
}

impl From<RetirementAction> for Action {
    fn from(action: RetirementAction) -> Self {
        Action::Retirement(action)
    }
}

impl From<PenaltyAction> for Action {
    fn from(action: PenaltyAction) -> Self {
        Action::Penalty(action)
    }
}

impl From<LineupAction> for Action {
    fn from(action: LineupAction) -> Self {
        Action::Lineup(action)
    }
}

impl From<BowlerChangeAction> for Action {
    fn from(action: BowlerChangeAction) -> Self {
        Action::BowlerChange(action)
    }
}
