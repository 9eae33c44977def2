use crate::state::PlayerId;

/// How a batsman was dismissed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    /// Stand-alone retirement that counts as a wicket. Never attributed to a
    /// bowler and never recorded on a delivery.
    RetiredOut,
}

impl DismissalKind {
    /// Whether the bowler's wicket tally is credited.
    pub const fn credits_bowler(self) -> bool {
        match self {
            DismissalKind::Bowled
            | DismissalKind::Caught
            | DismissalKind::Lbw
            | DismissalKind::Stumped
            | DismissalKind::HitWicket => true,
            DismissalKind::RunOut | DismissalKind::RetiredOut => false,
        }
    }

    /// Whether a fielder must be named.
    pub const fn requires_fielder(self) -> bool {
        match self {
            DismissalKind::Caught | DismissalKind::Stumped | DismissalKind::RunOut => true,
            DismissalKind::Bowled
            | DismissalKind::Lbw
            | DismissalKind::HitWicket
            | DismissalKind::RetiredOut => false,
        }
    }
}

/// A dismissal entry, shared between the batsman card, the ball record and
/// the fall-of-wickets log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Wicket {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: DismissalKind,
    pub player_out_id: PlayerId,
    /// Bowler of the delivery; `None` for retirements.
    pub bowler_id: Option<PlayerId>,
    pub fielder_id: Option<PlayerId>,
    /// 0-based over number at the dismissal.
    pub over: u32,
    /// Ball within the over at the dismissal.
    pub ball: u8,
    /// Team score at the dismissal.
    pub total_score: u32,
}
