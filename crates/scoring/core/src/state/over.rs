use std::fmt;

use crate::config::ScoringConfig;
use crate::state::{PlayerId, Timestamp, Wicket};

/// Overs bowled, stored as completed overs plus legal balls in the current
/// over.
///
/// On the wire this is the conventional one-decimal encoding: `18.4` means
/// eighteen completed overs and four legal balls of the nineteenth. The
/// fractional digit is always in `0..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OversCount {
    pub completed: u32,
    pub balls: u8,
}

impl OversCount {
    pub const ZERO: Self = Self {
        completed: 0,
        balls: 0,
    };

    pub const fn new(completed: u32, balls: u8) -> Self {
        Self { completed, balls }
    }

    /// Whole overs with no balls in progress.
    pub const fn whole(completed: u32) -> Self {
        Self::new(completed, 0)
    }

    pub fn from_legal_balls(legal_balls: u32) -> Self {
        let per_over = u32::from(ScoringConfig::BALLS_PER_OVER);
        Self::new(legal_balls / per_over, (legal_balls % per_over) as u8)
    }

    pub fn legal_balls(&self) -> u32 {
        self.completed * u32::from(ScoringConfig::BALLS_PER_OVER) + u32::from(self.balls)
    }

    /// Counts one legal ball. Returns true when it completes the over.
    pub fn add_legal_ball(&mut self) -> bool {
        self.balls += 1;
        if self.balls >= ScoringConfig::BALLS_PER_OVER {
            self.completed += 1;
            self.balls = 0;
            true
        } else {
            false
        }
    }

    /// Decimal encoding used by storage and viewers.
    pub fn as_decimal(&self) -> f64 {
        format!("{}.{}", self.completed, self.balls)
            .parse()
            .unwrap_or(f64::from(self.completed))
    }

    /// Parses the decimal encoding. Returns `None` for negative or
    /// non-finite values and for a fractional digit above 5.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let tenths = (value * 10.0).round() as u64;
        let balls = (tenths % 10) as u8;
        if balls >= ScoringConfig::BALLS_PER_OVER {
            return None;
        }
        let completed = u32::try_from(tenths / 10).ok()?;
        Some(Self::new(completed, balls))
    }
}

impl fmt::Display for OversCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OversCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_decimal())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OversCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        OversCount::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid overs encoding: {value}"))
        })
    }
}

/// Kind of extra recorded on a ball.
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
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Byes and leg-byes are legal deliveries; wides and no-balls are not.
    pub const fn is_legal(self) -> bool {
        match self {
            ExtraKind::Wide | ExtraKind::NoBall => false,
            ExtraKind::Bye | ExtraKind::LegBye => true,
        }
    }
}

/// Extra attached to a ball with the runs credited to extras (not to any
/// batsman).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallExtra {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ExtraKind,
    pub runs: u32,
}

/// A single recorded delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ball {
    /// 1-based number among legal deliveries of the over. Wides and no-balls
    /// carry the number of the legal ball still to come.
    pub ball_number: u8,
    pub bowler_id: PlayerId,
    pub batsman_id: PlayerId,
    /// Runs credited to the striker.
    pub runs: u32,
    #[cfg_attr(feature = "serde", serde(rename = "isWicket"))]
    pub wicket: Option<Wicket>,
    pub extra: Option<BallExtra>,
    pub timestamp: Timestamp,
}

impl Ball {
    pub fn is_legal(&self) -> bool {
        self.extra.is_none_or(|extra| extra.kind.is_legal())
    }

    pub fn extra_runs(&self) -> u32 {
        self.extra.map_or(0, |extra| extra.runs)
    }

    /// Batsman-credited plus extra-credited runs.
    pub fn total_runs(&self) -> u32 {
        self.runs + self.extra_runs()
    }

    /// Runs charged against the bowler's analysis.
    pub fn bowler_runs(&self) -> u32 {
        match self.extra {
            None => self.runs,
            Some(BallExtra {
                kind: ExtraKind::Wide | ExtraKind::NoBall,
                runs,
            }) => runs,
            Some(BallExtra {
                kind: ExtraKind::Bye | ExtraKind::LegBye,
                ..
            }) => 0,
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wicket.is_some() {
            return f.write_str("W");
        }
        match self.extra {
            None => write!(f, "{}", self.runs),
            Some(BallExtra { kind, runs }) => {
                let shown = match kind {
                    ExtraKind::Wide => runs.saturating_sub(1),
                    ExtraKind::NoBall => self.runs,
                    ExtraKind::Bye | ExtraKind::LegBye => runs,
                };
                let suffix = match kind {
                    ExtraKind::Wide => "wd",
                    ExtraKind::NoBall => "nb",
                    ExtraKind::Bye => "b",
                    ExtraKind::LegBye => "lb",
                };
                if shown > 0 {
                    write!(f, "{shown}{suffix}")
                } else {
                    f.write_str(suffix)
                }
            }
        }
    }
}

/// One over in the innings history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Over {
    /// 0-based over number.
    pub over_number: u32,
    pub bowler_id: PlayerId,
    pub balls: Vec<Ball>,
    pub runs_scored: u32,
}

impl Over {
    pub fn new(over_number: u32, bowler_id: PlayerId) -> Self {
        Self {
            over_number,
            bowler_id,
            balls: Vec::new(),
            runs_scored: 0,
        }
    }

    pub fn legal_balls(&self) -> u8 {
        self.balls.iter().filter(|ball| ball.is_legal()).count() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.legal_balls() >= ScoringConfig::BALLS_PER_OVER
    }

    /// Runs charged to `bowler` across the balls they delivered in this over.
    pub fn runs_conceded_by(&self, bowler: &PlayerId) -> u32 {
        self.balls
            .iter()
            .filter(|ball| &ball.bowler_id == bowler)
            .map(Ball::bowler_runs)
            .sum()
    }

    /// Space-separated ball symbols, e.g. `1 4 wd W 2lb 0`.
    pub fn summary(&self) -> String {
        self.balls
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
