/// Scoring configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// Squad size assumed for a side whose team sheet lists no players.
    ///
    /// Drives the all-out threshold (`squad - 1` wickets) and the
    /// "won by N wickets" margin.
    pub default_squad_size: u32,
}

impl ScoringConfig {
    // ===== compile-time constants =====
    /// Legal deliveries in one over.
    pub const BALLS_PER_OVER: u8 = 6;
    /// Side size for a standard limited-overs match.
    pub const DEFAULT_SQUAD_SIZE: u32 = 11;

    pub fn new() -> Self {
        Self {
            default_squad_size: Self::DEFAULT_SQUAD_SIZE,
        }
    }

    pub fn with_default_squad_size(default_squad_size: u32) -> Self {
        Self {
            default_squad_size: default_squad_size.max(2),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}
