//! Structural checks every accepted snapshot must pass.
//!
//! Actions run these from `post_validate`; a failure means the transition
//! logic itself is wrong, so the working snapshot is discarded.

use crate::state::{Innings, OversCount};

/// An innings whose derived counters disagree with its own records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("score {score} does not match recorded runs {recorded}")]
    ScoreMismatch { score: u32, recorded: u32 },

    #[error("{wickets} wickets but {recorded} fall-of-wicket entries")]
    FallOfWicketsMismatch { wickets: u32, recorded: u32 },

    #[error("{wickets} wickets but {dismissed} dismissed batsmen")]
    DismissedMismatch { wickets: u32, dismissed: u32 },

    #[error("overs {overs} do not match {recorded} recorded legal balls")]
    OversMismatch { overs: OversCount, recorded: u32 },
}

/// Verifies the counters of `innings` against its ball and wicket records.
pub fn check_innings(innings: &Innings) -> Result<(), InvariantViolation> {
    let recorded = innings.ball_runs() + innings.extras.penalties;
    if innings.score != recorded {
        return Err(InvariantViolation::ScoreMismatch {
            score: innings.score,
            recorded,
        });
    }

    let fall_of_wickets = innings.fall_of_wickets.len() as u32;
    if innings.wickets != fall_of_wickets {
        return Err(InvariantViolation::FallOfWicketsMismatch {
            wickets: innings.wickets,
            recorded: fall_of_wickets,
        });
    }

    let dismissed = innings.dismissed_count();
    if innings.wickets != dismissed {
        return Err(InvariantViolation::DismissedMismatch {
            wickets: innings.wickets,
            dismissed,
        });
    }

    let legal_balls = innings.recorded_legal_balls();
    if innings.overs.legal_balls() != legal_balls {
        return Err(InvariantViolation::OversMismatch {
            overs: innings.overs,
            recorded: legal_balls,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayerId, TeamId};

    fn innings() -> Innings {
        Innings::new(
            TeamId::from("a"),
            TeamId::from("b"),
            ["p1", "p2"].into_iter().map(PlayerId::from),
        )
    }

    #[test]
    fn fresh_innings_is_consistent() {
        assert_eq!(check_innings(&innings()), Ok(()));
    }

    #[test]
    fn penalties_count_towards_score() {
        let mut innings = innings();
        innings.score = 5;
        innings.extras.penalties = 5;
        innings.extras.total = 5;
        assert_eq!(check_innings(&innings), Ok(()));
    }

    #[test]
    fn detects_drifted_counters() {
        let mut drifted = innings();
        drifted.score = 4;
        assert!(matches!(
            check_innings(&drifted),
            Err(InvariantViolation::ScoreMismatch { score: 4, recorded: 0 })
        ));

        let mut drifted = innings();
        drifted.wickets = 1;
        assert!(matches!(
            check_innings(&drifted),
            Err(InvariantViolation::FallOfWicketsMismatch { .. })
        ));

        let mut drifted = innings();
        drifted.overs = OversCount::new(0, 3);
        assert!(matches!(
            check_innings(&drifted),
            Err(InvariantViolation::OversMismatch { recorded: 0, .. })
        ));
    }
}
