//! Final result calculation.

use crate::config::ScoringConfig;
use crate::state::{Margin, Match, MatchOutcome, MatchStatus};

/// Decides the winner (or tie, or abandonment) and completes the match.
pub struct ResultDeterminer;

impl ResultDeterminer {
    /// Outcome implied by the current scores. Does not touch the match.
    pub fn outcome(state: &Match, config: &ScoringConfig) -> MatchOutcome {
        let Some(second) = state.innings2.as_deref() else {
            return MatchOutcome::Abandoned;
        };
        let first = &state.innings1;

        if second.score > first.score {
            let squad = state.squad_size(&second.batting_team_id, config);
            let wickets_left = squad.saturating_sub(1).saturating_sub(second.wickets);
            MatchOutcome::Won {
                winner: second.batting_team_id.clone(),
                margin: Margin::Wickets(wickets_left),
            }
        } else if second.score < first.score {
            MatchOutcome::Won {
                winner: first.batting_team_id.clone(),
                margin: Margin::Runs(first.score - second.score),
            }
        } else {
            MatchOutcome::Tied
        }
    }

    /// Records the outcome and result line and marks the match completed.
    /// Running it again on a completed match changes nothing.
    pub fn determine(state: &mut Match, config: &ScoringConfig) -> MatchOutcome {
        if state.is_completed()
            && let Some(outcome) = &state.outcome
        {
            return outcome.clone();
        }

        let outcome = Self::outcome(state, config);
        state.result = Some(Self::describe(state, &outcome));
        state.outcome = Some(outcome.clone());
        state.status = MatchStatus::Completed;
        outcome
    }

    /// Result line shown to viewers, e.g. "Bravo won by 6 wickets".
    pub fn describe(state: &Match, outcome: &MatchOutcome) -> String {
        match outcome {
            MatchOutcome::Won { winner, margin } => {
                let (count, unit) = match margin {
                    Margin::Runs(runs) => (*runs, "run"),
                    Margin::Wickets(wickets) => (*wickets, "wicket"),
                };
                let plural = if count == 1 { "" } else { "s" };
                format!("{} won by {count} {unit}{plural}", state.team_name(winner))
            }
            MatchOutcome::Tied => "Match tied".to_string(),
            MatchOutcome::Abandoned => "Match abandoned".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rules::InningsTransitionManager;
    use crate::state::{MatchSetup, TeamId, TeamSheet, TossDecision};

    fn chase(first: u32, second: u32, wickets: u32) -> Match {
        let mut state = Match::new(MatchSetup {
            id: "m1".into(),
            team_a: TeamSheet::new("a", "Alpha"),
            team_b: TeamSheet::new("b", "Bravo"),
            overs: 20,
            toss_winner_id: TeamId::from("a"),
            decision: TossDecision::Bat,
        })
        .unwrap();
        Arc::make_mut(&mut state.innings1).score = first;
        InningsTransitionManager::begin_second_innings(&mut state);
        let innings = state.current_innings_mut();
        innings.score = second;
        innings.wickets = wickets;
        state
    }

    #[test]
    fn chasing_side_wins_by_wickets_in_hand() {
        let mut state = chase(150, 151, 4);
        let outcome = ResultDeterminer::determine(&mut state, &ScoringConfig::default());
        assert_eq!(
            outcome,
            MatchOutcome::Won {
                winner: TeamId::from("b"),
                margin: Margin::Wickets(6),
            }
        );
        assert_eq!(state.result.as_deref(), Some("Bravo won by 6 wickets"));
        assert_eq!(state.status, MatchStatus::Completed);
    }

    #[test]
    fn defending_side_wins_by_runs() {
        let mut state = chase(150, 149, 10);
        ResultDeterminer::determine(&mut state, &ScoringConfig::default());
        assert_eq!(state.result.as_deref(), Some("Alpha won by 1 run"));
    }

    #[test]
    fn level_scores_tie() {
        let mut state = chase(120, 120, 7);
        let outcome = ResultDeterminer::determine(&mut state, &ScoringConfig::default());
        assert_eq!(outcome, MatchOutcome::Tied);
        assert_eq!(state.result.as_deref(), Some("Match tied"));
    }

    #[test]
    fn no_second_innings_is_abandoned() {
        let mut state = chase(0, 0, 0);
        state.innings2 = None;
        let outcome = ResultDeterminer::determine(&mut state, &ScoringConfig::default());
        assert_eq!(outcome, MatchOutcome::Abandoned);
        assert_eq!(state.result.as_deref(), Some("Match abandoned"));
    }

    #[test]
    fn determining_twice_is_idempotent() {
        let config = ScoringConfig::default();
        let mut state = chase(150, 151, 4);
        ResultDeterminer::determine(&mut state, &config);
        let once = state.clone();
        ResultDeterminer::determine(&mut state, &config);
        assert_eq!(state, once);
    }
}
