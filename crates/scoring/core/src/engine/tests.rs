use super::*;
use crate::action::{
    BowlerChangeAction, DeliveryAction, DeliveryError, DeliveryExtra, DismissalInput,
    LineupAction, LineupError, PenaltyAction, RetirementAction, RetirementError, RetirementKind,
    Vacancy,
};
use crate::error::{ErrorSeverity, ScoringError};
use crate::state::{
    BatsmanScore, BattingStatus, BowlerScore, DismissalKind, Innings, MatchSetup, MatchStatus,
    OversCount, PlayerId, TeamId, TeamSheet, TossDecision,
};

fn setup(overs: u32, with_players: bool) -> MatchSetup {
    let sheet = |id: &str, name: &str| {
        let team = TeamSheet::new(id, name);
        if with_players {
            team.with_players((1..=11).map(|n| format!("{id}{n}")))
        } else {
            team
        }
    };
    MatchSetup {
        id: "final".into(),
        team_a: sheet("a", "Alpha"),
        team_b: sheet("b", "Bravo"),
        overs,
        toss_winner_id: TeamId::from("a"),
        decision: TossDecision::Bat,
    }
}

fn dismissal(kind: DismissalKind, out: &str) -> DismissalInput {
    DismissalInput {
        kind,
        player_out_id: PlayerId::from(out),
        fielder_id: None,
    }
}

fn caught(out: &str, fielder: &str) -> DismissalInput {
    DismissalInput {
        fielder_id: Some(PlayerId::from(fielder)),
        ..dismissal(DismissalKind::Caught, out)
    }
}

/// Live match with a1 facing, a2 at the other end and b1 bowling.
struct Harness {
    config: ScoringConfig,
    state: Match,
}

impl Harness {
    fn new(overs: u32, with_players: bool) -> Self {
        let state = Match::new(setup(overs, with_players)).unwrap();
        let mut harness = Self {
            config: ScoringConfig::default(),
            state,
        };
        harness.apply(LineupAction::new("a1", "a2", "b1"));
        harness
    }

    fn execute(&self, action: impl Into<Action>) -> Result<ExecutionOutcome, ExecuteError> {
        ScoringEngine::new(&self.config).execute(&self.state, &action.into())
    }

    fn apply(&mut self, action: impl Into<Action>) -> Signals {
        let outcome = self.execute(action).unwrap();
        self.state = outcome.snapshot;
        outcome.signals
    }

    /// Brings on the other bowler of `pair` once an over is done.
    fn change_bowler_after(&mut self, signals: Signals, pair: [&str; 2]) {
        if !signals.contains(Signals::OVER_COMPLETE) || signals.contains(Signals::INNINGS_COMPLETE)
        {
            return;
        }
        let last = self
            .innings()
            .overs_history
            .last()
            .map(|over| over.bowler_id.clone());
        let next = if last == Some(PlayerId::from(pair[0])) {
            pair[1]
        } else {
            pair[0]
        };
        self.apply(BowlerChangeAction::new(next));
    }

    fn innings(&self) -> &Innings {
        self.state.current_innings()
    }

    fn striker(&self) -> String {
        self.state
            .striker_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn non_striker(&self) -> String {
        self.state
            .non_striker_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn batsman(&self, id: &str) -> &BatsmanScore {
        self.innings().batsman(&PlayerId::from(id)).unwrap()
    }

    fn bowler(&self, id: &str) -> &BowlerScore {
        self.innings().bowler(&PlayerId::from(id)).unwrap()
    }
}

#[test]
fn first_lineup_makes_the_match_live() {
    let harness = Harness::new(20, true);
    assert_eq!(harness.state.status, MatchStatus::Live);
    assert_eq!(harness.batsman("a1").status, BattingStatus::NotOut);
    assert_eq!(harness.batsman("a3").status, BattingStatus::DidNotBat);
}

#[test]
fn deliveries_need_a_live_match() {
    let config = ScoringConfig::default();
    let state = Match::new(setup(20, true)).unwrap();
    let result = ScoringEngine::new(&config).execute(&state, &DeliveryAction::runs(1).into());
    assert!(matches!(result, Err(ExecuteError::NotLive { .. })));
}

#[test]
fn wide_with_two_extra_runs() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::wide(2));

    let innings = h.innings();
    assert_eq!(innings.score, 3);
    assert_eq!(innings.extras.wides, 3);
    assert_eq!(innings.extras.total, 3);
    assert_eq!(innings.overs, OversCount::ZERO);
    assert_eq!(h.batsman("a1").runs, 0);
    assert_eq!(h.batsman("a1").balls, 0);
    assert_eq!(h.bowler("b1").runs, 3);
    assert_eq!(h.striker(), "a1");

    let ball = &innings.overs_history[0].balls[0];
    assert_eq!(ball.ball_number, 1);
    assert_eq!(ball.to_string(), "2wd");
}

#[test]
fn wide_rejects_runs_off_the_bat() {
    let h = Harness::new(20, true);
    let mut wide = DeliveryAction::wide(0);
    wide.runs = 2;
    let err = h.execute(wide).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Delivery(TransitionPhaseError {
            phase: TransitionPhase::PreValidate,
            error: DeliveryError::RunsOffBatOnWide { runs: 2 },
        })
    ));
}

#[test]
fn no_ball_hit_for_four() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(4).with_extra(DeliveryExtra::NoBall));

    let innings = h.innings();
    assert_eq!(innings.score, 5);
    assert_eq!(innings.extras.no_balls, 1);
    assert_eq!(innings.overs, OversCount::ZERO);
    let a1 = h.batsman("a1");
    assert_eq!((a1.runs, a1.fours, a1.balls), (4, 1, 0));
    assert_eq!(h.bowler("b1").runs, 1);
    assert_eq!(h.striker(), "a1");
}

#[test]
fn byes_count_the_ball_but_not_the_runs() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(3).with_extra(DeliveryExtra::Bye));

    let innings = h.innings();
    assert_eq!(innings.score, 3);
    assert_eq!(innings.extras.byes, 3);
    assert_eq!(innings.overs, OversCount::new(0, 1));
    let a1 = h.batsman("a1");
    assert_eq!((a1.runs, a1.balls), (0, 1));
    assert_eq!(h.bowler("b1").runs, 0);
    assert_eq!(h.striker(), "a2");
}

#[test]
fn odd_running_runs_rotate_strike() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(1));
    assert_eq!(h.striker(), "a2");
    h.apply(DeliveryAction::runs(2));
    assert_eq!(h.striker(), "a2");
    h.apply(DeliveryAction::runs(1).with_extra(DeliveryExtra::LegBye));
    assert_eq!(h.striker(), "a1");
    h.apply(DeliveryAction::wide(1));
    assert_eq!(h.striker(), "a1");
    h.apply(DeliveryAction::runs(3).with_extra(DeliveryExtra::NoBall));
    assert_eq!(h.striker(), "a1");
}

#[test]
fn over_completion_swaps_and_composes_with_parity() {
    let mut h = Harness::new(20, true);
    for _ in 0..5 {
        h.apply(DeliveryAction::runs(0));
    }
    let signals = h.apply(DeliveryAction::runs(1));

    assert!(signals.contains(Signals::OVER_COMPLETE));
    assert_eq!(h.striker(), "a1");
    assert_eq!(h.non_striker(), "a2");
    assert_eq!(h.innings().overs, OversCount::whole(1));
    assert_eq!(h.bowler("b1").overs, OversCount::whole(1));
    assert_eq!(h.bowler("b1").maidens, 0);
    assert_eq!(h.innings().overs_history[0].runs_scored, 1);
    assert!(h.state.current_bowler_id.is_none());
}

#[test]
fn maiden_over_then_new_bowler_required() {
    let mut h = Harness::new(20, true);
    for _ in 0..6 {
        h.apply(DeliveryAction::runs(0));
    }
    assert_eq!(h.striker(), "a2");
    assert_eq!(h.bowler("b1").maidens, 1);

    let err = h.execute(DeliveryAction::runs(0)).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Delivery(TransitionPhaseError {
            error: DeliveryError::IncompleteLineup(Vacancy::Bowler),
            ..
        })
    ));

    let err = h.execute(BowlerChangeAction::new("b1")).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::BowlerChange(TransitionPhaseError {
            error: LineupError::ConsecutiveOvers(_),
            ..
        })
    ));

    h.apply(BowlerChangeAction::new("b2"));
    h.apply(DeliveryAction::runs(2));
    assert_eq!(h.bowler("b2").runs, 2);
    assert_eq!(h.innings().overs_history[1].over_number, 1);
    assert_eq!(h.innings().overs_history[1].bowler_id, PlayerId::from("b2"));
}

#[test]
fn caught_with_replacement() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(2));
    let signals = h.apply(
        DeliveryAction::runs(0)
            .with_wicket(caught("a1", "b7"))
            .with_new_batsman("a3"),
    );

    assert!(signals.contains(Signals::WICKET_FELL));
    assert!(!signals.contains(Signals::CREASE_VACANT));
    assert_eq!(h.striker(), "a3");
    assert_eq!(h.batsman("a3").status, BattingStatus::NotOut);

    let a1 = h.batsman("a1");
    assert!(a1.is_out);
    assert_eq!(a1.status, BattingStatus::Out);
    let wicket = a1.wicket.as_ref().unwrap();
    assert_eq!(wicket.kind, DismissalKind::Caught);
    assert_eq!((wicket.over, wicket.ball, wicket.total_score), (0, 2, 2));
    assert_eq!(wicket.fielder_id, Some(PlayerId::from("b7")));

    assert_eq!(h.innings().wickets, 1);
    assert_eq!(h.innings().fall_of_wickets.len(), 1);
    assert_eq!(h.bowler("b1").wickets, 1);
}

#[test]
fn run_out_at_the_non_strikers_end_fills_that_slot() {
    let mut h = Harness::new(20, true);
    let run_out = DismissalInput {
        fielder_id: Some(PlayerId::from("b4")),
        ..dismissal(DismissalKind::RunOut, "a2")
    };
    h.apply(
        DeliveryAction::runs(1)
            .with_wicket(run_out)
            .with_new_batsman("a3"),
    );

    // a3 replaced a2 at the non-striker's end, then the single swapped ends.
    assert_eq!(h.striker(), "a3");
    assert_eq!(h.non_striker(), "a1");
    assert_eq!(h.batsman("a1").runs, 1);
    assert!(h.innings().bowler(&PlayerId::from("b1")).is_some_and(|b| b.wickets == 0));
}

#[test]
fn dismissal_needs_fielder_and_a_batsman_at_the_crease() {
    let h = Harness::new(20, true);

    let err = h
        .execute(DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::Stumped, "a1")))
        .unwrap_err();
    assert!(matches!(
        &err,
        ExecuteError::Delivery(TransitionPhaseError {
            error: DeliveryError::MissingFielder(DismissalKind::Stumped),
            ..
        })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Validation);

    let err = h
        .execute(DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::Bowled, "a5")))
        .unwrap_err();
    assert!(matches!(
        &err,
        ExecuteError::Delivery(TransitionPhaseError {
            error: DeliveryError::UnknownBatsman(_),
            ..
        })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Consistency);
    assert_eq!(err.error_code(), "DELIVERY_UNKNOWN_BATSMAN");
}

#[test]
fn rejected_event_leaves_snapshot_untouched() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(4));
    let before = h.state.clone();

    assert!(h.execute(DeliveryAction::runs(0).with_wicket(caught("a1", "b2")).with_new_batsman("a2")).is_err());
    assert_eq!(h.state, before);
}

#[test]
fn wicket_without_replacement_blocks_until_lineup() {
    let mut h = Harness::new(20, true);
    let signals = h.apply(DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::Bowled, "a1")));
    assert!(signals.contains(Signals::CREASE_VACANT));
    assert!(h.state.striker_id.is_none());

    let blocked = h.execute(DeliveryAction::runs(1)).unwrap_err();
    assert!(matches!(
        blocked,
        ExecuteError::Delivery(TransitionPhaseError {
            error: DeliveryError::IncompleteLineup(Vacancy::Striker),
            ..
        })
    ));

    let displaced = h.execute(LineupAction::new("a3", "a4", "b1")).unwrap_err();
    assert!(matches!(
        displaced,
        ExecuteError::Lineup(TransitionPhaseError {
            error: LineupError::DisplacesBatsman(_),
            ..
        })
    ));

    let dismissed = h.execute(LineupAction::new("a1", "a2", "b1")).unwrap_err();
    assert!(matches!(
        dismissed,
        ExecuteError::Lineup(TransitionPhaseError {
            error: LineupError::BatsmanUnavailable(_),
            ..
        })
    ));

    h.apply(LineupAction::new("a3", "a2", "b1"));
    h.apply(DeliveryAction::runs(1));
    assert_eq!(h.batsman("a3").runs, 1);
}

#[test]
fn retired_hurt_without_eligible_replacement_blocks_next_ball() {
    let mut h = Harness::new(20, false);
    let signals = h.apply(RetirementAction::new("a1", RetirementKind::RetiredHurt));
    assert!(signals.contains(Signals::CREASE_VACANT));
    assert_eq!(h.batsman("a1").status, BattingStatus::RetiredHurt);
    assert_eq!(h.innings().wickets, 0);

    let err = h.execute(DeliveryAction::runs(0)).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Validation);

    // The retired batsman is allowed back.
    h.apply(LineupAction::new("a1", "a2", "b1"));
    assert_eq!(h.batsman("a1").status, BattingStatus::NotOut);
    h.apply(DeliveryAction::runs(0));
}

#[test]
fn retired_hurt_with_eligible_players_needs_a_replacement() {
    let mut h = Harness::new(20, true);
    let err = h
        .execute(RetirementAction::new("a1", RetirementKind::RetiredHurt))
        .unwrap_err();
    assert!(matches!(
        &err,
        ExecuteError::Retirement(TransitionPhaseError {
            error: RetirementError::ReplacementRequired,
            ..
        })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Validation);

    h.apply(RetirementAction::new("a1", RetirementKind::RetiredHurt).with_next_batsman("a3"));
    assert_eq!(h.striker(), "a3");
    assert_eq!(h.innings().overs, OversCount::ZERO);
}

#[test]
fn retired_out_is_a_wicket_without_a_bowler() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(2));
    let signals = h.apply(
        RetirementAction::new("a2", RetirementKind::RetiredOut).with_next_batsman("a3"),
    );

    assert!(signals.contains(Signals::WICKET_FELL));
    assert_eq!(h.non_striker(), "a3");
    let innings = h.innings();
    assert_eq!(innings.wickets, 1);
    let wicket = &innings.fall_of_wickets[0];
    assert_eq!(wicket.kind, DismissalKind::RetiredOut);
    assert_eq!(wicket.bowler_id, None);
    assert_eq!((wicket.over, wicket.ball, wicket.total_score), (0, 1, 2));
    assert_eq!(h.bowler("b1").wickets, 0);
    assert_eq!(innings.overs, OversCount::new(0, 1));
}

#[test]
fn retired_out_rejected_on_a_delivery() {
    let h = Harness::new(20, true);
    let err = h
        .execute(DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::RetiredOut, "a1")))
        .unwrap_err();
    assert_eq!(err.error_code(), "DELIVERY_RETIREMENT");
}

#[test]
fn penalty_runs_touch_only_score_and_extras() {
    let mut h = Harness::new(20, true);
    h.apply(PenaltyAction::new(5));

    let innings = h.innings();
    assert_eq!(innings.score, 5);
    assert_eq!(innings.extras.penalties, 5);
    assert_eq!(innings.extras.total, 5);
    assert_eq!(innings.overs, OversCount::ZERO);
    assert!(innings.overs_history.is_empty());
    assert_eq!(h.batsman("a1").runs, 0);

    assert!(h.execute(PenaltyAction::new(0)).is_err());
}

#[test]
fn runs_that_would_overflow_the_score_are_rejected() {
    let mut h = Harness::new(20, true);
    let err = h.execute(DeliveryAction::wide(u32::MAX)).unwrap_err();
    assert_eq!(err.phase(), Some(TransitionPhase::PreValidate));
    assert_eq!(err.error_code(), "DELIVERY_SCORE_OVERFLOW");

    h.apply(DeliveryAction::runs(u32::MAX - 3));
    let err = h.execute(DeliveryAction::runs(4).with_extra(DeliveryExtra::NoBall)).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Delivery(TransitionPhaseError {
            phase: TransitionPhase::PreValidate,
            error: DeliveryError::ScoreOverflow { runs: 5, .. },
        })
    ));
    let err = h.execute(PenaltyAction::new(10)).unwrap_err();
    assert_eq!(err.error_code(), "PENALTY_SCORE_OVERFLOW");

    h.apply(DeliveryAction::runs(2));
    assert_eq!(h.innings().score, u32::MAX - 1);
}

#[test]
fn bowler_who_finished_an_over_cannot_start_the_next() {
    let mut h = Harness::new(20, true);
    for _ in 0..2 {
        h.apply(DeliveryAction::runs(0));
    }
    h.apply(BowlerChangeAction::new("b2"));
    for _ in 0..4 {
        h.apply(DeliveryAction::runs(0));
    }
    assert!(h.state.current_bowler_id.is_none());

    let err = h.execute(BowlerChangeAction::new("b2")).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::BowlerChange(TransitionPhaseError {
            error: LineupError::ConsecutiveOvers(ref bowler),
            ..
        }) if bowler == &PlayerId::from("b2")
    ));

    h.apply(BowlerChangeAction::new("b1"));
    h.apply(DeliveryAction::runs(1));
    assert_eq!(h.innings().overs_history[1].bowler_id, PlayerId::from("b1"));
}

#[test]
fn swap_strike_exchanges_ends() {
    let mut h = Harness::new(20, true);
    h.apply(Action::SwapStrike);
    assert_eq!(h.striker(), "a2");
    assert_eq!(h.non_striker(), "a1");
}

#[test]
fn reaching_the_target_ends_the_match_mid_over() {
    let mut h = Harness::new(2, true);
    for _ in 0..6 {
        h.apply(DeliveryAction::runs(1));
    }
    h.apply(BowlerChangeAction::new("b2"));
    let mut signals = Signals::empty();
    for _ in 0..6 {
        signals = h.apply(DeliveryAction::runs(0));
    }
    assert!(signals.contains(Signals::INNINGS_COMPLETE));
    assert!(!signals.contains(Signals::MATCH_COMPLETE));
    assert_eq!(h.state.target, Some(7));
    assert_eq!(h.state.innings1.overs, OversCount::whole(2));

    h.apply(LineupAction::new("b1", "b2", "a1"));
    assert!(!h.apply(DeliveryAction::runs(4)).contains(Signals::MATCH_COMPLETE));
    let signals = h.apply(DeliveryAction::runs(4));

    assert!(signals.contains(Signals::MATCH_COMPLETE));
    assert_eq!(h.state.status, MatchStatus::Completed);
    assert_eq!(h.innings().overs, OversCount::new(0, 2));
    assert_eq!(h.state.result.as_deref(), Some("Bravo won by 10 wickets"));
    assert!(matches!(
        h.execute(DeliveryAction::runs(1)),
        Err(ExecuteError::MatchCompleted)
    ));
}

#[test]
fn chase_of_151_reached_for_four_in_19_point_2_overs() {
    let mut h = Harness::new(20, true);

    // Innings 1: 150 all out in 18.4 overs.
    let mut next_in = 3;
    let mut signals = Signals::empty();
    for ball in 0..112 {
        let delivery = if ball >= 102 {
            let out = h.striker();
            let mut delivery =
                DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::Bowled, &out));
            if next_in <= 11 {
                delivery = delivery.with_new_batsman(format!("a{next_in}"));
                next_in += 1;
            }
            delivery
        } else if ball < 75 {
            DeliveryAction::runs(2)
        } else {
            DeliveryAction::runs(0)
        };
        signals = h.apply(delivery);
        h.change_bowler_after(signals, ["b1", "b2"]);
    }

    assert!(signals.contains(Signals::INNINGS_COMPLETE));
    let first = &h.state.innings1;
    assert_eq!((first.score, first.wickets), (150, 10));
    assert_eq!(first.overs, OversCount::new(18, 4));
    assert_eq!(first.recorded_legal_balls(), 112);
    assert_eq!(h.state.target, Some(151));
    assert_eq!(h.state.current_innings, InningsNumber::Second);

    // Innings 2: 151/4 in 19.2 overs.
    h.apply(LineupAction::new("b1", "b2", "a1"));
    let mut next_in = 3;
    for ball in 0..116 {
        let delivery = if ball < 75 {
            DeliveryAction::runs(2)
        } else if [80, 90, 100, 110].contains(&ball) {
            let out = h.striker();
            let delivery =
                DeliveryAction::runs(0).with_wicket(dismissal(DismissalKind::Bowled, &out));
            next_in += 1;
            delivery.with_new_batsman(format!("b{}", next_in - 1))
        } else if ball == 115 {
            DeliveryAction::runs(1)
        } else {
            DeliveryAction::runs(0)
        };
        signals = h.apply(delivery);
        if ball < 115 {
            assert!(!signals.contains(Signals::MATCH_COMPLETE));
        }
        h.change_bowler_after(signals, ["a1", "a2"]);
    }

    assert!(signals.contains(Signals::MATCH_COMPLETE));
    let second = h.innings();
    assert_eq!((second.score, second.wickets), (151, 4));
    assert_eq!(second.overs, OversCount::new(19, 2));
    assert_eq!(h.state.result.as_deref(), Some("Bravo won by 6 wickets"));
    assert_eq!(
        h.state.outcome,
        Some(crate::state::MatchOutcome::Won {
            winner: TeamId::from("b"),
            margin: crate::state::Margin::Wickets(6),
        })
    );
}

#[test]
fn abandon_before_second_innings() {
    let mut h = Harness::new(20, true);
    h.apply(DeliveryAction::runs(4));
    let signals = h.apply(Action::Abandon);
    assert!(signals.contains(Signals::MATCH_COMPLETE));
    assert_eq!(h.state.result.as_deref(), Some("Match abandoned"));
    assert_eq!(h.state.outcome, Some(crate::state::MatchOutcome::Abandoned));
}

#[test]
fn input_snapshot_is_shared_not_mutated() {
    let h = Harness::new(20, true);
    let outcome = h.execute(DeliveryAction::runs(4)).unwrap();
    assert_eq!(h.state.innings1.score, 0);
    assert_eq!(outcome.snapshot.innings1.score, 4);
    assert_eq!(outcome.snapshot.team_a, h.state.team_a);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_round_trips_through_json() {
    let mut h = Harness::new(20, true);
    for runs in [1, 4, 0, 6] {
        h.apply(DeliveryAction::runs(runs));
    }
    h.apply(DeliveryAction::wide(0));

    let json = serde_json::to_value(&h.state).unwrap();
    assert_eq!(json["innings1"]["overs"], serde_json::json!(0.4));
    assert_eq!(json["innings1"]["extras"]["wides"], serde_json::json!(1));
    assert_eq!(json["currentInnings"], serde_json::json!(1));
    assert_eq!(
        json["innings1"]["oversHistory"][0]["balls"][4]["extra"]["type"],
        serde_json::json!("wide")
    );

    let back: Match = serde_json::from_value(json).unwrap();
    assert_eq!(back, h.state);
}

#[cfg(feature = "serde")]
#[test]
fn actions_parse_from_json() {
    let action: Action = serde_json::from_str(
        r#"{"type":"delivery","runs":4,"extra":{"kind":"no-ball"}}"#,
    )
    .unwrap();
    assert_eq!(
        action,
        Action::Delivery(DeliveryAction::runs(4).with_extra(DeliveryExtra::NoBall))
    );

    let action: Action =
        serde_json::from_str(r#"{"type":"delivery","extra":{"kind":"wide","extraRuns":2}}"#)
            .unwrap();
    assert_eq!(action, Action::Delivery(DeliveryAction::wide(2)));

    let action: Action = serde_json::from_str(r#"{"type":"swap_strike"}"#).unwrap();
    assert_eq!(action, Action::SwapStrike);
}
