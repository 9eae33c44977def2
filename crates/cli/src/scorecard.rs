//! Plain-text scorecard rendering.

use std::fmt::Write;

use scoring_core::{BattingStatus, DismissalKind, Innings, InningsNumber, Match, Wicket};

/// Renders both innings (as far as they have progressed) and the result.
pub fn render(state: &Match) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} v {}, {} overs ({})",
        state.team_a.name, state.team_b.name, state.overs, state.status
    );
    let _ = writeln!(
        out,
        "Toss: {} chose to {}",
        state.team_name(&state.toss_winner_id),
        state.decision
    );

    render_innings(&mut out, state, &state.innings1);
    if let Some(innings2) = &state.innings2 {
        render_innings(&mut out, state, innings2);
    }

    out.push('\n');
    match &state.result {
        Some(result) => {
            let _ = writeln!(out, "{result}");
        }
        None => render_situation(&mut out, state),
    }
    out
}

fn render_innings(out: &mut String, state: &Match, innings: &Innings) {
    let _ = writeln!(
        out,
        "\n{} innings: {}/{} ({} ov, RR {:.2})",
        state.team_name(&innings.batting_team_id),
        innings.score,
        innings.wickets,
        innings.overs,
        innings.run_rate()
    );

    let _ = writeln!(
        out,
        "  {:<12} {:<28} {:>4} {:>4} {:>3} {:>3} {:>7}",
        "Batter", "", "R", "B", "4s", "6s", "SR"
    );
    for batsman in innings
        .batsmen
        .iter()
        .filter(|b| b.status != BattingStatus::DidNotBat)
    {
        let status = match &batsman.wicket {
            Some(wicket) => describe_dismissal(wicket),
            None => batsman.status.to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<12} {:<28} {:>4} {:>4} {:>3} {:>3} {:>7.2}",
            batsman.player_id.as_str(),
            status,
            batsman.runs,
            batsman.balls,
            batsman.fours,
            batsman.sixes,
            batsman.strike_rate()
        );
    }

    let extras = &innings.extras;
    let _ = writeln!(
        out,
        "  Extras {} (wd {}, nb {}, b {}, lb {}, pen {})",
        extras.total, extras.wides, extras.no_balls, extras.byes, extras.leg_byes, extras.penalties
    );

    let yet_to_bat: Vec<&str> = innings
        .batsmen
        .iter()
        .filter(|b| b.status == BattingStatus::DidNotBat)
        .map(|b| b.player_id.as_str())
        .collect();
    if !yet_to_bat.is_empty() {
        let _ = writeln!(out, "  Did not bat: {}", yet_to_bat.join(", "));
    }

    if !innings.fall_of_wickets.is_empty() {
        let fall: Vec<String> = innings
            .fall_of_wickets
            .iter()
            .enumerate()
            .map(|(index, w)| {
                format!(
                    "{}-{} ({}, {}.{})",
                    w.total_score,
                    index + 1,
                    w.player_out_id,
                    w.over,
                    w.ball
                )
            })
            .collect();
        let _ = writeln!(out, "  Fall of wickets: {}", fall.join(", "));
    }

    if !innings.bowlers.is_empty() {
        let _ = writeln!(
            out,
            "  {:<12} {:>5} {:>3} {:>4} {:>3} {:>6}",
            "Bowler", "O", "M", "R", "W", "Econ"
        );
        for bowler in &innings.bowlers {
            let _ = writeln!(
                out,
                "  {:<12} {:>5} {:>3} {:>4} {:>3} {:>6.2}",
                bowler.player_id.as_str(),
                bowler.overs.to_string(),
                bowler.maidens,
                bowler.runs,
                bowler.wickets,
                bowler.economy()
            );
        }
    }

    if let Some(over) = innings.overs_history.last() {
        let _ = writeln!(
            out,
            "  Last over ({}, {}): {}",
            over.over_number + 1,
            over.bowler_id,
            over.summary()
        );
    }
}

fn render_situation(out: &mut String, state: &Match) {
    if state.current_innings == InningsNumber::Second
        && let Some(needed) = state.runs_needed()
    {
        let batting = &state.current_innings().batting_team_id;
        let _ = write!(
            out,
            "{} need {} from {} balls",
            state.team_name(batting),
            needed,
            state.balls_remaining()
        );
        if let Some(rate) = state.required_run_rate() {
            let _ = write!(out, " (RRR {rate:.2})");
        }
        out.push('\n');
    } else {
        let _ = writeln!(out, "In progress");
    }
}

/// Scorecard dismissal text, e.g. `c Smith b Jones`.
pub fn describe_dismissal(wicket: &Wicket) -> String {
    let bowler = wicket
        .bowler_id
        .as_ref()
        .map(|id| id.as_str())
        .unwrap_or("?");
    let fielder = wicket
        .fielder_id
        .as_ref()
        .map(|id| id.as_str())
        .unwrap_or("?");

    match wicket.kind {
        DismissalKind::Bowled => format!("b {bowler}"),
        DismissalKind::Caught if wicket.fielder_id == wicket.bowler_id => {
            format!("c & b {bowler}")
        }
        DismissalKind::Caught => format!("c {fielder} b {bowler}"),
        DismissalKind::Lbw => format!("lbw b {bowler}"),
        DismissalKind::RunOut => format!("run out ({fielder})"),
        DismissalKind::Stumped => format!("st {fielder} b {bowler}"),
        DismissalKind::HitWicket => format!("hit wicket b {bowler}"),
        DismissalKind::RetiredOut => "retired out".to_string(),
    }
}
