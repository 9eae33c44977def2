//! Per-over ball bookkeeping.

use crate::state::{Ball, Innings, Over, PlayerId};

/// Result of recording one ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverProgress {
    /// 0-based number of the over the ball was recorded in.
    pub over_number: u32,
    /// Legal balls in that over after recording.
    pub legal_balls: u8,
    /// The ball was the sixth legal delivery.
    pub completed: bool,
}

/// Appends balls to the in-progress over of an innings and keeps the legal
/// ball counters of the innings and the bowler in step.
///
/// Wides and no-balls are stored for display but never advance the count.
pub struct OverTracker<'a> {
    innings: &'a mut Innings,
}

impl<'a> OverTracker<'a> {
    pub fn new(innings: &'a mut Innings) -> Self {
        Self { innings }
    }

    /// Number the next legal ball would carry (1-based).
    pub fn next_ball_number(&self) -> u8 {
        self.innings.overs.balls + 1
    }

    /// The over currently being bowled, if its first ball has been recorded.
    pub fn current_over(&self) -> Option<&Over> {
        let number = self.innings.overs.completed;
        self.innings
            .overs_history
            .last()
            .filter(|over| over.over_number == number)
    }

    /// Records `ball` in the current over, opening a new over if needed.
    pub fn record(&mut self, ball: Ball) -> OverProgress {
        let over_number = self.innings.overs.completed;
        let opens_new_over = self
            .innings
            .overs_history
            .last()
            .is_none_or(|over| over.over_number != over_number);
        if opens_new_over {
            self.innings
                .overs_history
                .push(Over::new(over_number, ball.bowler_id.clone()));
        }

        let legal = ball.is_legal();
        let bowler_id = ball.bowler_id.clone();

        let index = self.innings.overs_history.len() - 1;
        let over = &mut self.innings.overs_history[index];
        over.runs_scored += ball.total_runs();
        over.balls.push(ball);
        let legal_balls = over.legal_balls();

        let completed = if legal {
            self.innings.bowler_entry(&bowler_id).overs.add_legal_ball();
            self.innings.overs.add_legal_ball()
        } else {
            false
        };

        if completed {
            self.credit_maiden(over_number);
        }

        OverProgress {
            over_number,
            legal_balls,
            completed,
        }
    }

    /// Credits a maiden when the over's bowler delivered every ball and
    /// conceded nothing chargeable to them.
    fn credit_maiden(&mut self, over_number: u32) {
        let Some(over) = self
            .innings
            .overs_history
            .iter()
            .find(|over| over.over_number == over_number)
        else {
            return;
        };
        let bowler = over.bowler_id.clone();
        let sole_bowler = over.balls.iter().all(|ball| ball.bowler_id == bowler);
        if sole_bowler && over.runs_conceded_by(&bowler) == 0 {
            self.innings.bowler_entry(&bowler).maidens += 1;
        }
    }
}

/// Bowler who finished the most recently completed over, and so may not
/// bowl the next one.
pub fn previous_over_bowler(innings: &Innings) -> Option<&PlayerId> {
    let current = innings.overs.completed;
    let over = innings
        .overs_history
        .iter()
        .rev()
        .find(|over| over.over_number < current)?;
    over.balls
        .last()
        .map(|ball| &ball.bowler_id)
        .or(Some(&over.bowler_id))
}
