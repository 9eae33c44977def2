//! Dismissals, retirements and replacement batsmen.

use crate::state::{BattingStatus, Innings, PlayerId, Wicket};

/// Applies batting-card changes for dismissals and retirements.
///
/// Crease slots live on the match, not the innings, so callers move players
/// in and out of the slots themselves.
pub struct WicketRecorder<'a> {
    innings: &'a mut Innings,
}

impl<'a> WicketRecorder<'a> {
    pub fn new(innings: &'a mut Innings) -> Self {
        Self { innings }
    }

    /// Records a dismissal (in play or retired out). Counts the wicket,
    /// appends to the fall of wickets and credits the bowler where the kind
    /// allows it.
    pub fn dismiss(&mut self, wicket: Wicket) {
        let batsman = self.innings.batsman_entry(&wicket.player_out_id);
        batsman.is_out = true;
        batsman.status = BattingStatus::Out;
        batsman.wicket = Some(wicket.clone());

        let credited = wicket.bowler_id.as_ref().filter(|_| wicket.kind.credits_bowler());
        if let Some(bowler_id) = credited {
            self.innings.bowler_entry(bowler_id).wickets += 1;
        }

        self.innings.wickets += 1;
        self.innings.fall_of_wickets.push(wicket);
    }

    /// Takes a batsman off the field without a wicket. They stay eligible to
    /// return.
    pub fn retire_hurt(&mut self, player: &PlayerId) {
        self.innings.batsman_entry(player).status = BattingStatus::RetiredHurt;
    }

    /// Marks an incoming batsman "not out", creating the card on first
    /// appearance.
    pub fn bring_in(&mut self, player: &PlayerId) {
        self.innings.batsman_entry(player).status = BattingStatus::NotOut;
    }
}

/// Whether `player` may walk out to the crease. Players without a card yet
/// are eligible; the roster is resolved outside the engine.
pub fn can_come_in(innings: &Innings, player: &PlayerId) -> bool {
    innings.batsman(player).is_none_or(|card| card.is_available())
}

/// Whether anyone other than `leaving` could replace a departing batsman.
pub fn has_eligible_replacement(innings: &Innings, leaving: &PlayerId) -> bool {
    innings
        .available_batsmen()
        .any(|card| &card.player_id != leaving)
}
