//! Rule components applied by the actions: ball counting, dismissals, the
//! innings hand-over and the final result.

mod innings;
mod invariants;
mod over;
mod result;
mod wicket;

pub use innings::InningsTransitionManager;
pub use invariants::{InvariantViolation, check_innings};
pub use over::{OverProgress, OverTracker, previous_over_bowler};
pub use result::ResultDeterminer;
pub use wicket::{WicketRecorder, can_come_in, has_eligible_replacement};
