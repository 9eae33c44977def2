//! Event types and the topic-based bus that fans them out to subscribers.
//!
//! Viewers, scoreboards and the CLI subscribe here instead of polling the
//! scoring worker.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{MatchEvent, SyncEvent};
