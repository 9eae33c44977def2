//! Worker tasks that back the runtime orchestration.
//!
//! The scoring worker owns the authoritative snapshot and serializes every
//! command; the sync worker pushes committed snapshots to an external store
//! off the scoring path.

mod scoring;
mod sync;

pub use scoring::{Command, ScoringWorker};
pub use sync::SyncWorker;
