//! Repository layer for match snapshots.
//!
//! Repositories store the latest committed snapshot of each match, keyed by
//! match id, for resuming a match and for read-only viewers. They are written
//! only by the sync worker, after the fact; the live snapshot is owned by the
//! scoring worker.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileMatchRepository;
pub use memory::InMemoryMatchRepository;
pub use traits::{MatchRepository, MatchSync, RepositorySync};
