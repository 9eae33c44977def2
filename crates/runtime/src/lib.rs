//! Async runtime around the scoring engine.
//!
//! This crate serializes operator commands through a single scoring worker,
//! keeps the undo history, broadcasts events to viewers, and pushes each
//! committed snapshot to an external store in the background. Consumers embed
//! [`Runtime`] and talk to it through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] stores and syncs match snapshots
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, Submission};
pub use events::{Event, EventBus, MatchEvent, SyncEvent, Topic};
pub use repository::{
    FileMatchRepository, InMemoryMatchRepository, MatchRepository, MatchSync, RepositoryError,
    RepositorySync,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
