//! Icarus Core - Job queue engine for the Icarus Drone Service
//!
//! This crate contains all business logic with zero UI dependencies.
//! A desktop shell (or a CLI tool) drives it through [`JobQueue`] and
//! renders the [`Snapshot`] it hands back after every call.

pub mod config;
pub mod jobs;
pub mod logging;
pub mod models;

pub use jobs::{JobQueue, QueueError, QueueResult, SharedQueue, TagAllocator};
pub use models::{Job, JobDraft, JobEdit, Money, Priority, Snapshot};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
