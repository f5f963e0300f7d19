//! Data models for the Icarus Drone Service.
//!
//! This module contains the records the engine stores and hands out:
//! - `Priority` for the two service lanes
//! - `Money` for exact two-decimal costs
//! - `Job` and its input forms (`JobDraft`, `JobEdit`)
//! - `Snapshot` for rendering the three lists

mod enums;
mod job;
mod money;
mod text;

pub use enums::Priority;
pub use job::{Job, JobDraft, JobEdit, Snapshot};
pub use money::{CostError, Money};
pub use text::{sentence_case, title_case};
