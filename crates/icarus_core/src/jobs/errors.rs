//! Error types for queue operations.
//!
//! Every variant is a recoverable condition: the engine state is left
//! untouched and the caller decides how to tell the operator.

use thiserror::Error;

use crate::models::{CostError, Priority};

/// Error from a queue operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Cost missing, non-numeric, non-positive, or over two decimals.
    #[error("Invalid cost '{input}': {reason}")]
    InvalidCost {
        input: String,
        #[source]
        reason: CostError,
    },

    /// Tag already used by a queued or finished job.
    #[error("Service tag #{0} already exists")]
    DuplicateTag(u32),

    /// Nothing to process in the lane.
    #[error("No {0} jobs in the queue")]
    EmptyQueue(Priority),

    /// The selected job is not the one at the front of its lane.
    #[error("Job #{expected} is not at the front of the queue (front is #{front})")]
    NotAtFront { expected: u32, front: u32 },

    /// No queued job carries the tag.
    #[error("No queued job with service tag #{0}")]
    NotFound(u32),
}

impl QueueError {
    /// Create an invalid cost error.
    pub fn invalid_cost(input: impl Into<String>, reason: CostError) -> Self {
        Self::InvalidCost {
            input: input.into(),
            reason,
        }
    }

    /// Short title for a warning dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidCost { .. } => "Invalid Cost",
            Self::DuplicateTag(_) => "Duplicate Tag",
            Self::EmptyQueue(_) => "Queue Empty",
            Self::NotAtFront { .. } => "Not At Front",
            Self::NotFound(_) => "Job Not Found",
        }
    }
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;
