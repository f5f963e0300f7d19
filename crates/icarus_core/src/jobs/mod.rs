//! Job queue engine.
//!
//! This module provides:
//! - `JobQueue`: regular and express FIFO lanes plus the finished list
//! - `TagAllocator`: the wrapping service tag sequence
//! - `SharedQueue`: a lock-guarded handle for multi-threaded hosts
//! - `QueueError`: recoverable failures returned to the caller
//!
//! # Example
//!
//! ```
//! use icarus_core::{JobDraft, JobQueue, Priority};
//!
//! let mut queue = JobQueue::new();
//! let tag = queue.allocate_next_tag();
//!
//! let job = queue
//!     .submit(
//!         JobDraft::new(tag, Priority::Express)
//!             .client_name("acme corp")
//!             .drone_model("Mavic 3")
//!             .problem("ROTOR FAILURE")
//!             .cost("100.00"),
//!     )
//!     .unwrap();
//! assert_eq!(job.cost.to_string(), "115.00");
//!
//! let done = queue.process_next(Priority::Express).unwrap();
//! assert_eq!(done.tag, tag);
//! assert!(queue.remove_finished(tag));
//! ```

mod allocator;
mod errors;
mod queue;
mod shared;

pub use allocator::TagAllocator;
pub use errors::{QueueError, QueueResult};
pub use queue::JobQueue;
pub use shared::SharedQueue;
