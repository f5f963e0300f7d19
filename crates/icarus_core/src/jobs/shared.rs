//! Thread-safe handle around a [`JobQueue`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::errors::QueueResult;
use super::queue::JobQueue;
use crate::models::{Job, JobDraft, JobEdit, Priority, Snapshot};

/// Cloneable handle sharing one [`JobQueue`] behind a single lock.
///
/// The lock is held for exactly one operation. Use [`with`](Self::with)
/// when several steps must happen atomically, e.g. allocating a tag and
/// submitting with it.
#[derive(Debug, Clone, Default)]
pub struct SharedQueue {
    inner: Arc<Mutex<JobQueue>>,
}

impl SharedQueue {
    /// Wrap an existing queue.
    pub fn new(queue: JobQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// Run `f` with exclusive access to the queue.
    pub fn with<R>(&self, f: impl FnOnce(&mut JobQueue) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Submit a draft. See [`JobQueue::submit`].
    pub fn submit(&self, draft: JobDraft) -> QueueResult<Job> {
        self.inner.lock().submit(draft)
    }

    /// Return the next service tag and advance the sequence.
    pub fn allocate_next_tag(&self) -> u32 {
        self.inner.lock().allocate_next_tag()
    }

    /// Move the front job of a lane to the finished list.
    pub fn process_next(&self, priority: Priority) -> QueueResult<Job> {
        self.inner.lock().process_next(priority)
    }

    /// Process the front job only if its tag matches `expected_tag`.
    pub fn process_selected(&self, priority: Priority, expected_tag: u32) -> QueueResult<Job> {
        self.inner.lock().process_selected(priority, expected_tag)
    }

    /// Edit a queued job in place. See [`JobQueue::update`].
    pub fn update(&self, tag: u32, edit: JobEdit) -> QueueResult<Job> {
        self.inner.lock().update(tag, edit)
    }

    /// Drop a finished job by tag.
    pub fn remove_finished(&self, tag: u32) -> bool {
        self.inner.lock().remove_finished(tag)
    }

    /// Copy of all three lists in queue order.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    /// Whether any queued or finished job carries the tag.
    pub fn is_tag_duplicate(&self, tag: u32) -> bool {
        self.inner.lock().is_tag_duplicate(tag)
    }
}
