//! Service tag sequence.

use crate::config::TagSettings;

/// Hands out service tags over `[start, limit)` in `step` increments,
/// wrapping back to `start`.
///
/// This is a plain sequence: it never looks at which tags are in use.
/// Callers validate uniqueness when the job is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAllocator {
    next: u32,
    start: u32,
    step: u32,
    limit: u32,
}

impl TagAllocator {
    /// Allocator over `[100, 900)` stepping by 10.
    pub fn new() -> Self {
        Self::from_settings(&TagSettings::default())
    }

    /// Allocator over the configured range.
    pub fn from_settings(settings: &TagSettings) -> Self {
        Self {
            next: settings.start,
            start: settings.start,
            step: settings.step,
            limit: settings.limit,
        }
    }

    /// The tag the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Return the current tag and advance.
    pub fn allocate(&mut self) -> u32 {
        let tag = self.next;
        self.next = match self.next.checked_add(self.step) {
            Some(n) if n < self.limit => n,
            _ => self.start,
        };
        tag
    }

    /// Rewind to the start of the range.
    pub fn reset(&mut self) {
        self.next = self.start;
    }

    /// Number of distinct tags in one cycle.
    pub fn cycle_len(&self) -> u32 {
        if self.step == 0 {
            return 1;
        }
        self.limit.saturating_sub(self.start).div_ceil(self.step)
    }
}

impl Default for TagAllocator {
    fn default() -> Self {
        Self::new()
    }
}
