//! Job queue engine: two FIFO lanes plus the finished list.

use std::collections::VecDeque;

use super::allocator::TagAllocator;
use super::errors::{QueueError, QueueResult};
use crate::config::{QueueSettings, Settings};
use crate::models::{Job, JobDraft, JobEdit, Money, Priority, Snapshot};

/// In-memory service queue.
///
/// Jobs enter a lane through [`submit`](Self::submit), leave it only from
/// the front through [`process_next`](Self::process_next), and end up in
/// the finished list until [`remove_finished`](Self::remove_finished)
/// drops them. A tag is unique across all three collections.
#[derive(Debug, Clone, Default)]
pub struct JobQueue {
    /// Regular lane, front first.
    regular: VecDeque<Job>,
    /// Express lane, front first.
    express: VecDeque<Job>,
    /// Processed jobs in processing order.
    finished: Vec<Job>,
    /// Next-tag sequence for the submission form.
    tags: TagAllocator,
    /// Cost policy.
    options: QueueSettings,
}

impl JobQueue {
    /// Create an empty queue with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue from loaded configuration.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            tags: TagAllocator::from_settings(&settings.tags),
            options: settings.queue.clone(),
            ..Self::default()
        }
    }

    /// Current queue policy.
    pub fn options(&self) -> &QueueSettings {
        &self.options
    }

    /// Toggle cost editing for queued jobs.
    pub fn set_allow_cost_edit(&mut self, allow: bool) {
        self.options.allow_cost_edit = allow;
    }

    /// Validate a draft and append it to the tail of its lane.
    ///
    /// Express jobs are charged the configured surcharge. The tag allocator
    /// is not touched; the draft's tag is taken as given.
    pub fn submit(&mut self, draft: JobDraft) -> QueueResult<Job> {
        let base = parse_cost(&draft.cost)?;

        if self.is_tag_duplicate(draft.tag) {
            return Err(QueueError::DuplicateTag(draft.tag));
        }

        let cost = match draft.priority {
            Priority::Express => base
                .with_surcharge(self.options.express_surcharge_bps)
                .map_err(|reason| QueueError::invalid_cost(&draft.cost, reason))?,
            Priority::Regular => base,
        };

        let job = Job::new(
            draft.tag,
            draft.priority,
            cost,
            &draft.client_name,
            &draft.drone_model,
            &draft.problem_description,
        );

        tracing::debug!("Enqueued {}: {}", job.priority, job);
        self.lane_mut(job.priority).push_back(job.clone());
        Ok(job)
    }

    /// Return the next service tag and advance the sequence.
    pub fn allocate_next_tag(&mut self) -> u32 {
        self.tags.allocate()
    }

    /// The tag [`allocate_next_tag`](Self::allocate_next_tag) will return.
    pub fn peek_next_tag(&self) -> u32 {
        self.tags.peek()
    }

    /// Move the front job of a lane to the finished list.
    pub fn process_next(&mut self, priority: Priority) -> QueueResult<Job> {
        let job = self
            .lane_mut(priority)
            .pop_front()
            .ok_or(QueueError::EmptyQueue(priority))?;

        tracing::debug!("Processed {}: {}", priority, job);
        self.finished.push(job.clone());
        Ok(job)
    }

    /// Process the front job only if it is the one the operator selected.
    pub fn process_selected(&mut self, priority: Priority, expected_tag: u32) -> QueueResult<Job> {
        let front = self
            .peek_front(priority)
            .map(|job| job.tag)
            .ok_or(QueueError::EmptyQueue(priority))?;

        if front != expected_tag {
            return Err(QueueError::NotAtFront {
                expected: expected_tag,
                front,
            });
        }

        self.process_next(priority)
    }

    /// Edit a queued job in place.
    ///
    /// Text fields are replaced and normalized. A new cost is applied only
    /// when cost editing is enabled; it is validated like a submission and
    /// stored as given, without re-applying the surcharge. Tag, priority
    /// and queue position never change.
    pub fn update(&mut self, tag: u32, edit: JobEdit) -> QueueResult<Job> {
        self.find_queued(tag).ok_or(QueueError::NotFound(tag))?;

        let new_cost = match edit.cost.as_deref() {
            Some(raw) if self.options.allow_cost_edit => Some(parse_cost(raw)?),
            Some(_) => {
                tracing::trace!("Ignoring cost edit for #{}: cost is locked", tag);
                None
            }
            None => None,
        };

        let job = self.find_queued_mut(tag).ok_or(QueueError::NotFound(tag))?;
        job.set_details(&edit.client_name, &edit.drone_model, &edit.problem_description);
        if let Some(cost) = new_cost {
            job.cost = cost;
        }

        tracing::debug!("Updated {}", job);
        Ok(job.clone())
    }

    /// Drop a finished job by tag. Returns whether anything was removed.
    pub fn remove_finished(&mut self, tag: u32) -> bool {
        match self.finished.iter().position(|job| job.tag == tag) {
            Some(index) => {
                let job = self.finished.remove(index);
                tracing::debug!("Removed from finished: {}", job);
                true
            }
            None => {
                tracing::trace!("remove_finished: tag #{} not found", tag);
                false
            }
        }
    }

    /// Drop a finished job by its row in the finished list.
    pub fn remove_finished_at(&mut self, index: usize) -> Option<Job> {
        if index < self.finished.len() {
            let job = self.finished.remove(index);
            tracing::debug!("Removed from finished: {}", job);
            Some(job)
        } else {
            None
        }
    }

    /// Copy of all three lists in queue order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            regular: self.regular.iter().cloned().collect(),
            express: self.express.iter().cloned().collect(),
            finished: self.finished.clone(),
        }
    }

    /// Whether any queued or finished job carries the tag.
    pub fn is_tag_duplicate(&self, tag: u32) -> bool {
        let dup = self
            .regular
            .iter()
            .chain(self.express.iter())
            .chain(self.finished.iter())
            .any(|job| job.tag == tag);

        tracing::trace!("is_tag_duplicate({}) => {}", tag, dup);
        dup
    }

    /// The job `process_next` would take from a lane.
    pub fn peek_front(&self, priority: Priority) -> Option<&Job> {
        self.lane(priority).front()
    }

    /// Look up a queued (not finished) job.
    pub fn find_queued(&self, tag: u32) -> Option<&Job> {
        self.regular
            .iter()
            .chain(self.express.iter())
            .find(|job| job.tag == tag)
    }

    /// Finished jobs in processing order.
    pub fn finished(&self) -> &[Job] {
        &self.finished
    }

    /// Number of jobs waiting in a lane.
    pub fn len(&self, priority: Priority) -> usize {
        self.lane(priority).len()
    }

    /// Number of finished jobs.
    pub fn finished_len(&self) -> usize {
        self.finished.len()
    }

    /// Check if both lanes and the finished list are empty.
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.express.is_empty() && self.finished.is_empty()
    }

    /// Empty both lanes and the finished list. The tag sequence keeps going.
    pub fn clear_all(&mut self) {
        self.regular.clear();
        self.express.clear();
        self.finished.clear();
        tracing::debug!("Cleared all collections");
    }

    fn lane(&self, priority: Priority) -> &VecDeque<Job> {
        match priority {
            Priority::Regular => &self.regular,
            Priority::Express => &self.express,
        }
    }

    fn lane_mut(&mut self, priority: Priority) -> &mut VecDeque<Job> {
        match priority {
            Priority::Regular => &mut self.regular,
            Priority::Express => &mut self.express,
        }
    }

    fn find_queued_mut(&mut self, tag: u32) -> Option<&mut Job> {
        self.regular
            .iter_mut()
            .chain(self.express.iter_mut())
            .find(|job| job.tag == tag)
    }
}

fn parse_cost(raw: &str) -> QueueResult<Money> {
    Money::parse(raw).map_err(|reason| QueueError::invalid_cost(raw, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostError;
    use std::collections::HashSet;

    fn draft(tag: u32, priority: Priority, cost: &str) -> JobDraft {
        JobDraft::new(tag, priority)
            .client_name("acme corp")
            .drone_model("Mavic 3")
            .problem("prop damage")
            .cost(cost)
    }

    fn tags(jobs: &[Job]) -> Vec<u32> {
        jobs.iter().map(|j| j.tag).collect()
    }

    #[test]
    fn submit_applies_express_surcharge() {
        let mut queue = JobQueue::new();

        let express = queue.submit(draft(100, Priority::Express, "100.00")).unwrap();
        let regular = queue.submit(draft(110, Priority::Regular, "100.00")).unwrap();

        assert_eq!(express.cost, Money::from_cents(11_500));
        assert_eq!(regular.cost, Money::from_cents(10_000));
        assert_eq!(tags(&queue.snapshot().express), vec![100]);
        assert_eq!(tags(&queue.snapshot().regular), vec![110]);
    }

    #[test]
    fn submit_normalizes_fields() {
        let mut queue = JobQueue::new();
        let job = queue
            .submit(
                JobDraft::new(100, Priority::Regular)
                    .client_name("  john SMITH ")
                    .drone_model("  Skydio 2 ")
                    .problem("ROTOR FAILURE")
                    .cost("50"),
            )
            .unwrap();

        assert_eq!(job.client_name, "John Smith");
        assert_eq!(job.drone_model, "Skydio 2");
        assert_eq!(job.problem_description, "Rotor failure");
        assert_eq!(queue.snapshot().regular[0], job);
    }

    #[test]
    fn submit_cost_boundaries() {
        let mut queue = JobQueue::new();

        let err = queue.submit(draft(100, Priority::Regular, "12.345")).unwrap_err();
        assert_eq!(
            err,
            QueueError::invalid_cost("12.345", CostError::TooManyDecimals)
        );
        assert!(queue.submit(draft(100, Priority::Regular, "0")).is_err());
        assert!(queue.submit(draft(100, Priority::Regular, "-4")).is_err());
        assert!(queue.submit(draft(100, Priority::Regular, "")).is_err());
        assert!(queue.is_empty());

        let ok = queue.submit(draft(100, Priority::Regular, "12.34")).unwrap();
        assert_eq!(ok.cost.to_string(), "12.34");
    }

    #[test]
    fn duplicate_tags_rejected_across_all_lists() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();
        queue.submit(draft(110, Priority::Express, "10")).unwrap();
        queue.process_next(Priority::Regular).unwrap();

        for tag in [100, 110] {
            for priority in Priority::ALL {
                assert_eq!(
                    queue.submit(draft(tag, priority, "10")),
                    Err(QueueError::DuplicateTag(tag))
                );
            }
        }
        assert_eq!(queue.snapshot().total(), 2);

        // Once purged from the finished list the tag is free again.
        assert!(queue.remove_finished(100));
        assert!(queue.submit(draft(100, Priority::Express, "10")).is_ok());
    }

    #[test]
    fn cost_is_checked_before_tag() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();

        let err = queue.submit(draft(100, Priority::Regular, "abc")).unwrap_err();
        assert!(matches!(err, QueueError::InvalidCost { .. }));
    }

    #[test]
    fn caller_supplied_tags_outside_range_are_accepted() {
        let mut queue = JobQueue::new();
        assert!(queue.submit(draft(5, Priority::Regular, "1")).is_ok());
        assert!(queue.submit(draft(12_345, Priority::Regular, "1")).is_ok());
    }

    #[test]
    fn lanes_are_fifo() {
        let mut queue = JobQueue::new();
        for tag in [100, 120, 140] {
            queue.submit(draft(tag, Priority::Regular, "10")).unwrap();
        }
        for tag in [110, 130] {
            queue.submit(draft(tag, Priority::Express, "10")).unwrap();
        }

        assert_eq!(queue.process_next(Priority::Express).unwrap().tag, 110);
        assert_eq!(queue.process_next(Priority::Regular).unwrap().tag, 100);
        assert_eq!(queue.process_next(Priority::Regular).unwrap().tag, 120);
        assert_eq!(queue.process_next(Priority::Express).unwrap().tag, 130);
        assert_eq!(queue.process_next(Priority::Regular).unwrap().tag, 140);

        assert_eq!(tags(queue.finished()), vec![110, 100, 120, 130, 140]);
        assert_eq!(
            queue.process_next(Priority::Regular),
            Err(QueueError::EmptyQueue(Priority::Regular))
        );
    }

    #[test]
    fn process_selected_requires_front() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Express, "10")).unwrap();
        queue.submit(draft(110, Priority::Express, "10")).unwrap();

        assert_eq!(
            queue.process_selected(Priority::Express, 110),
            Err(QueueError::NotAtFront {
                expected: 110,
                front: 100
            })
        );
        assert_eq!(queue.len(Priority::Express), 2);

        assert_eq!(queue.process_selected(Priority::Express, 100).unwrap().tag, 100);
        assert_eq!(
            queue.process_selected(Priority::Regular, 100),
            Err(QueueError::EmptyQueue(Priority::Regular))
        );
    }

    #[test]
    fn update_keeps_cost_by_default() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Express, "100")).unwrap();

        let updated = queue
            .update(
                100,
                JobEdit::new("JANE doe", " Mini 4 ", "BATTERY swelling").with_cost("1.00"),
            )
            .unwrap();

        assert_eq!(updated.client_name, "Jane Doe");
        assert_eq!(updated.drone_model, "Mini 4");
        assert_eq!(updated.problem_description, "Battery swelling");
        assert_eq!(updated.cost, Money::from_cents(11_500));
        assert_eq!(updated.priority, Priority::Express);
        assert_eq!(queue.snapshot().express[0], updated);
    }

    #[test]
    fn update_replaces_cost_when_allowed() {
        let mut queue = JobQueue::new();
        queue.set_allow_cost_edit(true);
        queue.submit(draft(100, Priority::Express, "100")).unwrap();

        let err = queue
            .update(100, JobEdit::new("a", "b", "c").with_cost("9.999"))
            .unwrap_err();
        assert!(matches!(err, QueueError::InvalidCost { .. }));
        // Nothing changed on failure.
        assert_eq!(queue.snapshot().express[0].client_name, "Acme Corp");

        let updated = queue
            .update(100, JobEdit::new("a", "b", "c").with_cost("80"))
            .unwrap();
        assert_eq!(updated.cost, Money::from_cents(8_000));

        // No cost supplied leaves it alone.
        let updated = queue.update(100, JobEdit::new("a", "b", "c")).unwrap();
        assert_eq!(updated.cost, Money::from_cents(8_000));
    }

    #[test]
    fn update_keeps_position() {
        let mut queue = JobQueue::new();
        for tag in [100, 110, 120] {
            queue.submit(draft(tag, Priority::Regular, "10")).unwrap();
        }

        queue.update(110, JobEdit::new("zed", "m", "p")).unwrap();

        let snapshot = queue.snapshot();
        assert_eq!(tags(&snapshot.regular), vec![100, 110, 120]);
        assert_eq!(snapshot.regular[1].client_name, "Zed");
    }

    #[test]
    fn update_rejects_finished_and_unknown() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();
        queue.process_next(Priority::Regular).unwrap();

        assert_eq!(
            queue.update(100, JobEdit::new("a", "b", "c")),
            Err(QueueError::NotFound(100))
        );
        assert_eq!(
            queue.update(999, JobEdit::new("a", "b", "c")),
            Err(QueueError::NotFound(999))
        );
        assert_eq!(queue.finished()[0].client_name, "Acme Corp");
    }

    #[test]
    fn update_reports_missing_tag_before_bad_cost() {
        let mut queue = JobQueue::new();
        queue.set_allow_cost_edit(true);
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();
        queue.process_next(Priority::Regular).unwrap();

        assert_eq!(
            queue.update(999, JobEdit::new("a", "b", "c").with_cost("abc")),
            Err(QueueError::NotFound(999))
        );
        assert_eq!(
            queue.update(100, JobEdit::new("a", "b", "c").with_cost("1.234")),
            Err(QueueError::NotFound(100))
        );
    }

    #[test]
    fn remove_finished_is_idempotent() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();
        queue.process_next(Priority::Regular).unwrap();

        assert!(queue.remove_finished(100));
        assert!(!queue.remove_finished(100));
        assert_eq!(queue.finished_len(), 0);
    }

    #[test]
    fn remove_finished_ignores_queued_jobs() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();

        assert!(!queue.remove_finished(100));
        assert_eq!(queue.len(Priority::Regular), 1);
    }

    #[test]
    fn remove_finished_at_by_row() {
        let mut queue = JobQueue::new();
        for tag in [100, 110, 120] {
            queue.submit(draft(tag, Priority::Regular, "10")).unwrap();
            queue.process_next(Priority::Regular).unwrap();
        }

        assert_eq!(queue.remove_finished_at(1).map(|j| j.tag), Some(110));
        assert_eq!(queue.remove_finished_at(5), None);
        assert_eq!(tags(queue.finished()), vec![100, 120]);
    }

    #[test]
    fn allocator_is_independent_of_submissions() {
        let mut queue = JobQueue::new();
        assert_eq!(queue.peek_next_tag(), 100);

        let tag = queue.allocate_next_tag();
        queue.submit(draft(tag, Priority::Regular, "10")).unwrap();
        // A rejected submission still consumed its tag.
        let tag = queue.allocate_next_tag();
        assert!(queue.submit(draft(tag, Priority::Regular, "bad")).is_err());

        assert_eq!(queue.allocate_next_tag(), 120);
    }

    #[test]
    fn allocator_wrap_can_collide() {
        let mut queue = JobQueue::new();
        let first = queue.allocate_next_tag();
        queue.submit(draft(first, Priority::Regular, "10")).unwrap();

        for _ in 1..80 {
            queue.allocate_next_tag();
        }
        let wrapped = queue.allocate_next_tag();

        assert_eq!(wrapped, first);
        assert_eq!(
            queue.submit(draft(wrapped, Priority::Express, "10")),
            Err(QueueError::DuplicateTag(first))
        );
    }

    #[test]
    fn tags_stay_unique_through_mixed_operations() {
        let mut queue = JobQueue::new();
        for i in 0..200u32 {
            let tag = queue.allocate_next_tag();
            let priority = if i % 3 == 0 { Priority::Express } else { Priority::Regular };
            let _ = queue.submit(draft(tag, priority, "25.50"));
            if i % 4 == 0 {
                let _ = queue.process_next(priority);
            }
            if i % 7 == 0 {
                let _ = queue.remove_finished(tag);
            }
        }

        let snapshot = queue.snapshot();
        let all: Vec<u32> = snapshot
            .regular
            .iter()
            .chain(&snapshot.express)
            .chain(&snapshot.finished)
            .map(|j| j.tag)
            .collect();
        let unique: HashSet<u32> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();

        let first = queue.snapshot();
        let second = queue.snapshot();
        assert_eq!(first, second);
        assert_eq!(queue.len(Priority::Regular), 1);
    }

    #[test]
    fn clear_all_keeps_tag_sequence() {
        let mut queue = JobQueue::new();
        let tag = queue.allocate_next_tag();
        queue.submit(draft(tag, Priority::Regular, "10")).unwrap();
        queue.submit(draft(500, Priority::Express, "10")).unwrap();
        queue.process_next(Priority::Express).unwrap();

        queue.clear_all();

        assert!(queue.is_empty());
        assert!(!queue.is_tag_duplicate(tag));
        assert_eq!(queue.peek_next_tag(), 110);
    }

    #[test]
    fn with_settings_uses_config() {
        let mut settings = Settings::default();
        settings.queue.express_surcharge_bps = 2000;
        settings.tags.start = 1000;
        settings.tags.limit = 2000;

        let mut queue = JobQueue::with_settings(&settings);
        assert_eq!(queue.options(), &settings.queue);
        assert_eq!(queue.allocate_next_tag(), 1000);
        assert_eq!(queue.peek_next_tag(), 1010);

        let job = queue.submit(draft(1, Priority::Express, "10")).unwrap();
        assert_eq!(job.cost, Money::from_cents(1_200));
    }

    #[test]
    fn find_and_peek() {
        let mut queue = JobQueue::new();
        queue.submit(draft(100, Priority::Regular, "10")).unwrap();
        queue.submit(draft(110, Priority::Regular, "10")).unwrap();

        assert_eq!(queue.peek_front(Priority::Regular).map(|j| j.tag), Some(100));
        assert!(queue.peek_front(Priority::Express).is_none());
        assert_eq!(queue.find_queued(110).map(|j| j.tag), Some(110));

        queue.process_next(Priority::Regular).unwrap();
        assert!(queue.find_queued(100).is_none());
    }
}
