//! Logical-clock task scheduler.
//!
//! Deferred mutations (cart-line removal, notification retirement) are
//! modeled as scheduled tasks with cancellation handles instead of raw
//! timers, so reentrant interactions have defined behavior and tests can
//! drive time deterministically. Hosts call [`Scheduler::advance`] from
//! their timer source; [`Scheduler::next_deadline`] tells a driver how long
//! it may sleep.

use std::time::Duration;

/// Cancellation handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    due_at: Duration,
    task: T,
}

/// A single-threaded task queue over a logical clock.
///
/// Time only moves when [`advance`](Self::advance) is called; `Duration`s
/// are measured from the scheduler's creation.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at logical time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due_at: self.now + delay,
            task,
        });
        id
    }

    /// Cancel a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Advance the clock by `elapsed` and drain every task now due, in
    /// deadline order (schedule order on ties).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now += elapsed;
        let now = self.now;

        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due_at <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| (entry.due_at, entry.id.0));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Time until the next pending task, if any. `Duration::ZERO` means a
    /// task is already due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.due_at.saturating_sub(self.now))
            .min()
    }

    /// Whether any tasks are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(MS * 300, "late");
        scheduler.schedule(MS * 100, "early");
        scheduler.schedule(MS * 200, "middle");
        assert_eq!(
            scheduler.advance(MS * 300),
            vec!["early", "middle", "late"]
        );
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_partial_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(MS * 100, "first");
        scheduler.schedule(MS * 500, "second");
        assert_eq!(scheduler.advance(MS * 100), vec!["first"]);
        assert_eq!(scheduler.advance(MS * 100), Vec::<&str>::new());
        assert_eq!(scheduler.advance(MS * 300), vec!["second"]);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(MS * 100, "doomed");
        scheduler.schedule(MS * 100, "kept");
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.advance(MS * 100), vec!["kept"]);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(MS * 100, 1);
        scheduler.schedule(MS * 100, 2);
        assert_eq!(scheduler.advance(MS * 100), vec![1, 2]);
    }

    #[test]
    fn test_next_deadline() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_deadline(), None);
        scheduler.schedule(MS * 250, ());
        scheduler.schedule(MS * 400, ());
        assert_eq!(scheduler.next_deadline(), Some(MS * 250));
        scheduler.advance(MS * 300);
        assert_eq!(scheduler.next_deadline(), Some(MS * 100));
    }
}
