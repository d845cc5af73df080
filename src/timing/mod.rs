//! Virtual-clock timer queue.
//!
//! The carousel needs three kinds of deferred work: a repeating autoplay tick,
//! a one-shot settle per shift, and a debounced resume after resizes. The host
//! only offers a coarse "wake me in N seconds" primitive, so timers are kept
//! here on a millisecond clock owned by the caller, and the host is asked to
//! wake the plugin at [`TimerQueue::next_deadline`].
//!
//! Tasks fire in `(deadline, scheduling order)` order. [`TimerQueue::pop_due`]
//! moves the clock to each deadline before handing the task out, so work
//! scheduled by a task is timed from that task's deadline rather than from the
//! wall-clock time at which the host happened to wake up.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tick = timers.schedule_repeating(100, "tick");
//! timers.schedule_once(150, "settle");
//!
//! let mut fired = Vec::new();
//! while let Some((at, task)) = timers.pop_due(250) {
//!     fired.push((at, task));
//! }
//! assert_eq!(fired, vec![(100, "tick"), (150, "settle"), (200, "tick")]);
//!
//! timers.cancel(tick);
//! assert_eq!(timers.next_deadline(), None);
//! ```

use std::collections::BTreeMap;

/// Cancellation handle returned when scheduling a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    period_ms: Option<u64>,
    task: T,
}

/// Pending timers keyed by deadline on a caller-driven clock.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<(u64, u64), Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T: Clone> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now_ms
    }

    /// Runs `task` once, `delay_ms` after the current time.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TimerHandle {
        self.insert(delay_ms, None, task)
    }

    /// Runs `task` every `period_ms`, first after one period.
    ///
    /// A zero period is treated as one millisecond so the queue always makes
    /// progress.
    pub fn schedule_repeating(&mut self, period_ms: u64, task: T) -> TimerHandle {
        let period_ms = period_ms.max(1);
        self.insert(period_ms, Some(period_ms), task)
    }

    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, task: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.pending.insert((due, id), Scheduled { period_ms, task });
        tracing::trace!(id, due, ?period_ms, "timer scheduled");
        TimerHandle(id)
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let Some(key) = self.key_of(handle) else {
            return false;
        };
        self.pending.remove(&key);
        tracing::trace!(id = handle.0, "timer cancelled");
        true
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.key_of(handle).is_some()
    }

    fn key_of(&self, handle: TimerHandle) -> Option<(u64, u64)> {
        self.pending.keys().find(|(_, id)| *id == handle.0).copied()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns the earliest task due at or before `until`.
    ///
    /// The clock is moved to the task's deadline. Repeating timers are
    /// rescheduled one period later under the same handle.
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, T)> {
        let (&(due, id), _) = self.pending.iter().next().filter(|((due, _), _)| *due <= until)?;
        let scheduled = self.pending.remove(&(due, id))?;
        self.now_ms = self.now_ms.max(due);

        let task = match scheduled.period_ms {
            Some(period_ms) => {
                let task = scheduled.task.clone();
                self.pending
                    .insert((due.saturating_add(period_ms), id), scheduled);
                task
            }
            None => scheduled.task,
        };
        Some((due, task))
    }

    /// Moves the clock forward to `now_ms` without firing anything.
    ///
    /// Callers drain [`Self::pop_due`] first; the clock never moves backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut TimerQueue<&'static str>, until: u64) -> Vec<(u64, &'static str)> {
        std::iter::from_fn(|| timers.pop_due(until)).collect()
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(300, "c");
        timers.schedule_once(100, "a");
        timers.schedule_once(200, "b");
        assert_eq!(drain(&mut timers, 1_000), vec![(100, "a"), (200, "b"), (300, "c")]);
        assert_eq!(timers.now(), 300);
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(50, "first");
        timers.schedule_once(50, "second");
        assert_eq!(drain(&mut timers, 50), vec![(50, "first"), (50, "second")]);
    }

    #[test]
    fn repeating_timers_reschedule() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule_repeating(40, "tick");
        assert_eq!(drain(&mut timers, 130).len(), 3);
        assert!(timers.is_pending(handle));
        assert_eq!(timers.next_deadline(), Some(160));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = TimerQueue::new();
        let doomed = timers.schedule_once(10, "doomed");
        timers.schedule_once(20, "kept");
        assert!(timers.cancel(doomed));
        assert!(!timers.cancel(doomed));
        assert_eq!(drain(&mut timers, 100), vec![(20, "kept")]);
    }

    #[test]
    fn delays_are_relative_to_the_clock() {
        let mut timers = TimerQueue::new();
        timers.advance_to(1_000);
        timers.schedule_once(5, "later");
        assert!(timers.pop_due(1_004).is_none());
        assert_eq!(timers.pop_due(1_005), Some((1_005, "later")));

        timers.advance_to(10);
        assert_eq!(timers.now(), 1_005);
    }

    #[test]
    fn clear_drops_every_timer() {
        let mut timers = TimerQueue::new();
        assert!(timers.is_empty());
        let tick = timers.schedule_repeating(100, "tick");
        timers.schedule_once(50, "settle");
        assert_eq!(timers.len(), 2);

        timers.clear();
        assert!(timers.is_empty());
        assert!(!timers.is_pending(tick));
        assert!(drain(&mut timers, 1_000).is_empty());
    }

    #[test]
    fn zero_period_still_progresses() {
        let mut timers = TimerQueue::new();
        timers.schedule_repeating(0, "spin");
        assert_eq!(drain(&mut timers, 3).len(), 3);
    }
}
