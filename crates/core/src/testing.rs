//! Deterministic stand-ins for browser capabilities.
//!
//! [`VirtualScheduler`] is a manual clock: nothing runs until the test
//! advances time, and tasks fire in due-time order (ties in scheduling
//! order). [`RecordingNotifier`] keeps every message it was asked to show.

use std::cell::RefCell;
use std::rc::Rc;

use crate::capability::{Notifier, Scheduler, SmoothScroll, Task};
use crate::notification::NotificationKind;

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    seq: u64,
    queue: Vec<Pending>,
}

/// Manually advanced [`Scheduler`]. Clones share one clock.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move time forward by `ms`, running every task that falls due,
    /// including tasks scheduled by tasks that run during the advance.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms().saturating_add(ms);
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now_ms = target;
    }

    /// Jump to the next due task and run it. Returns `false` when idle.
    pub fn run_next(&self) -> bool {
        self.pop_due(u64::MAX).is_some_and(|task| {
            task();
            true
        })
    }

    // The borrow ends before the task runs, so tasks may schedule freely.
    fn pop_due(&self, limit_ms: u64) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= limit_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        let next = clock.queue.remove(index);
        clock.now_ms = clock.now_ms.max(next.due_ms);
        Some(next.task)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms.saturating_add(u64::from(delay_ms));
        let seq = clock.seq;
        clock.seq = seq.wrapping_add(1);
        clock.queue.push(Pending { due_ms, seq, task });
    }
}

/// [`Notifier`] that records messages instead of displaying them.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Rc<RefCell<Vec<(String, NotificationKind)>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shown(&self) -> Vec<(String, NotificationKind)> {
        self.shown.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, kind: NotificationKind) {
        self.shown.borrow_mut().push((message.to_string(), kind));
    }
}

/// [`SmoothScroll`] that records requested positions.
#[derive(Clone, Default)]
pub struct RecordingScroll {
    targets: Rc<RefCell<Vec<f64>>>,
}

impl RecordingScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn targets(&self) -> Vec<f64> {
        self.targets.borrow().clone()
    }
}

impl SmoothScroll for RecordingScroll {
    fn scroll_to(&self, top: f64) {
        self.targets.borrow_mut().push(top);
    }
}
