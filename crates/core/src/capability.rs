//! Browser capabilities, passed to controllers explicitly.
//!
//! Controllers never reach for globals. Timers, notifications, and scrolling
//! arrive as trait objects or generic parameters, so the same controller runs
//! against `gloo-timers` in the browser and against
//! [`VirtualScheduler`](crate::testing::VirtualScheduler) in tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::notification::NotificationKind;

/// A one-shot task queued on a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Fire-and-forget timer capability.
///
/// Everything on the site runs on one thread, so tasks are neither `Send`
/// nor cancellable; a controller that needs to stop checks its own flag when
/// the task fires.
pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now.
    fn schedule(&self, delay_ms: u32, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Task) {
        (**self).schedule(delay_ms, task);
    }
}

/// Transient message surface (toasts).
pub trait Notifier {
    fn show(&self, message: &str, kind: NotificationKind);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn show(&self, message: &str, kind: NotificationKind) {
        (**self).show(message, kind);
    }
}

/// Smooth-scroll primitive.
pub trait SmoothScroll {
    /// Scroll the page so its top edge lands at `top` pixels.
    fn scroll_to(&self, top: f64);
}

/// Trailing-edge debounce on top of a [`Scheduler`].
///
/// Each call supersedes the previous one; only the last call of a burst runs,
/// `wait_ms` after it was made.
#[derive(Clone)]
pub struct Debouncer<S> {
    scheduler: S,
    wait_ms: u32,
    generation: Rc<Cell<u64>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Schedule `f`, discarding any call still waiting.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);

        let latest = Rc::clone(&self.generation);
        self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                if latest.get() == ticket {
                    f();
                }
            }),
        );
    }

    #[must_use]
    pub const fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::testing::VirtualScheduler;

    #[test]
    fn test_debouncer_runs_only_last_call_of_burst() {
        let clock = VirtualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), 100);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for value in 1..=3 {
            let seen = Rc::clone(&seen);
            debouncer.call(move || seen.borrow_mut().push(value));
            clock.advance(30);
        }
        clock.advance(100);

        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn test_debouncer_separate_bursts_each_fire() {
        let clock = VirtualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), 100);
        let count = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let count = Rc::clone(&count);
            debouncer.call(move || count.set(count.get() + 1));
            clock.advance(150);
        }

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_debouncer_waits_full_window() {
        let clock = VirtualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), 100);
        let fired = Rc::new(Cell::new(false));

        let flag = Rc::clone(&fired);
        debouncer.call(move || flag.set(true));

        clock.advance(99);
        assert!(!fired.get());
        clock.advance(1);
        assert!(fired.get());
    }
}
