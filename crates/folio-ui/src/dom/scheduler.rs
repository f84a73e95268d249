//! `Scheduler` on browser timers

use folio_core::{Scheduler, Task};
use gloo_timers::callback::Timeout;

/// Runs tasks with `setTimeout`. Timers are detached; controllers cancel by
/// checking their own state when the task fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}
