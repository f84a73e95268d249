//! Typewriter text effect.
//!
//! A two-state machine over a list of phrases. Each [`Typewriter::tick`]
//! adds or removes one character and says how long to wait before the next
//! tick:
//!
//! - `Typing`: grow the phrase by one character; when it is complete, hold
//!   for `hold_ms` and switch to `Deleting`.
//! - `Deleting`: shrink by one character; when empty, move to the next phrase
//!   (wrapping) and switch to `Typing` after `advance_pause_ms`.
//!
//! [`start`] drives a typewriter on a [`Scheduler`] until its handle is
//! stopped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::capability::Scheduler;
use crate::config::TypingConfig;
use crate::error::Error;
use crate::result::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Deleting,
}

/// What to display after a tick, and when to tick again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypingConfig,
    index: usize,
    /// Characters currently shown, counted in `char`s.
    offset: usize,
    mode: TypingMode,
}

impl Typewriter {
    /// # Errors
    ///
    /// Returns `Error::EmptyPhrases` if `phrases` is empty.
    pub fn new<I, P>(phrases: I, timings: TypingConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(Error::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            timings,
            index: 0,
            offset: 0,
            mode: TypingMode::Typing,
        })
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Frame {
        let len = self.current_phrase().chars().count();

        let delay_ms = match self.mode {
            TypingMode::Typing => {
                self.offset = self.offset.saturating_add(1).min(len);
                if self.offset == len {
                    self.mode = TypingMode::Deleting;
                    self.timings.hold_ms
                } else {
                    self.timings.type_speed_ms
                }
            }
            TypingMode::Deleting => {
                self.offset = self.offset.saturating_sub(1);
                if self.offset == 0 {
                    self.mode = TypingMode::Typing;
                    self.index = self.index.wrapping_add(1) % self.phrases.len();
                    self.timings.advance_pause_ms
                } else {
                    self.timings.delete_speed_ms
                }
            }
        };

        // Text reflects the phrase the offset was applied to, before any advance.
        let shown = if self.offset == 0 {
            String::new()
        } else {
            self.current_phrase().chars().take(self.offset).collect()
        };

        Frame {
            text: shown,
            delay_ms,
        }
    }

    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> String {
        self.current_phrase().chars().take(self.offset).collect()
    }

    #[must_use]
    pub const fn mode(&self) -> TypingMode {
        self.mode
    }

    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.index
    }

    fn current_phrase(&self) -> &str {
        self.phrases.get(self.index).map_or("", String::as_str)
    }
}

/// Stops a running typewriter.
#[derive(Debug, Clone)]
pub struct TypewriterHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TypewriterHandle {
    /// Stop scheduling ticks. The tick already queued becomes a no-op.
    pub fn stop(&self) {
        if !self.cancelled.replace(true) {
            tracing::debug!("typewriter stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.cancelled.get()
    }
}

/// Run `typewriter` on `scheduler`, calling `render` with the text of every
/// frame. The first tick happens after `start_delay_ms`.
pub fn start<S, F>(typewriter: Typewriter, scheduler: S, start_delay_ms: u32, render: F) -> TypewriterHandle
where
    S: Scheduler + Clone + 'static,
    F: Fn(&str) + 'static,
{
    let cancelled = Rc::new(Cell::new(false));
    let runner = Rc::new(Runner {
        typewriter: RefCell::new(typewriter),
        scheduler,
        render,
        cancelled: Rc::clone(&cancelled),
    });

    Runner::queue(runner, start_delay_ms);
    TypewriterHandle { cancelled }
}

struct Runner<S, F> {
    typewriter: RefCell<Typewriter>,
    scheduler: S,
    render: F,
    cancelled: Rc<Cell<bool>>,
}

impl<S, F> Runner<S, F>
where
    S: Scheduler + Clone + 'static,
    F: Fn(&str) + 'static,
{
    fn queue(this: Rc<Self>, delay_ms: u32) {
        let scheduler = this.scheduler.clone();
        scheduler.schedule(delay_ms, Box::new(move || Self::step(this)));
    }

    fn step(this: Rc<Self>) {
        if this.cancelled.get() {
            return;
        }
        let frame = this.typewriter.borrow_mut().tick();
        (this.render)(&frame.text);
        Self::queue(this, frame.delay_ms);
    }
}
