//! Reveal-on-scroll coordinator with staggered timing.
//!
//! Each registered element starts hidden. The first time it intersects the
//! viewport it is scheduled to reveal `order * stagger_ms` later; once
//! revealed it stays revealed. Exits are ignored.
//!
//! ```text
//!   Hidden ──first intersection──▶ Scheduled ──delay elapsed──▶ Revealed
//!      └───────────── reveal_all_now (no observer) ──────────────▶┘
//! ```
//!
//! The coordinator does not talk to the DOM. Element handles implement
//! [`RevealTarget`], viewport watching comes from an [`IntersectionSource`],
//! and delays from a [`Scheduler`]. Coordinators on disjoint element sets
//! share nothing.

use std::cell::RefCell;
use std::rc::Rc;

use crate::capability::Scheduler;
use crate::config::RevealConfig;
use crate::result::{Result, ResultExt};

/// Handle to a rendered node that can be switched to its revealed look.
pub trait RevealTarget {
    /// Apply the revealed visual state: opacity 1, no translation offset.
    fn show(&self);
}

/// Callback invoked with the index of an element that entered the viewport.
pub type EnterCallback = Rc<dyn Fn(usize)>;

/// Viewport-intersection capability.
pub trait IntersectionSource<T> {
    /// Watch `targets` and call `on_enter(index)` whenever `targets[index]`
    /// becomes visible according to `options`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityUnavailable` when the environment cannot
    /// observe intersections at all.
    fn watch(&self, targets: &[T], options: &RevealConfig, on_enter: EnterCallback) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Seen once; waiting for its stagger delay.
    Scheduled,
    Revealed,
}

/// A registered element and its reveal bookkeeping.
#[derive(Debug, Clone)]
pub struct ObservableElement<T> {
    pub target: T,
    /// Position among its siblings; drives the stagger delay.
    pub order: usize,
    state: RevealState,
}

impl<T> ObservableElement<T> {
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }
}

/// Delay before the element at `order` reveals.
#[must_use]
pub fn stagger_delay(order: usize, stagger_ms: u32) -> u32 {
    u32::try_from(order)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

type RevealHook = Rc<dyn Fn(usize)>;

/// Coordinates the one-way reveal of a set of elements.
pub struct RevealCoordinator<T, S> {
    elements: Rc<RefCell<Vec<ObservableElement<T>>>>,
    scheduler: S,
    stagger_ms: u32,
    on_reveal: Option<RevealHook>,
}

impl<T, S: Clone> Clone for RevealCoordinator<T, S> {
    fn clone(&self) -> Self {
        Self {
            elements: Rc::clone(&self.elements),
            scheduler: self.scheduler.clone(),
            stagger_ms: self.stagger_ms,
            on_reveal: self.on_reveal.clone(),
        }
    }
}

impl<T, S> RevealCoordinator<T, S>
where
    T: RevealTarget + Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    /// Register `targets` in order; the n-th target gets `order = n`.
    pub fn register(targets: impl IntoIterator<Item = T>, stagger_ms: u32, scheduler: S) -> Self {
        let elements: Vec<_> = targets
            .into_iter()
            .enumerate()
            .map(|(order, target)| ObservableElement {
                target,
                order,
                state: RevealState::Hidden,
            })
            .collect();
        tracing::debug!(count = elements.len(), stagger_ms, "reveal coordinator registered");

        Self {
            elements: Rc::new(RefCell::new(elements)),
            scheduler,
            stagger_ms,
            on_reveal: None,
        }
    }

    /// Run `hook(index)` right after an element is revealed.
    #[must_use]
    pub fn with_reveal_hook(mut self, hook: impl Fn(usize) + 'static) -> Self {
        self.on_reveal = Some(Rc::new(hook));
        self
    }

    /// Start watching through `source`. If the source is unavailable every
    /// element is revealed immediately instead.
    pub fn attach<O: IntersectionSource<T>>(&self, source: &O, options: &RevealConfig) {
        let targets: Vec<T> = self.elements.borrow().iter().map(|e| e.target.clone()).collect();
        let this = self.clone();
        let on_enter: EnterCallback = Rc::new(move |index| this.on_intersect(index));

        if source
            .watch(&targets, options, on_enter)
            .into_option_logged("reveal observer")
            .is_none()
        {
            self.reveal_all_now();
        }
    }

    /// Handle an intersection report for `index`. Only the first report for
    /// an element has any effect.
    pub fn on_intersect(&self, index: usize) {
        let order = {
            let mut elements = self.elements.borrow_mut();
            let Some(element) = elements.get_mut(index) else {
                tracing::warn!(index, "intersection for unregistered element");
                return;
            };
            if element.state != RevealState::Hidden {
                return;
            }
            element.state = RevealState::Scheduled;
            element.order
        };

        let delay = stagger_delay(order, self.stagger_ms);
        tracing::trace!(index, delay, "reveal scheduled");
        let this = self.clone();
        self.scheduler
            .schedule(delay, Box::new(move || this.reveal(index)));
    }

    /// Reveal every element now, skipping animation delays.
    pub fn reveal_all_now(&self) {
        let count = self.elements.borrow().len();
        (0..count).for_each(|index| self.reveal(index));
    }

    fn reveal(&self, index: usize) {
        let target = {
            let mut elements = self.elements.borrow_mut();
            match elements.get_mut(index) {
                Some(element) if element.state != RevealState::Revealed => {
                    element.state = RevealState::Revealed;
                    element.target.clone()
                }
                _ => return,
            }
        };

        target.show();
        if let Some(hook) = &self.on_reveal {
            hook(index);
        }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.elements.borrow().get(index).map(ObservableElement::state)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.state(index) == Some(RevealState::Revealed)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.elements.borrow().iter().filter(|e| e.revealed()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }
}
