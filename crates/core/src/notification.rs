//! Toast notifications.
//!
//! The queue is plain data. [`TimedNotifier`] pushes onto wherever the
//! queue is stored and schedules the auto-dismiss; the UI renders the queue
//! and dismisses early when a close button is clicked.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::capability::{Notifier, Scheduler};

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 5;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Font Awesome icon name for this kind.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "fa-info-circle",
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }

    /// CSS modifier class, e.g. `notification-success`.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Success => "notification-success",
            Self::Error => "notification-error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Bounded FIFO of visible notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    visible: VecDeque<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, evicting the oldest when the queue is full.
    /// Returns the id to dismiss it with.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        if self.visible.len() >= MAX_VISIBLE {
            self.visible.pop_front();
        }
        self.visible.push_back(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notification. Dismissing an unknown or already dismissed id
    /// is a no-op, which lets the timeout and the close button race safely.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Shared storage for a [`NotificationQueue`].
pub trait NotificationStore {
    /// Add a notification. `None` means the store is gone and nothing was shown.
    fn push(&self, message: &str, kind: NotificationKind) -> Option<u64>;

    fn dismiss(&self, id: u64);
}

impl NotificationStore for Rc<RefCell<NotificationQueue>> {
    fn push(&self, message: &str, kind: NotificationKind) -> Option<u64> {
        Some(self.borrow_mut().push(message, kind))
    }

    fn dismiss(&self, id: u64) {
        self.borrow_mut().dismiss(id);
    }
}

/// [`Notifier`] that removes each notification `ttl_ms` after showing it.
#[derive(Debug, Clone, Copy)]
pub struct TimedNotifier<Q, S> {
    store: Q,
    scheduler: S,
    ttl_ms: u32,
}

impl<Q: NotificationStore, S> TimedNotifier<Q, S> {
    pub const fn new(store: Q, scheduler: S, ttl_ms: u32) -> Self {
        Self {
            store,
            scheduler,
            ttl_ms,
        }
    }

    pub const fn store(&self) -> &Q {
        &self.store
    }

    pub const fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }

    /// Remove a notification before its timeout. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.store.dismiss(id);
    }
}

impl<Q, S> Notifier for TimedNotifier<Q, S>
where
    Q: NotificationStore + Clone + 'static,
    S: Scheduler,
{
    fn show(&self, message: &str, kind: NotificationKind) {
        let Some(id) = self.store.push(message, kind) else {
            return;
        };
        tracing::debug!(id, %kind, ttl_ms = self.ttl_ms, "notification shown");
        let store = self.store.clone();
        self.scheduler.schedule(self.ttl_ms, Box::new(move || store.dismiss(id)));
    }
}
