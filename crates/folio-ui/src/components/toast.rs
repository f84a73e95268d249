//! Notifications
//!
//! [`Toasts`] is the page's `Notifier`: a [`TimedNotifier`] over a queue held
//! in a signal, dismissing on browser timers. [`ToastHost`] renders the queue
//! with close buttons.

use folio_core::{NotificationKind, NotificationQueue, NotificationStore, TimedNotifier};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::dom::GlooScheduler;

/// Notification queue kept in a signal so the host re-renders on change.
#[derive(Debug, Clone, Copy)]
pub struct ToastQueue(pub RwSignal<NotificationQueue>);

impl NotificationStore for ToastQueue {
    fn push(&self, message: &str, kind: NotificationKind) -> Option<u64> {
        self.0.try_update(|queue| queue.push(message, kind))
    }

    fn dismiss(&self, id: u64) {
        self.0.try_update(|queue| queue.dismiss(id));
    }
}

/// Copyable notifier handle, provided as context by the app.
pub type Toasts = TimedNotifier<ToastQueue, GlooScheduler>;

fn toasts(ttl_ms: u32) -> Toasts {
    TimedNotifier::new(ToastQueue(RwSignal::new(NotificationQueue::new())), GlooScheduler, ttl_ms)
}

/// Create the notifier and provide it to every descendant.
pub fn provide_toasts(ttl_ms: u32) -> Toasts {
    let toasts = toasts(ttl_ms);
    provide_context(toasts);
    toasts
}

/// The app's notifier. Outside the app a detached one is returned so
/// callers never have to handle its absence.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| {
        warn!("no notifier in context; notifications will not render");
        toasts(folio_core::SiteConfig::default().notification_ttl_ms)
    })
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.store().0;

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|notification| notification.id
                let:notification
            >
                <div class=format!("notification {}", notification.kind.css_class()) role="status">
                    <div class="notification-content">
                        <i class=format!("fas {}", notification.kind.icon())></i>
                        <span>{notification.message.clone()}</span>
                    </div>
                    <button
                        class="notification-close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.dismiss(notification.id)
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            </For>
        </div>
    }
}
