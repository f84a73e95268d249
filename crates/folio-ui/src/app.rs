//! Root component
//!
//! Provides the shared notifier and navigation state, then lays out the
//! background, the routed pages, the back-to-top button and the
//! notification stack.

use leptos::prelude::*;

use crate::components::{ParticleField, ScrollToTop, ToastHost, provide_navigation, provide_toasts};
use crate::content::OWNER;
use crate::router::AppRouter;
use crate::site;

#[component]
pub fn App() -> impl IntoView {
    let config = site::config();
    provide_toasts(config.notification_ttl_ms);
    provide_navigation(config);

    view! {
        <div class="app-container">
            <ParticleField />
            <AppRouter />
            <footer class="app-footer">
                <p>{format!("© {OWNER}. Built with Leptos.")}</p>
            </footer>
            <ScrollToTop />
            <ToastHost />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        let _component = App;
    }
}
