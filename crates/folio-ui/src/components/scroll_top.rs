//! Scroll-depth flags and the back-to-top button

use folio_core::SmoothScroll;
use folio_core::navigation::scroll_to_top_visible;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::dom::{WindowListener, WindowScroll, scroll_y};

/// A flag that follows `predicate(window.scrollY)`. The signal only
/// notifies when the flag flips, not on every scroll event.
pub fn use_scroll_flag(predicate: fn(f64) -> bool) -> ReadSignal<bool> {
    let (flag, set_flag) = signal(scroll_y().is_ok_and(predicate));

    let on_scroll = move |_| {
        if let Ok(y) = scroll_y() {
            let wanted = predicate(y);
            set_flag.maybe_update(|current| {
                let changed = *current != wanted;
                *current = wanted;
                changed
            });
        }
    };
    match WindowListener::attach("scroll", on_scroll) {
        Ok(listener) => {
            StoredValue::new_local(listener);
        }
        Err(e) => warn!("scroll flag will not update: {e}"),
    }
    flag
}

/// Floating button, shown once the page is scrolled well down, that
/// smooth-scrolls back to the top.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_scroll_flag(scroll_to_top_visible);

    view! {
        <button
            class="scroll-to-top"
            class:visible=visible
            aria-label="Back to top"
            on:click=move |_| WindowScroll.scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
