//! In-page section links with scroll-spy highlighting

use folio_core::Debouncer;
use leptos::logging::warn;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::nav_bar::use_navigation;
use crate::dom::scroll::measure_sections;
use crate::dom::{GlooScheduler, WindowListener, WindowScroll, scroll_y};
use crate::site;

/// Links to `sections` (`(label, "#id")`). The link of the section under
/// the viewport is highlighted; clicking one smooth-scrolls to it.
#[component]
pub fn SectionNav(sections: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let navigation = use_navigation();

    let highlight = move || {
        let Ok(y) = scroll_y() else {
            return;
        };
        match measure_sections() {
            Ok(measured) => navigation.maybe_update(|nav| nav.highlight_active(&measured, y)),
            Err(e) => warn!("section highlight: {e}"),
        }
    };

    let debouncer = Debouncer::new(GlooScheduler, site::config().debounce_delay_ms);
    match WindowListener::attach("scroll", move |_| debouncer.call(highlight)) {
        Ok(listener) => {
            StoredValue::new_local(listener);
        }
        Err(e) => warn!("section highlight disabled: {e}"),
    }
    Effect::new(move |_| highlight());

    view! {
        <nav class="section-nav" aria-label="On this page">
            {sections
                .iter()
                .map(|&(label, href)| {
                    let active = move || navigation.with(|nav| nav.is_active_link(href));
                    let follow = move |ev: MouseEvent| {
                        let measured = measure_sections().unwrap_or_default();
                        let handled = navigation
                            .try_update(|nav| nav.follow_link(href, &measured, &WindowScroll))
                            .unwrap_or(false);
                        if handled {
                            ev.prevent_default();
                        }
                    };
                    view! {
                        <a href=href class="section-link" class:active=active on:click=follow>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
