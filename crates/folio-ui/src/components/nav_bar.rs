//! Top navigation bar with the mobile menu toggle
//!
//! The menu state lives in one [`NavigationController`] shared through
//! context, so the bar and in-page section links agree on it.

use folio_core::navigation::navbar_scrolled;
use folio_core::{NavigationController, SiteConfig};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::MouseEvent;

use super::scroll_top::use_scroll_flag;
use crate::dom::scroll::set_scroll_locked;
use crate::error::LogOnErr;
use crate::router::routes;

/// Shared navigation state.
pub type Navigation = RwSignal<NavigationController>;

/// Page links in menu order, `(label, path)`.
pub static PAGE_LINKS: [(&str, &str); 6] = [
    ("Home", routes::HOME),
    ("About", routes::ABOUT),
    ("Projects", routes::PROJECTS),
    ("Experience", routes::EXPERIENCE),
    ("Achievements", routes::ACHIEVEMENTS),
    ("Contact", routes::CONTACT),
];

/// Create the navigation controller from `config` and provide it.
pub fn provide_navigation(config: &SiteConfig) -> Navigation {
    let navigation = RwSignal::new(NavigationController::new(
        config.lock_scroll_when_menu_open,
        config.highlight_offset,
        config.scroll_offset,
    ));
    provide_context(navigation);
    navigation
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().unwrap_or_else(|| {
        warn!("no navigation in context; using a detached controller");
        RwSignal::new(NavigationController::default())
    })
}

#[component]
pub fn NavBar() -> impl IntoView {
    let navigation = use_navigation();

    // The body only scrolls while the menu is closed (when locking is on).
    Effect::new(move |_| {
        let locked = navigation.with(|nav| nav.presentation().scroll_locked);
        set_scroll_locked(locked).log_on_err("scroll lock");
    });

    let scrolled = use_scroll_flag(navbar_scrolled);
    let menu_open = move || navigation.with(NavigationController::menu_open);
    let close = move |_: MouseEvent| {
        navigation.update(|nav| {
            nav.close();
        });
    };

    view! {
        <nav class="navbar" class:scrolled=scrolled>
            <div class="nav-container">
                <div class="nav-logo" on:click=close>
                    <A href=routes::HOME>"Folio"</A>
                </div>
                <ul class="nav-menu" class:active=menu_open>
                    {PAGE_LINKS
                        .iter()
                        .map(|(label, path)| {
                            view! {
                                <li class="nav-item" on:click=close>
                                    <A href=*path>{*label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="hamburger"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| {
                        navigation.update(|nav| {
                            nav.toggle();
                        });
                    }
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
