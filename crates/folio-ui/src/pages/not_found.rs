//! Fallback for unknown paths

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::PAGE_LINKS;
use crate::router::routes;

/// Pages offered as a way back, everything except home.
fn detours() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    PAGE_LINKS.iter().filter(|(_, path)| *path != routes::HOME)
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-card glassmorphic-card">
                <i class="fas fa-compass not-found-icon"></i>
                <h1 class="section-title">"Lost in the portfolio"</h1>
                <p>"Nothing lives at this address. It may have moved when the site was rebuilt."</p>
                <p class="not-found-home">
                    <A href=routes::HOME>"Back to the start"</A>
                </p>
                <ul class="not-found-detours">
                    {detours()
                        .map(|(label, path)| view! { <li><A href=*path>{*label}</A></li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
