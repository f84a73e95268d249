//! Reveal-on-scroll wiring
//!
//! [`use_reveal`] registers the matching descendants of a container with a
//! `RevealCoordinator` once the container is mounted. [`RevealGroup`] is the
//! common case: a wrapper whose `.reveal` children fade in, staggered.

use folio_core::{RevealConfig, RevealCoordinator};
use leptos::html::Div;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::dom::{ElementTarget, GlooScheduler, ViewportObserver, query_all};
use crate::site;

/// Elements a [`RevealGroup`] animates.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Watch every element under `container` matching `selector` and reveal it
/// the first time it scrolls into view. `on_reveal(index)` runs right after
/// each reveal.
///
/// Without `IntersectionObserver` everything is revealed at once.
pub fn use_reveal<F>(container: NodeRef<Div>, selector: &'static str, options: RevealConfig, on_reveal: F)
where
    F: Fn(usize) + Clone + 'static,
{
    let observer = StoredValue::new_local(ViewportObserver::new());

    Effect::new(move |_| {
        let Some(root) = container.get() else {
            return;
        };
        let targets = match query_all(&root, selector) {
            Ok(targets) => targets,
            Err(e) => {
                warn!("reveal {selector}: {e}");
                return;
            }
        };
        if targets.is_empty() {
            return;
        }

        let coordinator = RevealCoordinator::register(
            targets.into_iter().map(ElementTarget),
            options.stagger_ms,
            GlooScheduler,
        )
        .with_reveal_hook(on_reveal.clone());
        observer.with_value(|source| coordinator.attach(source, &options));
    });
}

/// A `div` whose `.reveal` descendants fade in as they scroll into view.
#[component]
pub fn RevealGroup(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    use_reveal(container, REVEAL_SELECTOR, site::config().reveal.clone(), |_| {});

    view! {
        <div class=class node_ref=container>
            {children()}
        </div>
    }
}
