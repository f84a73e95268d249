//! Floating background particles

use folio_core::Debouncer;
use folio_core::effects::{Breakpoint, DEFAULT_PALETTE, Particle, particle_field};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::dom::{GlooScheduler, WindowListener, document, viewport_width};
use crate::site;

/// Width assumed when the viewport cannot be measured.
const FALLBACK_WIDTH: f64 = 1280.0;

fn generate(speed: f64) -> Vec<Particle> {
    let width = viewport_width().unwrap_or(FALLBACK_WIDTH);
    let count = Breakpoint::from_width(width).particle_count();
    particle_field(&mut rand::thread_rng(), count, &DEFAULT_PALETTE, speed)
}

fn page_hidden() -> bool {
    document().is_ok_and(|doc| doc.hidden())
}

/// A field of drifting dots sized to the viewport. Resizing across a
/// breakpoint regenerates the field with the new density, and the drift
/// pauses while the tab is hidden.
#[component]
pub fn ParticleField(#[prop(default = 1.0)] speed: f64) -> impl IntoView {
    let particles = RwSignal::new(generate(speed));

    let debouncer = Debouncer::new(GlooScheduler, site::config().debounce_delay_ms);
    let on_resize = move |_| {
        debouncer.call(move || {
            let width = viewport_width().unwrap_or(FALLBACK_WIDTH);
            let wanted = Breakpoint::from_width(width).particle_count();
            if particles.try_with_untracked(Vec::len) != Some(wanted) {
                particles.try_set(generate(speed));
            }
        });
    };
    match WindowListener::attach("resize", on_resize) {
        Ok(listener) => {
            StoredValue::new_local(listener);
        }
        Err(e) => warn!("particles will not follow resizes: {e}"),
    }

    let (paused, set_paused) = signal(page_hidden());
    match WindowListener::attach_to_document("visibilitychange", move |_| {
        set_paused.try_set(page_hidden());
    }) {
        Ok(listener) => {
            StoredValue::new_local(listener);
        }
        Err(e) => warn!("particles will keep moving in background tabs: {e}"),
    }

    view! {
        <div class="particles" class:paused=paused aria-hidden="true">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|particle| view! { <div class="particle" style=particle.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}
