//! Typewriter line for the hero section

use folio_core::{Typewriter, TypewriterHandle, typewriter};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::dom::GlooScheduler;
use crate::site;

/// Types, holds, and erases each of `phrases` in turn, forever.
///
/// The loop stops when the component is unmounted.
#[component]
pub fn TypingText(phrases: &'static [&'static str]) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let timings = site::config().typing.clone();
    let start_delay_ms = timings.start_delay_ms;

    match Typewriter::new(phrases.iter().copied(), timings) {
        Ok(typewriter) => {
            let handle = typewriter::start(typewriter, GlooScheduler, start_delay_ms, move |frame| {
                set_text.try_set(frame.to_string());
            });
            let handle = StoredValue::new_local(handle);
            on_cleanup(move || {
                handle.try_with_value(TypewriterHandle::stop);
            });
        }
        Err(e) => warn!("typing text disabled: {e}"),
    }

    view! {
        <span class="typing-text">{text}</span>
        <span class="typing-cursor" aria-hidden="true">"|"</span>
    }
}
