//! Count-up statistics
//!
//! A stat starts at zero and eases up to its value the first time most of
//! it is on screen.

use folio_core::effects::{COUNTER_DURATION_MS, counter_value, format_stat, parse_stat};
use folio_core::{RevealConfig, Scheduler};
use leptos::html::Div;
use leptos::logging::warn;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::dom::GlooScheduler;
use crate::site;

/// Visible fraction that starts the count.
pub const COUNTER_THRESHOLD: f64 = 0.7;

/// Delay between counter frames.
const FRAME_MS: u32 = 16;

/// `value` is a label such as `"25+"`; the `+` is kept while counting.
#[component]
pub fn StatCounter(value: &'static str, label: &'static str) -> impl IntoView {
    let (target, plus) = parse_stat(value).unwrap_or_else(|| {
        warn!("stat {label:?} has a non-numeric value {value:?}");
        (0, false)
    });
    let (shown, set_shown) = signal(format_stat(0, plus));

    let container = NodeRef::<Div>::new();
    let options = RevealConfig {
        threshold: COUNTER_THRESHOLD,
        ..site::config().reveal.clone()
    };
    use_reveal(container, ".stat-number", options, move |_| {
        CountUp {
            target,
            plus,
            started_ms: js_sys::Date::now(),
            set_shown,
        }
        .step();
    });

    view! {
        <div class="stat-item" node_ref=container>
            <span class="stat-number">{shown}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[derive(Clone, Copy)]
struct CountUp {
    target: u32,
    plus: bool,
    started_ms: f64,
    set_shown: WriteSignal<String>,
}

impl CountUp {
    fn step(self) {
        let elapsed = js_sys::Date::now() - self.started_ms;
        let value = counter_value(self.target, elapsed, COUNTER_DURATION_MS);
        // The signal is gone once the page unmounts.
        if self.set_shown.try_set(format_stat(value, self.plus)).is_some() {
            return;
        }
        if elapsed < COUNTER_DURATION_MS {
            GlooScheduler.schedule(FRAME_MS, Box::new(move || self.step()));
        }
    }
}
