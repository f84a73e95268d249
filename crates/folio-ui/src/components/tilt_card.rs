//! Cards that lean toward the pointer and ripple on click

use folio_core::effects::{
    RIPPLE_DURATION_MS, Ripple, TILT_ENTER_TRANSITION, TILT_LEAVE_TRANSITION, TILT_RESET, tilt_transform,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::dom::{document, element_rect, set_styles, viewport_width};
use crate::error::{LogOnErr, Result};

/// The element the handler is attached to.
fn card_of(ev: &MouseEvent) -> Option<Element> {
    ev.current_target().and_then(|target| target.dyn_into::<Element>().ok())
}

fn tilt(ev: &MouseEvent) -> Result<()> {
    let Some(card) = card_of(ev) else {
        return Ok(());
    };
    // Unknown width counts as mobile: no tilt.
    let width = viewport_width().unwrap_or(0.0);
    let rect = element_rect(&card);
    match tilt_transform(rect, f64::from(ev.client_x()), f64::from(ev.client_y()), width) {
        Some(transform) => set_styles(
            &card,
            &[("transition", TILT_ENTER_TRANSITION), ("transform", transform.as_str())],
        ),
        None => Ok(()),
    }
}

fn untilt(ev: &MouseEvent) -> Result<()> {
    let Some(card) = card_of(ev) else {
        return Ok(());
    };
    set_styles(&card, &[("transition", TILT_LEAVE_TRANSITION), ("transform", TILT_RESET)])
}

fn ripple(ev: &MouseEvent) -> Result<()> {
    let Some(card) = card_of(ev) else {
        return Ok(());
    };
    let placed = Ripple::at(element_rect(&card), f64::from(ev.client_x()), f64::from(ev.client_y()));

    let span = document()?.create_element("span")?;
    span.set_class_name("ripple");
    span.set_attribute("style", &placed.style())?;
    card.append_child(&span)?;
    Timeout::new(RIPPLE_DURATION_MS, move || span.remove()).forget();
    Ok(())
}

#[component]
pub fn TiltCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div
            class=format!("tilt-card {class}")
            on:mousemove=|ev: MouseEvent| tilt(&ev).log_on_err("tilt")
            on:mouseleave=|ev: MouseEvent| untilt(&ev).log_on_err("tilt")
            on:click=|ev: MouseEvent| ripple(&ev).log_on_err("ripple")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_card_component_exists() {
        let _component = TiltCard;
    }
}
