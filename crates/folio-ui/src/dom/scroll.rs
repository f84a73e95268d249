//! Scrolling and section measurement

use folio_core::{Section, SmoothScroll};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{document, query_all, window};
use crate::error::Result;

/// `window.scrollTo` with smooth behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl SmoothScroll for WindowScroll {
    fn scroll_to(&self, top: f64) {
        let Ok(window) = window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Every `section[id]` on the page with its offset from the document top,
/// in document order.
pub fn measure_sections() -> Result<Vec<Section>> {
    let Some(body) = document()?.body() else {
        return Ok(Vec::new());
    };
    Ok(query_all(&body, "section[id]")?
        .into_iter()
        .filter_map(|el| {
            let id = el.id();
            el.dyn_into::<HtmlElement>()
                .ok()
                .map(|html| Section::new(id, f64::from(html.offset_top())))
        })
        .collect())
}

/// Toggle the `nav-open` class that locks page scroll.
pub fn set_scroll_locked(locked: bool) -> Result<()> {
    if let Some(body) = document()?.body() {
        body.class_list().toggle_with_force("nav-open", locked)?;
    }
    Ok(())
}
