//! Thin DOM drivers behind the folio-core capabilities
//!
//! Everything here is glue: [`GlooScheduler`] implements `Scheduler`,
//! [`ViewportObserver`] implements `IntersectionSource`, [`WindowScroll`]
//! implements `SmoothScroll`. Controllers stay in folio-core.

pub mod listener;
pub mod observer;
pub mod scheduler;
pub mod scroll;

pub use listener::WindowListener;
pub use observer::{ElementTarget, ViewportObserver};
pub use scheduler::GlooScheduler;
pub use scroll::WindowScroll;

use folio_core::effects::Rect;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, UiError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowUnavailable)
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::ElementMissing("document".into()))
}

/// Viewport width in CSS pixels.
pub fn viewport_width() -> Result<f64> {
    window()?
        .inner_width()?
        .as_f64()
        .ok_or_else(|| UiError::Js("innerWidth is not a number".into()))
}

/// Current vertical scroll position.
pub fn scroll_y() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

/// Bounding box of `element` relative to the viewport.
pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Set inline style properties on `element`.
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) -> Result<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| UiError::Js("element has no inline style".into()))?;
    let style = html.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
