//! Viewport intersection on `IntersectionObserver`

use std::cell::RefCell;

use folio_core::reveal::EnterCallback;
use folio_core::{Error, IntersectionSource, RevealConfig, RevealTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{set_styles, window};
use crate::error::{LogOnErr, Result, UiError};

const INDEX_ATTR: &str = "data-reveal-index";

/// Stamp `index` on `element` so the observer callback can map it back.
pub fn tag_index(element: &Element, index: usize) -> Result<()> {
    Ok(element.set_attribute(INDEX_ATTR, &index.to_string())?)
}

/// The index stamped by [`tag_index`], if any.
pub fn tagged_index(element: &Element) -> Option<usize> {
    element.get_attribute(INDEX_ATTR).and_then(|v| v.parse().ok())
}

/// Observe an element once it is tagged. An untagged element could never be
/// matched by the callback, so it is reported as entered right away.
fn observe_tagged(tagged: Result<()>, index: usize, observe: impl FnOnce(), on_enter: &EnterCallback) {
    match tagged {
        Ok(()) => observe(),
        Err(e) => {
            leptos::logging::warn!("reveal index {index}: {e}; revealing now");
            on_enter(index);
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A rendered element that animates in when revealed.
#[derive(Debug, Clone)]
pub struct ElementTarget(pub Element);

impl RevealTarget for ElementTarget {
    fn show(&self) {
        // The class carries the transition; inline styles win over any
        // per-page initial offset.
        self.0
            .class_list()
            .add_1("revealed")
            .map_err(UiError::from)
            .log_on_err("reveal class");
        set_styles(&self.0, &[("opacity", "1"), ("transform", "none")]).log_on_err("reveal");
    }
}

/// Owns one `IntersectionObserver` and the callback it calls.
///
/// Disconnects on drop.
#[derive(Default)]
pub struct ViewportObserver {
    live: RefCell<Option<(IntersectionObserver, ObserverCallback)>>,
}

impl ViewportObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn supported() -> bool {
        window()
            .ok()
            .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false)
    }
}

impl IntersectionSource<ElementTarget> for ViewportObserver {
    fn watch(&self, targets: &[ElementTarget], options: &RevealConfig, on_enter: EnterCallback) -> folio_core::Result<()> {
        if !Self::supported() {
            return Err(Error::capability_unavailable("IntersectionObserver"));
        }

        let notify = on_enter.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    match tagged_index(&target) {
                        Some(index) => notify(index),
                        None => leptos::logging::warn!("observed element without {INDEX_ATTR}"),
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(UiError::from)?;

        for (index, target) in targets.iter().enumerate() {
            observe_tagged(tag_index(&target.0, index), index, || observer.observe(&target.0), &on_enter);
        }

        if let Some((previous, _)) = self.live.replace(Some((observer, callback))) {
            previous.disconnect();
        }
        Ok(())
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if let Some((observer, _)) = self.live.get_mut().take() {
            observer.disconnect();
        }
    }
}
