//! Window and document event listeners that detach when dropped

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use super::{document, window};
use crate::error::Result;

/// An event listener on `window` or `document`, owned by a component.
///
/// Dropping it removes the listener, so storing it in the component's
/// reactive owner ties the listener to the component's lifetime.
pub struct WindowListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Attach `handler` to `event` on `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the listener is rejected.
    pub fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self> {
        Self::attach_to(window()?.into(), event, handler)
    }

    /// Attach `handler` to `event` on `document`, for events such as
    /// `visibilitychange` that never reach `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no document or the listener is rejected.
    pub fn attach_to_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self> {
        Self::attach_to(document()?.into(), event, handler)
    }

    fn attach_to(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        // Already-detached listeners make this a no-op.
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
