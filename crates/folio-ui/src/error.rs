//! Error types for the browser layer
//!
//! DOM failures never abort a page. Helpers return [`UiError`] and the
//! component that called them logs it and carries on without the effect.

use wasm_bindgen::JsValue;

/// Errors raised while talking to the DOM
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` (not running in a browser)
    #[error("window is not available")]
    WindowUnavailable,

    /// A node the page expected is not rendered
    #[error("element not found: {0}")]
    ElementMissing(String),

    /// A DOM call threw
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for folio_core::Error {
    fn from(err: UiError) -> Self {
        match err {
            UiError::ElementMissing(selector) => Self::element_missing(selector),
            UiError::WindowUnavailable => Self::capability_unavailable("window"),
            UiError::Js(reason) => Self::capability_unavailable(reason),
        }
    }
}

/// Result type alias for DOM operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Log-and-continue for effects that are nice to have.
pub trait LogOnErr {
    /// Log the error under `context` and drop it.
    fn log_on_err(self, context: &str);
}

impl LogOnErr for Result<()> {
    fn log_on_err(self, context: &str) {
        if let Err(e) = self {
            leptos::logging::warn!("{context}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::WindowUnavailable.to_string(), "window is not available");
        assert_eq!(
            UiError::ElementMissing(".typing-text".into()).to_string(),
            "element not found: .typing-text"
        );
    }

    #[test]
    fn test_missing_element_maps_to_core_error() {
        let core: folio_core::Error = UiError::ElementMissing("#contact".into()).into();
        assert_eq!(core, folio_core::Error::element_missing("#contact"));
    }
}
