//! Result type definition and the log-and-continue helpers.

use crate::error::Error;

/// The standard Result type for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension for results whose failure is logged and then ignored.
pub trait ResultExt<T> {
    /// Log the error under `context` and discard it.
    fn into_option_logged(self, context: &str) -> Option<T>;

    /// Log the error under `context` and use `default` instead.
    fn or_default_logged(self, context: &str, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(context, error = %e, "continuing without it");
                None
            }
        }
    }

    fn or_default_logged(self, context: &str, default: T) -> T {
        self.into_option_logged(context).unwrap_or(default)
    }
}

/// Extension for optional lookups that must name what was missing.
pub trait OptionExt<T> {
    /// Convert `None` into `Error::ElementMissing` for `selector`.
    fn required(self, selector: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, selector: &str) -> Result<T> {
        self.ok_or_else(|| Error::element_missing(selector))
    }
}
