//! Core error types for Folio controllers.
//!
//! Nothing in the site is fatal: every variant here is something a caller
//! logs and recovers from (fallback, no-op, or an inline message).

use thiserror::Error;

/// Core error type for Folio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("TOML parse error: {reason}")]
    ConfigParse { reason: String },

    // Controller construction
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,

    // Environment errors
    #[error("element not found: {selector}")]
    ElementMissing { selector: String },

    #[error("capability unavailable: {capability}")]
    CapabilityUnavailable { capability: String },

    // Contact form boundary
    #[error("message transport failed: {reason}")]
    TransportFailed { reason: String },
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }

    /// Create a missing element error.
    pub fn element_missing(selector: impl Into<String>) -> Self {
        Self::ElementMissing {
            selector: selector.into(),
        }
    }

    /// Create a capability unavailable error.
    pub fn capability_unavailable(capability: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability: capability.into(),
        }
    }

    /// Create a transport failure error.
    pub fn transport_failed(reason: impl Into<String>) -> Self {
        Self::TransportFailed {
            reason: reason.into(),
        }
    }

    /// Whether the failure means a browser feature is absent and the caller
    /// should take its degraded path.
    #[must_use]
    pub const fn is_degradable(&self) -> bool {
        matches!(self, Self::CapabilityUnavailable { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config_parse(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::element_missing(".nav-menu");
        assert_eq!(err.to_string(), "element not found: .nav-menu");

        let err = Error::invalid_config("reveal.threshold", "must be within 0.0..=1.0");
        assert_eq!(
            err.to_string(),
            "invalid configuration value for 'reveal.threshold': must be within 0.0..=1.0"
        );
    }

    #[test]
    fn test_only_capability_errors_are_degradable() {
        assert!(Error::capability_unavailable("IntersectionObserver").is_degradable());
        assert!(!Error::EmptyPhrases.is_degradable());
        assert!(!Error::transport_failed("offline").is_degradable());
    }
}
