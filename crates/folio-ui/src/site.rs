//! Site configuration compiled into the bundle
//!
//! The `[site]` table of the repository's `folio.toml` is embedded at build
//! time. A broken table logs a warning and the defaults apply.

use std::sync::LazyLock;

use folio_core::{Result, SiteConfig};

/// Raw `folio.toml` as of the last build.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../folio.toml");

static SITE: LazyLock<SiteConfig> = LazyLock::new(|| load(EMBEDDED_CONFIG));

/// The site configuration.
pub fn config() -> &'static SiteConfig {
    &SITE
}

/// Parse `source`, falling back to defaults on error.
pub fn load(source: &str) -> SiteConfig {
    parse(source).unwrap_or_else(|e| {
        leptos::logging::warn!("folio.toml [site]: {e}; using defaults");
        SiteConfig::default()
    })
}

fn parse(source: &str) -> Result<SiteConfig> {
    SiteConfig::from_toml_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        assert!(parse(EMBEDDED_CONFIG).is_ok());
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(config(), &SiteConfig::default());
    }

    #[test]
    fn test_broken_config_falls_back() {
        assert_eq!(load("[site]\ndebounce_delay_ms = \"fast\"\n"), SiteConfig::default());
    }
}
