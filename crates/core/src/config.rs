//! Site configuration.
//!
//! Timings and offsets shared by every controller on the site. Values come
//! from the `[site]` table of `folio.toml`; any missing key falls back to its
//! default, so an empty table is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Typewriter timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay between typed characters.
    pub type_speed_ms: u32,
    /// Delay between deleted characters.
    pub delete_speed_ms: u32,
    /// Hold time once a phrase is fully shown.
    pub hold_ms: u32,
    /// Pause after a phrase is erased, before the next one starts.
    pub advance_pause_ms: u32,
    /// Delay before the very first tick.
    pub start_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: 100,
            delete_speed_ms: 50,
            hold_ms: 2000,
            advance_pause_ms: 500,
            start_delay_ms: 1000,
        }
    }
}

/// Reveal-on-scroll observation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied to the viewport box; a negative bottom margin fires
    /// the reveal slightly before the element fully enters.
    pub root_margin: String,
    /// Per-position delay.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_ms: 100,
        }
    }
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub animation_speed_ms: u32,
    /// Debounce window for scroll and resize handlers.
    pub debounce_delay_ms: u32,
    /// Distance kept above a section when smooth-scrolling to it.
    pub scroll_offset: f64,
    /// Look-ahead used when deciding which section is active.
    pub highlight_offset: f64,
    /// Lock page scroll while the mobile menu is open.
    pub lock_scroll_when_menu_open: bool,
    pub typing: TypingConfig,
    pub reveal: RevealConfig,
    pub notification_ttl_ms: u32,
    pub submit_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            animation_speed_ms: 300,
            debounce_delay_ms: 100,
            scroll_offset: 80.0,
            highlight_offset: 200.0,
            lock_scroll_when_menu_open: true,
            typing: TypingConfig::default(),
            reveal: RevealConfig::default(),
            notification_ttl_ms: 5000,
            submit_delay_ms: 2000,
        }
    }
}

/// File layout: `[site]` is ours, other tables belong to other readers.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
}

impl SiteConfig {
    /// Parse the `[site]` table out of a `folio.toml` document and validate it.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParse` if the document is not valid TOML or has
    /// mistyped keys, and `Error::InvalidConfig` if a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.site.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(self) -> Result<Self> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::invalid_config(
                "reveal.threshold",
                format!("{} is outside 0.0..=1.0", self.reveal.threshold),
            ));
        }
        if self.typing.type_speed_ms == 0 || self.typing.delete_speed_ms == 0 {
            return Err(Error::invalid_config(
                "typing",
                "type and delete speeds must be non-zero",
            ));
        }
        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(Error::invalid_config(
                "scroll_offset",
                "must be a non-negative number",
            ));
        }
        if !self.highlight_offset.is_finite() || self.highlight_offset < 0.0 {
            return Err(Error::invalid_config(
                "highlight_offset",
                "must be a non-negative number",
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_defaults_match_site_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.debounce_delay_ms, 100);
        assert_eq!(config.scroll_offset, 80.0);
        assert_eq!(config.typing.type_speed_ms, 100);
        assert_eq!(config.typing.delete_speed_ms, 50);
        assert_eq!(config.typing.hold_ms, 2000);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.notification_ttl_ms, 5000);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_site_table_overrides_only_given_keys() {
        let config = SiteConfig::from_toml_str(
            r#"
            [site]
            submit_delay_ms = 500

            [site.typing]
            hold_ms = 1200

            [host]
            bind_address = "0.0.0.0:80"
            "#,
        )
        .unwrap();

        assert_eq!(config.submit_delay_ms, 500);
        assert_eq!(config.typing.hold_ms, 1200);
        assert_eq!(config.typing.type_speed_ms, 100);
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        let result = SiteConfig::from_toml_str("[site.reveal]\nthreshold = 1.5\n");
        assert!(matches!(result, Err(Error::InvalidConfig { ref field, .. }) if field == "reveal.threshold"));
    }

    #[test]
    fn test_zero_type_speed_is_rejected() {
        let result = SiteConfig::from_toml_str("[site.typing]\ntype_speed_ms = 0\n");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_mistyped_value_is_a_parse_error() {
        let result = SiteConfig::from_toml_str("[site]\nsubmit_delay_ms = \"soon\"\n");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }
}
