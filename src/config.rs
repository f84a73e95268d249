//! Configuration loading for `folio.toml`.
//!
//! The file has two tables: `[site]` (read by the UI at build time and
//! validated here) and `[host]` (used by `folio serve`). A missing file is
//! not an error; every value has a default.

use std::path::{Path, PathBuf};

use folio_core::SiteConfig;
use folio_web::HostConfig;
use serde::Deserialize;
use tracing::{debug, warn};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [site] table: {0}")]
    Site(#[from] folio_core::Error),
}

/// Both tables of `folio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub host: HostConfig,
}

impl FolioConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Site` for out-of-range site values.
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        let site = config.site.validate()?;
        Ok(Self { site, ..config })
    }

    /// Load `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file exists but cannot be read, or
    /// any error from [`FolioConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                debug!(path = %path.display(), "loaded configuration");
                Self::from_toml_str(&source, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "configuration file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_both_tables_are_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[site]\nsubmit_delay_ms = 750\n\n[host]\nbind_address = \"0.0.0.0:80\"\ncompression = false"
        )
        .unwrap();

        let config = FolioConfig::load(file.path()).unwrap();
        assert_eq!(config.site.submit_delay_ms, 750);
        assert_eq!(config.host.bind_address, "0.0.0.0:80");
        assert!(!config.host.compression);
    }

    #[test]
    fn test_invalid_site_values_are_rejected() {
        let result = FolioConfig::from_toml_str("[site.reveal]\nthreshold = -1.0\n", Path::new("folio.toml"));
        assert!(matches!(result, Err(ConfigError::Site(_))));
    }

    #[test]
    fn test_malformed_toml_names_the_file() {
        let err = FolioConfig::from_toml_str("[host", Path::new("broken.toml")).err().unwrap();
        assert!(err.to_string().starts_with("failed to parse broken.toml"));
    }
}
