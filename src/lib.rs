//! # Folio
//!
//! Portfolio site host. The browser side lives in `crates/folio-ui`; this
//! crate wires configuration and the static host together behind a CLI.

pub mod cli;
pub mod config;

pub use config::{ConfigError, FolioConfig};
pub use folio_core;
pub use folio_web;
