//! Leptos 0.7 CSR frontend for the Folio portfolio site
//!
//! Pages render static content from [`content`]; behavior (typing line,
//! reveal-on-scroll, navigation, contact form, notifications) comes from
//! the controllers in `folio-core`, driven by the DOM adapters in [`dom`].
//!
//! ## Module Structure
//! - `app`: root component, provides shared state
//! - `router`: route table
//! - `pages`: one component per route
//! - `components`: reusable widgets and effects
//! - `dom`: capability implementations on `web-sys`
//! - `site`: configuration embedded from `folio.toml`
//! - `error`: DOM error type

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod error;
pub mod pages;
pub mod router;
pub mod site;

pub use app::App;

#[cfg(test)]
mod tests;
