//! # Folio Core
//!
//! Target-independent behavior for the Folio portfolio site. Nothing here
//! touches the DOM: controllers receive browser capabilities
//! ([`Scheduler`], [`Notifier`], [`SmoothScroll`], [`IntersectionSource`])
//! as values, so every state machine runs the same under `wasm32` and in
//! native tests.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` outside tests
//! - No `unsafe`
//! - Missing nodes and unavailable capabilities degrade, they never abort
//!
//! ## Usage
//!
//! ```rust
//! use folio_core::{NavigationController, Section};
//!
//! let sections = [Section::new("home", 0.0), Section::new("about", 800.0)];
//! let mut nav = NavigationController::default();
//! nav.highlight_active(&sections, 850.0);
//! assert_eq!(nav.active(), Some("about"));
//! ```

pub mod capability;
pub mod config;
pub mod contact;
pub mod effects;
mod error;
pub mod navigation;
pub mod notification;
pub mod projects;
mod result;
pub mod reveal;
pub mod testing;
pub mod typewriter;

pub use capability::{Debouncer, Notifier, Scheduler, SmoothScroll, Task};
pub use config::{RevealConfig, SiteConfig, TypingConfig};
pub use contact::{
    ContactForm, ContactFormHandler, ContactTransport, Field, LocalOnlyTransport, SubmitOutcome,
    SubmitPhase, ValidationReport,
};
pub use error::Error;
pub use navigation::{LinkTarget, MenuPresentation, NavigationController, Section};
pub use notification::{Notification, NotificationKind, NotificationQueue, NotificationStore, TimedNotifier};
pub use projects::{CategoryFilter, SocialAction};
pub use result::{OptionExt, Result, ResultExt};
pub use reveal::{IntersectionSource, RevealCoordinator, RevealState, RevealTarget};
pub use typewriter::{Typewriter, TypewriterHandle, TypingMode};
