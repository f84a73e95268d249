//! Contact form validation and submission.
//!
//! Validation is pure. Submission goes through [`ContactFormHandler`]: it
//! rejects invalid input with field-scoped messages, otherwise waits the
//! configured delay, hands the message to a [`ContactTransport`], and
//! reports the outcome through the [`Notifier`].

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capability::{Notifier, Scheduler};
use crate::notification::NotificationKind;
use crate::result::Result;

/// Shortest accepted message, in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you within 24 hours.";

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld`, no whitespace, exactly one `@` before the last dot.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The `name`/`id` attribute of the form control.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Copy with every value trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }
}

/// Check a single field, as done when a control loses focus.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let value = value.trim();
    match field {
        Field::Name if value.is_empty() => Some("Name is required".to_string()),
        Field::Email if value.is_empty() => Some("Email is required".to_string()),
        Field::Email if !is_valid_email(value) => {
            Some("Please enter a valid email address".to_string())
        }
        Field::Message if value.is_empty() => Some("Message is required".to_string()),
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => Some(format!(
            "Message should be at least {MIN_MESSAGE_CHARS} characters long"
        )),
        Field::Name | Field::Email | Field::Message => None,
    }
}

/// Field-scoped validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[must_use]
pub fn validate(form: &ContactForm) -> ValidationReport {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form.value(field)).map(|msg| (field, msg)))
        .collect();
    ValidationReport { errors }
}

/// Delivery boundary for accepted messages (mail relay, form API, ...).
pub trait ContactTransport {
    /// # Errors
    ///
    /// Returns `Error::TransportFailed` when the message could not be handed off.
    fn deliver(&self, form: &ContactForm) -> Result<()>;
}

/// Transport that accepts every message and only logs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnlyTransport;

impl ContactTransport for LocalOnlyTransport {
    fn deliver(&self, form: &ContactForm) -> Result<()> {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            chars = form.message.chars().count(),
            "contact message accepted locally"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// What `submit` did with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationReport),
    /// A submission is already in flight; this one was dropped.
    Busy,
    /// Queued; the completion callback runs after the delay.
    Accepted,
}

pub struct ContactFormHandler<S, N, T> {
    scheduler: S,
    notifier: N,
    transport: Rc<T>,
    delay_ms: u32,
    phase: Rc<Cell<SubmitPhase>>,
}

impl<S, N, T> ContactFormHandler<S, N, T>
where
    S: Scheduler,
    N: Notifier + Clone + 'static,
    T: ContactTransport + 'static,
{
    pub fn new(scheduler: S, notifier: N, transport: T, delay_ms: u32) -> Self {
        Self {
            scheduler,
            notifier,
            transport: Rc::new(transport),
            delay_ms,
            phase: Rc::new(Cell::new(SubmitPhase::Idle)),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Validate and, if valid, submit `form`.
    ///
    /// `on_settled(delivered)` runs once the submission finishes; the caller
    /// resets its form there when `delivered` is `true`.
    pub fn submit(&self, form: &ContactForm, on_settled: impl FnOnce(bool) + 'static) -> SubmitOutcome {
        if self.phase.get() == SubmitPhase::Submitting {
            return SubmitOutcome::Busy;
        }

        let report = validate(form);
        if !report.is_valid() {
            tracing::debug!(fields = report.errors.len(), "contact form rejected");
            return SubmitOutcome::Rejected(report);
        }

        self.phase.set(SubmitPhase::Submitting);
        let form = form.trimmed();
        let phase = Rc::clone(&self.phase);
        let notifier = self.notifier.clone();
        let transport = Rc::clone(&self.transport);

        self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                let delivered = match transport.deliver(&form) {
                    Ok(()) => {
                        notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
                        true
                    }
                    Err(e) => {
                        tracing::error!("{e}");
                        notifier.show(
                            "Your message could not be sent. Please try again later.",
                            NotificationKind::Error,
                        );
                        false
                    }
                };
                phase.set(SubmitPhase::Idle);
                on_settled(delivered);
            }),
        );
        SubmitOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::Error;
    use crate::testing::{RecordingNotifier, VirtualScheduler};

    fn valid_form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there, nice site!")
    }

    struct FailingTransport;

    impl ContactTransport for FailingTransport {
        fn deliver(&self, _: &ContactForm) -> Result<()> {
            Err(Error::transport_failed("relay offline"))
        }
    }

    #[test]
    fn test_email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_short_message_rejected_even_when_rest_valid() {
        let form = ContactForm::new("Ada", "ada@example.com", "too short");
        let report = validate(&form);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.error(Field::Message),
            Some("Message should be at least 10 characters long")
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let form = ContactForm::new("   ", " ", "\n\t");
        let report = validate(&form);
        assert_eq!(report.error(Field::Name), Some("Name is required"));
        assert_eq!(report.error(Field::Email), Some("Email is required"));
        assert_eq!(report.error(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_message_length_counts_trimmed_chars() {
        assert!(validate_field(Field::Message, "  123456789  ").is_some());
        assert!(validate_field(Field::Message, "éééééééééé").is_none());
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&valid_form()).is_valid());
    }

    #[test]
    fn test_submit_invalid_is_rejected_without_scheduling() {
        let clock = VirtualScheduler::new();
        let handler = ContactFormHandler::new(clock.clone(), RecordingNotifier::new(), LocalOnlyTransport, 2000);

        let outcome = handler.submit(&ContactForm::default(), |_| {});
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref r) if r.errors.len() == 3));
        assert_eq!(clock.pending(), 0);
        assert_eq!(handler.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_valid_notifies_after_delay() {
        let clock = VirtualScheduler::new();
        let notifier = RecordingNotifier::new();
        let handler = ContactFormHandler::new(clock.clone(), notifier.clone(), LocalOnlyTransport, 2000);
        let settled = Rc::new(Cell::new(None));
        let sink = Rc::clone(&settled);

        assert_eq!(handler.submit(&valid_form(), move |ok| sink.set(Some(ok))), SubmitOutcome::Accepted);
        assert_eq!(handler.phase(), SubmitPhase::Submitting);
        assert_eq!(handler.submit(&valid_form(), |_| {}), SubmitOutcome::Busy);

        clock.advance(1999);
        assert!(notifier.shown().is_empty());
        clock.advance(1);

        assert_eq!(settled.get(), Some(true));
        assert_eq!(handler.phase(), SubmitPhase::Idle);
        assert_eq!(
            notifier.shown(),
            vec![(SUCCESS_MESSAGE.to_string(), NotificationKind::Success)]
        );
    }

    #[test]
    fn test_transport_failure_reports_error_and_keeps_form() {
        let clock = VirtualScheduler::new();
        let notifier = RecordingNotifier::new();
        let handler = ContactFormHandler::new(clock.clone(), notifier.clone(), FailingTransport, 10);
        let settled = Rc::new(Cell::new(None));
        let sink = Rc::clone(&settled);

        handler.submit(&valid_form(), move |ok| sink.set(Some(ok)));
        clock.advance(10);

        assert_eq!(settled.get(), Some(false));
        let shown = notifier.shown();
        assert_eq!(shown.first().map(|(_, k)| *k), Some(NotificationKind::Error));
    }

    #[test]
    fn test_form_set_and_value() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "x@y.io");
        assert_eq!(form.value(Field::Email), "x@y.io");
        assert_eq!(Field::Message.to_string(), "message");
    }
}
