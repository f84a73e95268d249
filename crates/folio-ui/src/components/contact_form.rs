//! Contact form with per-field validation
//!
//! Fields validate on blur and clear their error while typing. Submission
//! goes through a `ContactFormHandler`; the form shows "Sending..." until
//! the handler settles and resets itself after a successful delivery.

use folio_core::contact::validate_field;
use folio_core::{ContactForm, ContactFormHandler, Field, LocalOnlyTransport, SubmitOutcome, ValidationReport};
use leptos::prelude::*;
use web_sys::{Event, SubmitEvent};

use super::toast::use_toasts;
use crate::dom::GlooScheduler;
use crate::site;

/// Label and input type for each field.
const fn field_meta(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("Name", "text"),
        Field::Email => ("Email", "email"),
        Field::Message => ("Message", "textarea"),
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<ValidationReport>,
) -> impl IntoView {
    let (label, kind) = field_meta(field);
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || errors.with(|report| report.error(field).map(str::to_string));

    let on_input = move |ev: Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
        errors.update(|report| {
            report.errors.remove(&field);
        });
    };
    let on_blur = move |_| {
        let current = form.with_untracked(|f| f.value(field).to_string());
        errors.update(|report| match validate_field(field, &current) {
            Some(message) => {
                report.errors.insert(field, message);
            }
            None => {
                report.errors.remove(&field);
            }
        });
    };

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=kind
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group" class:error=move || error().is_some()>
            <label for=field.key()>{label}</label>
            {control}
            {move || error().map(|message| view! { <span class="error-message">{message}</span> })}
        </div>
    }
}

#[component]
pub fn ContactPanel() -> impl IntoView {
    let handler = StoredValue::new_local(ContactFormHandler::new(
        GlooScheduler,
        use_toasts(),
        LocalOnlyTransport,
        site::config().submit_delay_ms,
    ));
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ValidationReport::default());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let outcome = handler.try_with_value(|h| {
            h.submit(&current, move |delivered| {
                if delivered {
                    form.try_set(ContactForm::default());
                    errors.try_set(ValidationReport::default());
                }
                sending.try_set(false);
            })
        });
        match outcome {
            Some(SubmitOutcome::Rejected(report)) => errors.set(report),
            Some(SubmitOutcome::Accepted) => {
                errors.set(ValidationReport::default());
                sending.set(true);
            }
            Some(SubmitOutcome::Busy) | None => {}
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field form=form errors=errors /> })
                .collect_view()}
            <button type="submit" class="submit-btn" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
