//! Resume download button

use folio_core::{Notifier, NotificationKind};
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::toast::use_toasts;

pub const RESUME_PENDING: &str = "Resume download will be available soon!";

/// No resume file is published yet, so a request only tells the visitor so.
fn request_resume(notifier: &impl Notifier) {
    notifier.show(RESUME_PENDING, NotificationKind::Info);
}

#[component]
pub fn ResumeButton() -> impl IntoView {
    let toasts = use_toasts();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        request_resume(&toasts);
    };

    view! {
        <a href="#" class="resume-btn" on:click=on_click>
            <i class="fas fa-download"></i>
            " Download Resume"
        </a>
    }
}
