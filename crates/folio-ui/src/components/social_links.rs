//! Social profile buttons

use folio_core::projects::{SocialAction, social_action};
use folio_core::{Notifier, NotificationKind};
use leptos::prelude::*;

use super::toast::{Toasts, use_toasts};
use crate::content::{SOCIAL_BUTTONS, SOCIAL_PROFILES};
use crate::dom::window;
use crate::error::{LogOnErr, Result};

fn open(platform: &str, toasts: Toasts) -> Result<()> {
    match social_action(platform, &SOCIAL_PROFILES) {
        SocialAction::Open(url) => {
            window()?.open_with_url_and_target(&url, "_blank")?;
        }
        SocialAction::Announce(message) => toasts.show(&message, NotificationKind::Info),
    }
    Ok(())
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="social-links">
            {SOCIAL_BUTTONS
                .iter()
                .map(|&(platform, icon)| {
                    view! {
                        <button
                            class=format!("social-link-enhanced {platform}")
                            aria-label=platform
                            on:click=move |_| open(platform, toasts).log_on_err("social link")
                        >
                            <i class=icon></i>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_component_exists() {
        let _component = SocialLinks;
    }

    #[test]
    fn test_every_profile_has_a_button() {
        for (platform, _) in SOCIAL_PROFILES {
            assert!(SOCIAL_BUTTONS.iter().any(|(name, _)| *name == platform), "{platform}");
        }
    }

    #[test]
    fn test_button_without_profile_is_announced() {
        assert_eq!(
            social_action("kaggle", &SOCIAL_PROFILES),
            SocialAction::Announce("Kaggle profile will be available soon!".into())
        );
    }
}
