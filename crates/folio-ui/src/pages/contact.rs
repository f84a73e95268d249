//! Contact page

use leptos::prelude::*;

use crate::components::{ContactPanel, RevealGroup, SocialLinks};
use crate::content::CONTACT_EMAIL;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="contact-page">
            <section class="page-header">
                <h1 class="section-title">"Get in Touch"</h1>
                <p>"Questions, collaborations, or just a hello: I usually reply within a day."</p>
            </section>
            <RevealGroup class="contact-grid">
                <div class="contact-info glassmorphic-card reveal">
                    <h3>"Reach me directly"</h3>
                    <p>
                        <i class="fas fa-envelope"></i>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </p>
                    <SocialLinks />
                </div>
                <div class="glassmorphic-card reveal">
                    <ContactPanel />
                </div>
            </RevealGroup>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_component_exists() {
        let _component = Contact;
    }
}
