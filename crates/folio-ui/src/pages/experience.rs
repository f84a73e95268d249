//! Experience timeline

use leptos::prelude::*;

use crate::components::{RevealGroup, TiltCard};
use crate::content::EXPERIENCE;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <div class="experience-page">
            <section class="page-header">
                <h1 class="section-title">"Experience"</h1>
            </section>
            <RevealGroup class="timeline">
                {EXPERIENCE
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="timeline-item reveal">
                                <div class="timeline-dot"></div>
                                <TiltCard class="timeline-content experience-card">
                                    <span class="timeline-period">{entry.period}</span>
                                    <h3>{entry.role}</h3>
                                    <h4>{entry.organisation}</h4>
                                    <p>{entry.summary}</p>
                                </TiltCard>
                            </div>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </div>
    }
}
