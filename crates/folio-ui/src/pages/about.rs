//! About page

use leptos::prelude::*;

use crate::components::{RevealGroup, SkillBars};
use crate::content::{OWNER, SKILL_GROUPS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="page-header">
                <h1 class="section-title">"About Me"</h1>
            </section>
            <RevealGroup class="about-intro">
                <div class="glassmorphic-card reveal">
                    <p>
                        {format!("I'm {OWNER}, a student of AI and data science who likes shipping things.")}
                    </p>
                    <p>
                        "Most of my work sits where models meet products: data pipelines, "
                        "APIs around trained models, and the web front ends people actually use."
                    </p>
                </div>
            </RevealGroup>
            <section class="skills">
                <h2 class="section-title">"Skills"</h2>
                <SkillBars groups=&SKILL_GROUPS[..] />
            </section>
        </div>
    }
}
