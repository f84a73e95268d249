//! Home page: hero, highlights, numbers, and links out

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{
    ResumeButton, RevealGroup, SectionNav, SocialLinks, StatCounter, TiltCard, TypingText,
};
use crate::content::{HERO_PHRASES, HIGHLIGHTS, HOME_SECTIONS, OWNER, STATS};
use crate::router::routes;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <SectionNav sections=&HOME_SECTIONS[..] />

            <section id="home" class="hero">
                <h1 class="hero-title">
                    "Hi, I'm " <span class="highlight">{OWNER}</span>
                </h1>
                <p class="hero-subtitle">
                    <TypingText phrases=&HERO_PHRASES[..] />
                </p>
                <div class="hero-actions">
                    <A href=routes::PROJECTS>"View Projects"</A>
                    <A href=routes::CONTACT>"Get in Touch"</A>
                    <ResumeButton />
                </div>
            </section>

            <section id="highlights">
                <h2 class="section-title">"What I Do"</h2>
                <RevealGroup class="highlight-grid">
                    {HIGHLIGHTS
                        .iter()
                        .map(|&(icon, title, text)| {
                            view! {
                                <TiltCard class="glassmorphic-card reveal">
                                    <i class=format!("fas {icon}")></i>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </TiltCard>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </section>

            <section id="stats">
                <h2 class="section-title">"By the Numbers"</h2>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|&(value, label)| view! { <StatCounter value=value label=label /> })
                        .collect_view()}
                </div>
            </section>

            <section id="connect">
                <h2 class="section-title">"Let's Connect"</h2>
                <SocialLinks />
            </section>
        </div>
    }
}
