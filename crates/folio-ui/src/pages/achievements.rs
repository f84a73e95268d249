//! Achievements and headline numbers

use leptos::prelude::*;

use crate::components::{RevealGroup, StatCounter, TiltCard};
use crate::content::{ACHIEVEMENTS, STATS};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <div class="achievements-page">
            <section class="page-header">
                <h1 class="section-title">"Achievements"</h1>
            </section>
            <div class="stats-grid">
                {STATS
                    .iter()
                    .map(|&(value, label)| view! { <StatCounter value=value label=label /> })
                    .collect_view()}
            </div>
            <RevealGroup class="achievement-grid">
                {ACHIEVEMENTS
                    .iter()
                    .map(|achievement| {
                        view! {
                            <TiltCard class="achievement-card glassmorphic-card reveal">
                                <i class=format!("fas {}", achievement.icon)></i>
                                <h3>{achievement.title}</h3>
                                <p>{achievement.detail}</p>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_component_exists() {
        let _component = Achievements;
    }
}
