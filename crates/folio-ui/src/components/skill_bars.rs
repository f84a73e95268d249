//! Skill groups whose bars fill once the group scrolls into view

use folio_core::Scheduler;
use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::content::SkillGroup;
use crate::dom::{GlooScheduler, query_all, set_styles};
use crate::error::{LogOnErr, Result, UiError};
use crate::site;

/// Delay between consecutive bars of one group.
pub const BAR_STAGGER_MS: u32 = 100;

fn fill_bars(container: NodeRef<Div>, group: usize) -> Result<()> {
    let root = container
        .get_untracked()
        .ok_or_else(|| UiError::ElementMissing(".skills-grid".into()))?;
    let category = query_all(&root, ".skill-category")?
        .into_iter()
        .nth(group)
        .ok_or_else(|| UiError::ElementMissing(format!(".skill-category #{group}")))?;

    for (order, bar) in query_all(&category, ".skill-bar-fill")?.into_iter().enumerate() {
        let width = format!("{}%", bar.get_attribute("data-percentage").unwrap_or_else(|| "90".into()));
        let delay = u32::try_from(order).unwrap_or(u32::MAX).saturating_mul(BAR_STAGGER_MS);
        GlooScheduler.schedule(
            delay,
            Box::new(move || set_styles(&bar, &[("width", width.as_str())]).log_on_err("skill bar")),
        );
    }
    Ok(())
}

#[component]
pub fn SkillBars(groups: &'static [SkillGroup]) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    use_reveal(container, ".skill-category", site::config().reveal.clone(), move |group| {
        fill_bars(container, group).log_on_err("skill bars");
    });

    view! {
        <div class="skills-grid" node_ref=container>
            {groups
                .iter()
                .map(|group| {
                    view! {
                        <div class="skill-category glassmorphic-card">
                            <h3>
                                <i class=format!("fas {}", group.icon)></i>
                                {group.title}
                            </h3>
                            {group
                                .skills
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill-item">
                                            <div class="skill-header">
                                                <span>{skill.name}</span>
                                                <span>{format!("{}%", skill.level)}</span>
                                            </div>
                                            <div class="skill-bar">
                                                <div
                                                    class="skill-bar-fill"
                                                    data-percentage=skill.level.to_string()
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
