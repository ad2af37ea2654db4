use leptos::prelude::*;

use super::icons::Icon;
use super::reveal::Reveal;
use crate::content::{SkillCategory, PROFILE, SKILLS};
use crate::motion::Entrance;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="py-32 px-4 md:px-20 relative">
            <Reveal entrance=Entrance::fade(1000) class="max-w-4xl mx-auto">
                <h2 class="text-5xl font-bold mb-12 text-center">"Sobre Mí"</h2>
                <p class="text-xl text-gray-300 leading-relaxed mb-16">{PROFILE.about}</p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill=*skill index /> })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillCategory, index: usize) -> impl IntoView {
    view! {
        <Reveal
            entrance=Entrance::rise(500).staggered(index)
            class="bg-gray-800/50 p-6 rounded-xl backdrop-blur-sm border border-gray-700"
        >
            <div class="text-center mb-4" data-skill-card=skill.name>
                <Icon glyph=skill.icon class="w-8 h-8 mb-4 mx-auto" />
                <h3 class="text-xl font-semibold mb-4">{skill.name}</h3>
            </div>
            <ul class="space-y-2">
                {skill
                    .items
                    .iter()
                    .map(|item| view! { <li class="text-gray-300 text-center">{*item}</li> })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}
