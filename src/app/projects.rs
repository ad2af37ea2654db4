use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};
use crate::motion::Entrance;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-32 px-4 md:px-20 bg-gray-800/50 backdrop-blur-sm">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-5xl font-bold mb-16 text-center">"Proyectos"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <Reveal
            entrance=Entrance::rise(500).staggered(index)
            class="bg-gray-900/80 rounded-xl overflow-hidden border border-gray-700 hover:border-indigo-500 transition-colors"
        >
            <article data-project-card=index.to_string()>
                <div class="relative">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-48 object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent" />
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                    <p class="text-gray-300 mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span
                                        class="px-3 py-1 bg-indigo-900/50 rounded-full text-sm"
                                        data-tag=*tag
                                    >
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center text-indigo-400 hover:text-indigo-300 transition-transform duration-200 hover:translate-x-[5px]"
                    >
                        <Icon glyph=Glyph::Github class="w-5 h-5 mr-2" />
                        "Ver en GitHub"
                    </a>
                </div>
            </article>
        </Reveal>
    }
}
