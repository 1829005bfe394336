//! Card summarizing one portfolio project.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <p class="project-card__tech">"Tech: " {project.tech_line()}</p>
        </article>
    }
}
