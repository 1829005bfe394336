//! Project list page.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content::PROJECTS;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="page page--projects">
            <h2 class="page__title">"Projects"</h2>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </div>
        </section>
    }
}
