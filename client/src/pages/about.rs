//! Biography page.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h2 class="page__title">"About Me"</h2>
            <p class="page__body">{PROFILE.about}</p>
        </section>
    }
}
