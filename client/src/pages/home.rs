//! Landing page.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1 class="page__headline">{PROFILE.headline}</h1>
            <p class="page__lead">{PROFILE.intro}</p>
        </section>
    }
}
