//! Router fallback for paths outside the route table.
//!
//! On the server the response status is set to 404 so crawlers do not index
//! unknown paths as real pages.

use leptos::prelude::*;

use crate::routes::View;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="page page--not-found">
            <h2 class="page__title">"Page not found."</h2>
            <p class="page__body">
                <a href=View::Home.path()>"Back to home"</a>
            </p>
        </section>
    }
}
