//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::content::PROFILE;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage, projects::ProjectsPage,
};
use crate::routes::View;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state context, applies the stored theme once hydrated, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let theme = crate::theme::browser::startup();
            ui.update(|u| u.theme = theme);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PROFILE.name/>

        <Router>
            <Navbar/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment(View::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(View::About.segment()) view=AboutPage/>
                    <Route path=StaticSegment(View::Projects.segment()) view=ProjectsPage/>
                    <Route path=StaticSegment(View::Contact.segment()) view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
