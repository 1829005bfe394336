//! Sticky top bar with the site name, route links, and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every routed view. The toggle is the only writer of
//! `UiState::theme` after startup.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::PROFILE;
use crate::routes::View;
use crate::state::ui::UiState;
use crate::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.with_untracked(|u| u.theme));
        let applied = theme::browser::commit(next);
        ui.update(|u| u.theme = applied);
    };

    let active = Memo::new(move |_| location.pathname.with(|path| View::from_path(path)));

    let links = View::ALL
        .into_iter()
        .map(move |target| {
            let current = move || active.get() == Some(target);
            view! {
                <a
                    href=target.path()
                    class="navbar__link"
                    class:navbar__link--active=current
                    aria-current=move || current().then_some("page")
                >
                    {target.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href=View::Home.path() class="navbar__brand">{PROFILE.name}</a>
                <div class="navbar__links">
                    {links}
                    <button
                        class="btn navbar__theme-toggle"
                        on:click=on_toggle
                        title="Toggle dark mode"
                        aria-pressed=move || if ui.with(UiState::dark_mode) { "true" } else { "false" }
                    >
                        {move || ui.with(|u| u.theme.icon())}
                    </button>
                </div>
            </div>
        </nav>
    }
}
