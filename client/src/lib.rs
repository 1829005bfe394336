//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! Four static views behind client-side routing, plus a light/dark theme
//! whose preference is resolved from `localStorage` or the platform color
//! scheme and persisted on every toggle. The `ssr` feature builds the
//! server-rendered side; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod routes;
pub mod state;
pub mod theme;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
