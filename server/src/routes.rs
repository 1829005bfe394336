//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR routes generated from the client `App`, the compiled
//! WASM/CSS bundle under `/pkg`, and a health probe under a single Axum
//! router. Paths outside the route table fall through to the Leptos
//! file-and-error handler, which renders the app's not-found view.
//!
//! Route matching is exact. A path with a trailing slash (other than `/`) is
//! permanently redirected to its trimmed form before it can reach the
//! fallback, so `/about/` never renders a view under a 404 status.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portfolio_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: SSR pages, static bundle, and health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join(leptos_options.site_pkg_dir.as_ref())))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware::from_fn(redirect_trailing_slash))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Canonical location for a path ending in `/`, or `None` when the path is
/// already canonical.
fn trimmed_location(path: &str, query: Option<&str>) -> Option<String> {
    if path == "/" || !path.ends_with('/') {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    Some(match query {
        Some(q) => format!("{trimmed}?{q}"),
        None => trimmed.to_owned(),
    })
}

async fn redirect_trailing_slash(request: Request, next: Next) -> Response {
    if let Some(location) = trimmed_location(request.uri().path(), request.uri().query()) {
        tracing::debug!(from = %request.uri(), to = %location, "redirecting trailing slash");
        return Redirect::permanent(&location).into_response();
    }
    next.run(request).await
}
