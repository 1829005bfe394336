use axum::body::{Body, to_bytes};
use axum::http::header::LOCATION;
use axum::http::Request as HttpRequest;
use tower::ServiceExt;

use super::*;

const VIEW_MARKERS: [&str; 5] = ["page--home", "page--about", "page--projects", "page--contact", "page--not-found"];

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("portfolio").build()
}

async fn get_path(path: &str) -> (StatusCode, Option<String>, String) {
    let request = HttpRequest::builder().uri(path).body(Body::empty()).unwrap();
    let response = app(test_options()).oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8_lossy(&bytes).into_owned())
}

fn rendered_views(body: &str) -> Vec<&'static str> {
    VIEW_MARKERS.into_iter().filter(|marker| body.contains(marker)).collect()
}

// =============================================================
// Route table
// =============================================================

#[tokio::test]
async fn each_route_renders_exactly_its_own_view() {
    let cases = [
        ("/", "page--home"),
        ("/about", "page--about"),
        ("/projects", "page--projects"),
        ("/contact", "page--contact"),
    ];
    for (path, marker) in cases {
        let (status, _, body) = get_path(path).await;
        assert_eq!(status, StatusCode::OK, "path={path}");
        assert_eq!(rendered_views(&body), [marker], "path={path}");
        assert_eq!(body.matches(marker).count(), 1, "path={path}");
    }
}

#[tokio::test]
async fn unknown_paths_render_not_found_with_404() {
    for path in ["/blog", "/resume", "/contact.php"] {
        let (status, _, body) = get_path(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "path={path}");
        assert_eq!(rendered_views(&body), ["page--not-found"], "path={path}");
    }
}

#[tokio::test]
async fn trailing_slash_redirects_without_rendering_a_view() {
    for (path, expected) in [("/about/", "/about"), ("/projects//", "/projects"), ("/blog/", "/blog")] {
        let (status, location, body) = get_path(path).await;
        assert_eq!(status, StatusCode::PERMANENT_REDIRECT, "path={path}");
        assert_eq!(location.as_deref(), Some(expected), "path={path}");
        assert!(rendered_views(&body).is_empty(), "path={path}");
    }
}

#[tokio::test]
async fn missing_bundle_file_is_plain_404() {
    let (status, _, body) = get_path("/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(rendered_views(&body).is_empty());
}

// =============================================================
// Health probe
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let (status, _, body) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

// =============================================================
// trimmed_location
// =============================================================

#[test]
fn trimmed_location_leaves_canonical_paths_alone() {
    for path in ["/", "/about", "/pkg/portfolio.js"] {
        assert_eq!(trimmed_location(path, None), None, "path={path}");
    }
}

#[test]
fn trimmed_location_strips_every_trailing_slash() {
    assert_eq!(trimmed_location("/about/", None).as_deref(), Some("/about"));
    assert_eq!(trimmed_location("/contact///", None).as_deref(), Some("/contact"));
    assert_eq!(trimmed_location("//", None).as_deref(), Some("/"));
}

#[test]
fn trimmed_location_keeps_query() {
    assert_eq!(trimmed_location("/about/", Some("ref=nav")).as_deref(), Some("/about?ref=nav"));
}
