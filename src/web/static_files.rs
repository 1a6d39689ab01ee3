//! Static file serving for the BrandKit studio UI.
//!
//! The studio is a single page embedded in the binary at compile time, so the
//! server has no runtime file dependencies.

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::Path;

/// Embedded studio files from the `web/` directory.
#[derive(Embed)]
#[folder = "web/"]
pub struct StaticAssets;

/// Serves embedded files, falling back to `index.html` for page routes.
///
/// Paths that look like files (have an extension) and are not embedded get a
/// 404, as do unknown `/api/` paths.
pub async fn serve_static(request: Request) -> Response {
    let path = request.uri().path().trim_start_matches('/');

    if path.is_empty() {
        return serve_file("index.html");
    }

    if let Some(content) = StaticAssets::get(path) {
        return file_response(path, content.data.as_ref());
    }

    let looks_like_file = Path::new(path)
        .extension()
        .is_some_and(|ext| !ext.is_empty());

    if looks_like_file || path.starts_with("api/") {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    serve_file("index.html")
}

fn serve_file(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// HTML always revalidates; other assets cache for an hour.
fn cache_control_for_path(path: &str) -> &'static str {
    if Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
    {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(
            cache_control_for_path("index.html"),
            "no-cache, must-revalidate"
        );
        assert_eq!(cache_control_for_path("studio.js"), "public, max-age=3600");
        assert_eq!(cache_control_for_path("studio.css"), "public, max-age=3600");
    }

    #[test]
    fn test_studio_is_embedded() {
        assert!(StaticAssets::get("index.html").is_some());
        assert!(StaticAssets::get("studio.js").is_some());
    }
}
