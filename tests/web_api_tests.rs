//! Integration tests for the BrandKit Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::{Body, Bytes},
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use brandkit::config::Config;
use brandkit::web::{create_router, AppState};

/// Creates a router backed by a config without an API key.
fn create_test_app() -> axum::Router {
    let state = AppState::new(Config::new()).expect("Failed to create app state");
    create_router(state)
}

/// Helper to send a request and collect the raw response.
async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Option<String>, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body)
}

/// Helper to make a GET request and parse the JSON response.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Helper to make a POST request with a JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let (status, _, body) = post_raw(app, uri, body).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_raw(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Option<String>, Bytes) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

fn ocean_spec(name: &str) -> Value {
    json!({
        "name": name,
        "vibe": "brutalist",
        "palette": { "name": "Ocean", "primary": "#0ea5e9", "accent": "#06b6d4" },
        "memeMode": false,
        "wantIcon": false
    })
}

// ============================================================================
// Health and Reference Data
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["aiEnabled"], false);
}

#[tokio::test]
async fn test_list_vibes() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/vibes").await;

    assert_eq!(status, StatusCode::OK);
    let vibes = json["vibes"].as_array().unwrap();
    assert_eq!(vibes.len(), 6);
    assert_eq!(vibes[0]["key"], "minimalist");
    assert_eq!(vibes[4]["key"], "brutalist");
    assert_eq!(vibes[4]["style"]["fontFamily"], "Arial Black, sans-serif");
    assert_eq!(vibes[4]["style"]["fontWeight"], "900");
    assert_eq!(vibes[4]["style"]["textCase"], "uppercase");
}

#[tokio::test]
async fn test_list_palettes() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/palettes").await;

    assert_eq!(status, StatusCode::OK);
    let palettes = json["palettes"].as_array().unwrap();
    assert_eq!(palettes.len(), 6);
    assert_eq!(palettes[0]["name"], "Monochrome");
    assert_eq!(palettes[3]["accent"], "#f97316");
}

#[tokio::test]
async fn test_convert_color() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/colors/%23f97316").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hex"], "#f97316");
    assert_eq!(json["rgb"], "rgb(249, 115, 22)");
    assert_eq!(json["hsl"], "hsl(25, 95%, 53%)");
}

#[tokio::test]
async fn test_convert_color_without_hash_and_malformed() {
    let app = create_test_app();

    let (_, json) = get_json(&app, "/api/colors/0000FF").await;
    assert_eq!(json["hsl"], "hsl(240, 100%, 50%)");

    let (status, json) = get_json(&app, "/api/colors/zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rgb"], "rgb(0, 0, 0)");
    assert_eq!(json["hsl"], "hsl(0, 0%, 0%)");
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_generate_without_key_uses_fallbacks() {
    let app = create_test_app();
    let (status, json) = post_json(&app, "/api/generate", &ocean_spec("Acme")).await;

    assert_eq!(status, StatusCode::OK);

    let text = json["textVariants"].as_array().unwrap();
    assert_eq!(text.len(), 3);
    assert_eq!(text[0]["id"], "text-1");
    assert!(text[0]["svg"].as_str().unwrap().contains(">ACME</text>"));
    assert_eq!(text[0]["style"]["color"], "#0ea5e9");
    assert_eq!(text[2]["style"]["color"], "#06b6d4");
    assert_eq!(text[1]["style"]["fontSize"], "36px");

    let ai = json["aiVariants"].as_array().unwrap();
    assert_eq!(ai.len(), 3);
    assert_eq!(ai[0]["id"], "ai-1");
    assert_eq!(ai[0]["name"], "AI Horizontal");
    assert_eq!(ai[0]["svg"], text[0]["svg"]);

    assert_eq!(json["variants"], json["textVariants"]);
    assert_eq!(json["suggestedTaglines"], json!([]));
    assert_eq!(json["brandSpec"]["name"], "Acme");
}

#[tokio::test]
async fn test_generate_blank_name_rejected() {
    let app = create_test_app();
    let (status, json) = post_json(&app, "/api/generate", &ocean_spec("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Brand name is required");
}

#[tokio::test]
async fn test_generate_missing_fields_use_defaults() {
    let app = create_test_app();
    let (status, json) = post_json(&app, "/api/generate", &json!({ "name": "Zed" })).await;

    assert_eq!(status, StatusCode::OK);
    // Unknown (empty) vibe renders minimalist
    assert!(json["textVariants"][0]["svg"]
        .as_str()
        .unwrap()
        .contains(">zed</text>"));
    assert_eq!(json["textVariants"][0]["style"]["color"], "#000000");
}

#[tokio::test]
async fn test_icon_without_key() {
    let app = create_test_app();
    let (status, json) = post_json(
        &app,
        "/api/icon",
        &json!({ "brandName": "Acme", "vibe": "rounded" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "OpenAI API key not configured");
}

// ============================================================================
// Export
// ============================================================================

async fn generated_variants(app: &axum::Router) -> Value {
    let (_, json) = post_json(app, "/api/generate", &ocean_spec("Acme")).await;
    json["textVariants"].clone()
}

fn export_body(name: &str, variants: Value) -> Value {
    json!({
        "brandName": name,
        "variants": variants,
        "palette": { "name": "Ocean", "primary": "#0ea5e9", "accent": "#06b6d4" },
        "vibe": "brutalist",
        "tagline": "Build different"
    })
}

#[tokio::test]
async fn test_export_kit() {
    let app = create_test_app();
    let variants = generated_variants(&app).await;
    let (status, json) = post_json(&app, "/api/export", &export_body("Acme", variants)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["brandName"], "Acme");
    assert_eq!(json["tagline"], "Build different");
    assert_eq!(json["colors"]["primary"]["rgb"], "rgb(14, 165, 233)");
    assert_eq!(json["typography"]["weights"], json!(["700", "800", "900"]));
    assert_eq!(json["logos"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["logos"][0]["downloadUrls"]["svg"],
        "/api/download/svg?variant=text-1&brand=Acme&vibe=brutalist&tagline=Build+different"
    );
    assert!(json["assets"]["favicon"].as_str().unwrap().contains(">A</text>"));
    assert!(json["generatedAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_export_requires_name_and_variants() {
    let app = create_test_app();
    let variants = generated_variants(&app).await;

    let (status, json) = post_json(&app, "/api/export", &export_body(" ", variants)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Brand name and variants are required");

    let (status, _) = post_json(&app, "/api/export", &export_body("Acme", json!([]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_zip() {
    let app = create_test_app();
    let variants = generated_variants(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/export/zip")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&export_body("Acme Labs", variants)).unwrap(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/zip");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"acme-labs-brand-kit.zip\""
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(body.to_vec())).unwrap();
    assert!(archive.by_name("brand-kit.json").is_ok());
    assert!(archive.by_name("logos/stacked.svg").is_ok());
    assert!(archive.by_name("social-card.svg").is_ok());
}

#[tokio::test]
async fn test_download_svg() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/download/svg?variant=text-2&brand=Acme&vibe=elegant&tagline=Fine+things")
        .body(Body::empty())
        .unwrap();
    let (status, content_type, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    let svg = String::from_utf8(body.to_vec()).unwrap();
    assert!(svg.contains(r#"width="300" height="120""#));
    assert!(svg.contains("Playfair Display, serif"));
    assert!(svg.contains(">FINE THINGS</text>"));
}

#[tokio::test]
async fn test_download_svg_rejects_bad_input() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/download/svg?variant=ai-9&brand=Acme").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unknown variant: ai-9");

    let (status, json) = get_json(&app, "/api/download/svg?variant=text-1&brand=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Brand name is required");
}

#[tokio::test]
async fn test_kit_download_urls_resolve() {
    let app = create_test_app();
    let (_, generated) = post_json(&app, "/api/generate", &ocean_spec("Acme")).await;

    let mut variants = generated["textVariants"].as_array().unwrap().clone();
    variants.extend(generated["aiVariants"].as_array().unwrap().iter().cloned());

    let (status, kit) = post_json(&app, "/api/export", &export_body("Acme", json!(variants))).await;
    assert_eq!(status, StatusCode::OK);

    let logos = kit["logos"].as_array().unwrap();
    assert_eq!(logos.len(), 6);
    assert_eq!(
        logos[3]["downloadUrls"]["svg"],
        "/api/download/svg?variant=ai-1&brand=Acme&vibe=brutalist&tagline=Build+different"
    );

    for logo in logos {
        let uri = logo["downloadUrls"]["svg"].as_str().unwrap();
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, content_type, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(String::from_utf8_lossy(&body).contains(">ACME</text>"), "GET {uri}");
    }
}

// ============================================================================
// Studio UI
// ============================================================================

#[tokio::test]
async fn test_static_index_served() {
    let app = create_test_app();
    for uri in ["/", "/studio"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, content_type, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(String::from_utf8_lossy(&body).contains("BrandKit Studio"));
    }
}

#[tokio::test]
async fn test_static_missing_file_and_api_path() {
    let app = create_test_app();
    for uri in ["/missing.png", "/api/unknown"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, _, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
    }
}
