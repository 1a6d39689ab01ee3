//! Web API module for BrandKit.
//!
//! This module provides a REST API for the brand studio, plus the embedded
//! single-page UI that drives it.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/vibes` - List vibes with their typography profiles
//! - `GET /api/palettes` - List preset palettes
//! - `GET /api/colors/{hex}` - Convert a hex color to rgb/hsl
//! - `POST /api/generate` - Generate logo variants and tagline ideas
//! - `POST /api/icon` - Generate a standalone icon
//! - `POST /api/export` - Assemble a brand kit
//! - `POST /api/export/zip` - Assemble a brand kit as a zip archive
//! - `GET /api/download/svg` - Download a text logo variant

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::branding;
use crate::config::Config;
use crate::generator::{GenerateError, GenerateResponse, Generator, IconRequest, IconResponse};
use crate::kit::{self, BrandKit, ColorSpec, ExportRequest};
use crate::models::brand::non_blank;
use crate::models::{BrandSpec, LogoLayout, Palette, PaletteSet, StyleProfile, Vibe};
use crate::openai::OpenAiClient;
use crate::render;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Logo and icon generator
    generator: Arc<Generator>,
    /// Preset palettes (immutable after load)
    palettes: Arc<PaletteSet>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// Without an API key the generator runs in fallback-only mode.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = OpenAiClient::from_config(&config.openai)?;
        Self::with_generator(config, Generator::new(client))
    }

    /// Creates a state around an existing generator.
    pub fn with_generator(config: Config, generator: Generator) -> anyhow::Result<Self> {
        let palettes = PaletteSet::load()?;
        Ok(Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
            palettes: Arc::new(palettes),
        })
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
    /// Whether AI generation is available.
    pub ai_enabled: bool,
}

/// Vibe list response.
#[derive(Debug, Serialize)]
pub struct VibeListResponse {
    /// All vibes, in display order.
    pub vibes: Vec<VibeInfo>,
}

/// Vibe information for API response.
#[derive(Debug, Serialize)]
pub struct VibeInfo {
    /// Vibe key (e.g., "brutalist").
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Typography profile.
    pub style: StyleProfile,
}

impl From<Vibe> for VibeInfo {
    fn from(vibe: Vibe) -> Self {
        Self {
            key: vibe.key(),
            label: vibe.label(),
            description: vibe.description(),
            style: vibe.profile(),
        }
    }
}

/// Palette list response.
#[derive(Debug, Serialize)]
pub struct PaletteListResponse {
    /// Preset palettes.
    pub palettes: Vec<Palette>,
}

/// Query parameters for SVG download.
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    /// Text variant id (e.g., "text-2").
    pub variant: String,
    /// Brand name to render.
    pub brand: String,
    /// Vibe key; unknown or missing keys render minimalist.
    pub vibe: Option<String>,
    /// Optional tagline (used by the stacked layout).
    pub tagline: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl From<GenerateError> for (StatusCode, Json<ApiError>) {
    fn from(err: GenerateError) -> Self {
        let status = match err {
            GenerateError::MissingName => StatusCode::BAD_REQUEST,
            GenerateError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiError::new(err.to_string())))
    }
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(message)))
}

/// Builds a file download response.
fn attachment(content_type: &'static str, file_name: &str, body: impl Into<axum::body::Body>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        )
        .body(body.into())
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: branding::version().to_string(),
        ai_enabled: state.generator.has_client(),
    })
}

/// GET /api/vibes - List all vibes.
async fn list_vibes() -> Json<VibeListResponse> {
    Json(VibeListResponse {
        vibes: Vibe::ALL.into_iter().map(VibeInfo::from).collect(),
    })
}

/// GET /api/palettes - List preset palettes.
async fn list_palettes(State(state): State<AppState>) -> Json<PaletteListResponse> {
    Json(PaletteListResponse {
        palettes: state.palettes.palettes.clone(),
    })
}

/// GET /api/colors/{hex} - Convert a color.
///
/// Malformed input converts to black rather than failing.
async fn convert_color(Path(hex): Path<String>) -> Json<ColorSpec> {
    Json(ColorSpec::from_hex(&hex))
}

/// POST /api/generate - Generate logo variants.
async fn generate(
    State(state): State<AppState>,
    Json(spec): Json<BrandSpec>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    let response = state.generator.generate(spec).await?;
    Ok(Json(response))
}

/// POST /api/icon - Generate a standalone icon.
async fn generate_icon(
    State(state): State<AppState>,
    Json(request): Json<IconRequest>,
) -> Result<Json<IconResponse>, (StatusCode, Json<ApiError>)> {
    let response = state.generator.generate_icon(request).await?;
    Ok(Json(response))
}

fn assemble_kit(request: &ExportRequest) -> Result<BrandKit, (StatusCode, Json<ApiError>)> {
    BrandKit::assemble(request, Utc::now()).map_err(|e| bad_request(e.to_string()))
}

/// POST /api/export - Assemble a brand kit.
async fn export_kit(
    Json(request): Json<ExportRequest>,
) -> Result<Json<BrandKit>, (StatusCode, Json<ApiError>)> {
    let kit = assemble_kit(&request)?;
    info!("Exported brand kit for '{}'", kit.brand_name);
    Ok(Json(kit))
}

/// POST /api/export/zip - Assemble a brand kit as a zip archive.
async fn export_kit_zip(
    Json(request): Json<ExportRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let kit = assemble_kit(&request)?;

    let bytes = kit::archive_bytes(&kit).map_err(|e| {
        error!("Failed to build kit archive: {e:#}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Failed to build archive",
                e.to_string(),
            )),
        )
    })?;

    Ok(attachment(
        "application/zip",
        &kit::archive_file_name(&kit),
        bytes,
    ))
}

/// GET /api/download/svg - Render a logo variant for download.
///
/// AI variant ids resolve to the text logo with the same layout, since the
/// hosted image is not kept by the server.
async fn download_svg(
    Query(query): Query<DownloadQuery>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let layout = LogoLayout::from_variant_id(&query.variant)
        .ok_or_else(|| bad_request(format!("Unknown variant: {}", query.variant)))?;
    let brand = non_blank(&query.brand).ok_or_else(|| bad_request("Brand name is required"))?;

    let vibe = Vibe::from_key_or_default(query.vibe.as_deref().unwrap_or_default());
    let tagline = query.tagline.as_deref().and_then(non_blank);
    let svg = render::render_text_logo(brand, tagline, vibe.key(), layout);

    let file_name = format!("{}-{}.svg", kit::slug(brand), kit::slug(layout.title()));
    Ok(attachment("image/svg+xml", &file_name, svg))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Reference data
        .route("/api/vibes", get(list_vibes))
        .route("/api/palettes", get(list_palettes))
        .route("/api/colors/{hex}", get(convert_color))
        // Generation
        .route("/api/generate", post(generate))
        .route("/api/icon", post(generate_icon))
        // Export
        .route("/api/export", post(export_kit))
        .route("/api/export/zip", post(export_kit_zip))
        .route("/api/download/svg", get(download_svg))
        // Studio UI
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the state cannot be built or the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    if !state.generator.has_client() {
        info!("No OpenAI API key configured; AI variants will use text fallbacks");
    }
    let app = create_router(state);

    info!("Starting {} web server on http://{}", branding::APP_DISPLAY_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
