//! Web API module for ShadeGen.
//!
//! This module provides a small REST API so a browser frontend can request
//! shade scales and rendered exports without shelling out to the CLI.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/shades?color=<hex>` - Shade scale for a base color
//! - `GET /api/export?color=<hex>&name=<title>&format=<fmt>` - Rendered export text
//! - `GET /api/palette` - Shade scales for every configured role

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cli::common::parse_hex_arg;
use crate::config::{ColorRole, Config};
use crate::export::{variable_prefix, ExportFormat};
use crate::models::{ColorGroup, Shade};
use crate::palette::generate_shades;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (immutable after load)
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for shade generation.
#[derive(Debug, Deserialize)]
pub struct ShadeQuery {
    /// Base color hex (with or without the leading '#').
    pub color: String,
}

/// Shade scale response.
#[derive(Debug, Serialize)]
pub struct ShadeScaleResponse {
    /// Base color hex the scale was derived from.
    pub base: String,
    /// Shades ordered from lightest to darkest.
    pub shades: Vec<Shade>,
}

/// Query parameters for export rendering.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Base color hex (with or without the leading '#').
    pub color: String,
    /// Palette name used as the variable prefix (defaults to "Palette").
    pub name: Option<String>,
    /// Output format (defaults to the configured format).
    pub format: Option<String>,
}

/// Rendered export response.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Format the content was rendered in.
    pub format: String,
    /// Suggested filename for a download.
    pub filename: String,
    /// Rendered export text.
    pub content: String,
}

/// One configured role with its shade scale.
#[derive(Debug, Serialize)]
pub struct RoleScale {
    /// Role name (e.g., "primary").
    pub role: String,
    /// Configured base color hex.
    pub base: String,
    /// Shades ordered from lightest to darkest.
    pub shades: Vec<Shade>,
}

/// Palette response covering every configured role.
#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// Role scales in display order.
    pub roles: Vec<RoleScale>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Handlers
// ============================================================================

/// `GET /health`
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/shades?color=<hex>`
async fn get_shades(Query(query): Query<ShadeQuery>) -> ApiResult<ShadeScaleResponse> {
    let base = parse_hex_arg(&query.color)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiError::new(e))))?;

    Ok(Json(ShadeScaleResponse {
        base: base.to_hex(),
        shades: generate_shades(base),
    }))
}

/// `GET /api/export?color=<hex>&name=<title>&format=<fmt>`
async fn get_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<ExportResponse> {
    let base = parse_hex_arg(&query.color)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiError::new(e))))?;

    let format: ExportFormat = match &query.format {
        Some(value) => value
            .parse()
            .map_err(|e: String| (StatusCode::BAD_REQUEST, Json(ApiError::new(e))))?,
        None => state.config.export.default_format,
    };

    let title = query.name.as_deref().unwrap_or("Palette");
    let group = ColorGroup::new(title, base, generate_shades(base));

    Ok(Json(ExportResponse {
        format: format.to_string(),
        filename: format!("{}.{}", variable_prefix(title), format.extension()),
        content: format.render(&group),
    }))
}

/// `GET /api/palette`
async fn get_palette(State(state): State<AppState>) -> Json<PaletteResponse> {
    let roles = ColorRole::all()
        .into_iter()
        .map(|role| {
            let base = state.config.roles.get(role);
            RoleScale {
                role: role.to_string(),
                base: base.to_hex(),
                shades: generate_shades(base),
            }
        })
        .collect();

    Json(PaletteResponse { roles })
}

// ============================================================================
// Router
// ============================================================================

/// Builds the API router with CORS and request tracing layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/shades", get(get_shades))
        .route("/api/export", get(get_export))
        .route("/api/palette", get(get_palette))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Starts the web API server on the given address.
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("ShadeGen web API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
