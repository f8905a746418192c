//! Axum Server Module
//!
//! HTML pages + JSON API over the in-memory catalog. The catalog is loaded
//! once at startup and shared read-only; every request passes its own query
//! and zone selection into the pure search function.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::embedding::build_embedding_text;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::home_page))
        .route("/search", get(pages::search_page))
        .route("/plant/:slug", get(pages::plant_page))

        // Health check
        .route("/health", get(health_check))

        // Plant endpoints (JSON API)
        .route("/api/plants/search", get(search_plants_api))
        .route("/api/plants/:slug", get(get_plant))
        .route("/api/plants/:slug/embedding-text", get(get_embedding_text))

        // Static assets (stylesheet)
        .nest_service("/static", ServeDir::new("static"))

        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Shared by the HTML search routes and the JSON search endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Raw zone value; "" from the "Alle soner" option means no filter
    pub zone: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// Empty and non-numeric values mean "no zone filter"; out-of-range
    /// numbers pass through and fall out naturally in the membership test.
    pub fn zone(&self) -> Option<u8> {
        self.zone
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
    }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn search_plants_api(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<serde_json::Value> {
    let start = std::time::Instant::now();
    let results = state.catalog.search(params.query(), params.zone());
    let elapsed = start.elapsed();

    tracing::debug!(
        "search '{}' (zone: {:?}) returned {} results in {:?}",
        params.query(),
        params.zone(),
        results.len(),
        elapsed
    );

    Json(serde_json::json!({
        "rows": results.len(),
        "data": results,
    }))
}

async fn get_plant(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<crate::plant::Plant>, AppError> {
    state
        .catalog
        .by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no plant with slug '{}'", slug)))
}

async fn get_embedding_text(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let plant = state
        .catalog
        .by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("no plant with slug '{}'", slug)))?;

    Ok(Json(serde_json::json!({
        "slug": plant.slug,
        "embedding_text": build_embedding_text(plant),
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
