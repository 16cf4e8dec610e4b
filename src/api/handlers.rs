//! API Handlers
//!
//! Demo handlers placed behind the cache layer, plus uncached cache
//! administration endpoints.

use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use super::extract::{AppJson, AppPath};
use crate::cache::CacheKey;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::middleware::ResponseCache;
use crate::models::{
    HealthResponse, InvalidateRequest, InvalidateResponse, ItemResponse, StatsResponse,
};

/// Item names served by `GET /items/:id`, indexed by `id - 1`.
const ITEMS: [&str; 3] = ["anvil", "bellows", "crucible"];

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: ResponseCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: ResponseCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with a fresh cache built from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResponseCache::new(*config))
    }
}

/// Handler for GET /
///
/// Cached under its path-derived key.
pub async fn index_handler() -> String {
    format!("Hello from the index, rendered at {}", chrono::Utc::now().to_rfc3339())
}

/// Handler for GET /other
///
/// Shares the same layer type as `/` but lands in its own slot.
pub async fn other_handler() -> String {
    format!("Hello from /other, rendered at {}", chrono::Utc::now().to_rfc3339())
}

/// Handler for GET /json
pub async fn json_handler() -> Json<Value> {
    Json(json!({
        "hello": "world",
        "rendered_at": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler for GET /report
///
/// Cached under the literal key `report` with a short TTL.
pub async fn report_handler(Extension(key): Extension<CacheKey>) -> Json<Value> {
    Json(json!({
        "report": "daily",
        "cache_key": key.as_str(),
        "rendered_at": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler for GET /items/:id
///
/// Unknown ids fail with 404 and malformed ids with 400. Neither is stored
/// by the cache layer.
pub async fn item_handler(
    AppPath(id): AppPath<u32>,
    Extension(key): Extension<CacheKey>,
) -> Result<Json<ItemResponse>> {
    let name = id
        .checked_sub(1)
        .and_then(|index| ITEMS.get(index as usize))
        .ok_or_else(|| AppError::NotFound(format!("Item {} does not exist", id)))?;

    Ok(Json(ItemResponse::new(id, *name, key.into_inner())))
}

/// Handler for DELETE /cache
///
/// Removes one cached response by literal key or by request path.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    AppJson(req): AppJson<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }
    let key = req
        .cache_key()
        .ok_or_else(|| AppError::Internal("Validated request has no key".to_string()))?;

    let removed = state.cache.store().remove(&key);
    tracing::info!(key = %key, removed, "Cache entry invalidated");

    Ok(Json(InvalidateResponse::new(key, removed)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.store().stats()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
