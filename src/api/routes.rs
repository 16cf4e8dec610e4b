//! API Routes
//!
//! Configures the Axum router, attaching cache layers to the demo endpoints.

use std::time::Duration;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, index_handler, invalidate_handler, item_handler, json_handler,
    other_handler, report_handler, stats_handler, AppState,
};

/// Literal cache key used by `GET /report`
pub const REPORT_CACHE_KEY: &str = "report";

/// TTL of the `GET /report` cache slot
pub const REPORT_TTL: Duration = Duration::from_secs(2);

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /`, `GET /other`, `GET /json` - cached per path, default TTL
/// - `GET /report` - cached under `report` for two seconds
/// - `GET /items/:id` - cached per path, failures are not cached
/// - `DELETE /cache` - Invalidate one cached response
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cache = &state.cache;

    Router::new()
        .route("/", get(index_handler).layer(cache.layer()))
        .route("/other", get(other_handler).layer(cache.layer()))
        .route("/json", get(json_handler).layer(cache.layer()))
        .route(
            "/report",
            get(report_handler)
                .layer(cache.layer_with_key_and_ttl(REPORT_CACHE_KEY, REPORT_TTL)),
        )
        .route("/items/:id", get(item_handler).layer(cache.layer()))
        .route("/cache", delete(invalidate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::from_config(&Config::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_report_is_cached_under_literal_key() {
        let state = AppState::from_config(&Config::default());
        let app = create_router(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/report")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.cache.store().get(REPORT_CACHE_KEY).is_some());
    }

    #[tokio::test]
    async fn test_item_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
