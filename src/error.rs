//! Error types for the demo handlers
//!
//! Provides unified error handling using thiserror. Handler errors become JSON
//! responses tagged with [`DownstreamFailure`] so the cache layer never stores
//! them.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Downstream Failure Marker ==
/// Response extension marking a response produced by a failed handler.
///
/// The cache layer passes such responses through untouched and does not
/// store them. Any error type can opt in by inserting this marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownstreamFailure;

impl DownstreamFailure {
    /// Tags `response` as coming from a failed handler.
    pub fn mark(mut response: Response) -> Response {
        response.extensions_mut().insert(DownstreamFailure);
        response
    }

    /// Returns true if `response` carries the marker.
    pub fn is_marked(response: &Response) -> bool {
        response.extensions().get::<DownstreamFailure>().is_some()
    }
}

// == App Error Enum ==
/// Unified error type for the demo handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// An extractor could not parse the request
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Rejected { status, message } => (*status, message.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        DownstreamFailure::mark((status, body).into_response())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the demo handlers.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_is_marked() {
        let response = AppError::NotFound("item 7".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(DownstreamFailure::is_marked(&response));
    }

    #[test]
    fn test_plain_response_is_not_marked() {
        let response = (StatusCode::NOT_FOUND, "missing").into_response();
        assert!(!DownstreamFailure::is_marked(&response));
    }

    #[tokio::test]
    async fn test_path_rejection_keeps_status_and_is_marked() {
        use axum::{extract::Path, http::Request, routing::get, Router};
        use tower::ServiceExt;

        let app = Router::new().route(
            "/items/:id",
            get(|id: std::result::Result<Path<u32>, PathRejection>| async move {
                let Path(id) = id.map_err(AppError::from)?;
                Ok::<_, AppError>(id.to_string())
            }),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/abc")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(DownstreamFailure::is_marked(&response));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
