//! Cache Entry Module
//!
//! Defines a cached HTTP response and the TTL used when storing it.

use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use tokio::time::Instant;

// == Cache Entry ==
/// A captured response: body, status code and content type.
///
/// Entries are immutable once stored. The store hands them out behind an
/// `Arc`, so a reader always sees one complete entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Response body bytes
    pub body: Bytes,
    /// Response status code
    pub status: StatusCode,
    /// Content-Type header, None when the response had none
    pub content_type: Option<HeaderValue>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry from its three parts.
    pub fn new(
        body: impl Into<Bytes>,
        status: StatusCode,
        content_type: Option<HeaderValue>,
    ) -> Self {
        Self {
            body: body.into(),
            status,
            content_type,
        }
    }

    // == To Response ==
    /// Rebuilds the original response from the stored parts.
    ///
    /// Body and status are copied exactly. The Content-Type header is set only
    /// when one was captured.
    pub fn to_response(&self) -> Response {
        let mut response = Response::new(Body::from(self.body.clone()));
        *response.status_mut() = self.status;
        if let Some(content_type) = &self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type.clone());
        }
        response
    }
}

// == TTL ==
/// How long an entry stays retrievable after it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Entry expires once the duration has elapsed
    Expires(Duration),
    /// Entry lives until overwritten, removed or the store is dropped
    Never,
}

/// Sentinel TTL meaning "never expire".
pub const NO_EXPIRATION: Ttl = Ttl::Never;

impl Ttl {
    /// Shorthand for `Ttl::Expires(Duration::from_secs(secs))`.
    pub fn from_secs(secs: u64) -> Self {
        Ttl::Expires(Duration::from_secs(secs))
    }

    // == Deadline ==
    /// Returns the instant at which an entry stored at `now` expires.
    ///
    /// A deadline too far in the future to represent is treated as never.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        match self {
            Ttl::Expires(ttl) => now.checked_add(*ttl),
            Ttl::Never => None,
        }
    }
}

impl From<Duration> for Ttl {
    fn from(ttl: Duration) -> Self {
        Ttl::Expires(ttl)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_to_response_restores_all_parts() {
        let entry = CacheEntry::new(
            "{\"hello\":\"world\"}",
            StatusCode::CREATED,
            Some(HeaderValue::from_static("application/json")),
        );

        let response = entry.to_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"{\"hello\":\"world\"}");
    }

    #[test]
    fn test_to_response_without_content_type() {
        let entry = CacheEntry::new(Bytes::new(), StatusCode::NO_CONTENT, None);

        let response = entry.to_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_ttl_deadline() {
        let now = Instant::now();

        assert_eq!(
            Ttl::from_secs(2).deadline(now),
            Some(now + Duration::from_secs(2))
        );
        assert_eq!(NO_EXPIRATION.deadline(now), None);
    }

    #[test]
    fn test_ttl_deadline_overflow_is_never() {
        let now = Instant::now();
        assert_eq!(Ttl::Expires(Duration::MAX).deadline(now), None);
    }
}
