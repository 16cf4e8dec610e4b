//! Cache Layer
//!
//! Tower layer that serves stored responses on a hit and captures the
//! downstream response on a miss.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheKey, CacheStore, KeyPolicy, Ttl};
use crate::error::DownstreamFailure;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

// == Cache Layer ==
/// Wraps a service with response caching.
///
/// Built through [`ResponseCache`](super::ResponseCache). The key policy and
/// TTL are fixed for the lifetime of the layer.
#[derive(Debug, Clone)]
pub struct CacheLayer {
    store: Arc<CacheStore>,
    policy: KeyPolicy,
    ttl: Ttl,
}

impl CacheLayer {
    pub(crate) fn new(store: Arc<CacheStore>, policy: KeyPolicy, ttl: Ttl) -> Self {
        Self { store, policy, ttl }
    }

    /// Key policy this layer resolves keys with.
    pub fn policy(&self) -> &KeyPolicy {
        &self.policy
    }

    /// TTL applied to responses this layer stores.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }
}

impl<S> Layer<S> for CacheLayer {
    type Service = CacheService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CacheService {
            inner,
            store: Arc::clone(&self.store),
            policy: self.policy.clone(),
            ttl: self.ttl,
        }
    }
}

// == Cache Service ==
/// Service produced by [`CacheLayer`].
///
/// Only `GET` requests are cached; every other method goes straight to the
/// inner service with no lookup and no store. A `GET` does one store lookup.
/// On a hit the stored response is returned and the inner service is not
/// called. On a miss the resolved key is put in
/// the request extensions as a [`CacheKey`], the inner service runs, and its
/// response is stored unless it failed.
#[derive(Debug, Clone)]
pub struct CacheService<S> {
    inner: S,
    store: Arc<CacheStore>,
    policy: KeyPolicy,
    ttl: Ttl,
}

impl<S> Service<Request<Body>> for CacheService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        // The ready service is taken, a fresh clone stays behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if request.method() != Method::GET {
            debug!(method = %request.method(), "Bypassing cache for non-GET request");
            return Box::pin(inner.call(request));
        }

        let key = self.policy.resolve(request.uri().path());
        let store = Arc::clone(&self.store);
        let ttl = self.ttl;

        Box::pin(async move {
            if let Some(entry) = store.get(&key) {
                debug!(key = %key, outcome = "hit", "Serving cached response");
                return Ok(entry.to_response());
            }

            debug!(key = %key, outcome = "miss", "Cache miss, running handler");
            request.extensions_mut().insert(CacheKey::new(key.clone()));

            // Errors propagate unchanged and nothing is stored
            let response = inner.call(request).await?;
            Ok(capture(&store, key, ttl, response).await)
        })
    }
}

// == Capture ==
/// Snapshots a downstream response into the store and hands back an
/// equivalent response.
async fn capture(store: &CacheStore, key: String, ttl: Ttl, response: Response) -> Response {
    if DownstreamFailure::is_marked(&response) {
        debug!(key = %key, status = %response.status(), "Handler failed, not caching");
        return response;
    }

    let (parts, body) = response.into_parts();
    let body = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "Failed to collect response body, not caching");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let entry = CacheEntry::new(
        body.clone(),
        parts.status,
        parts.headers.get(header::CONTENT_TYPE).cloned(),
    );
    debug!(key = %key, status = %parts.status, bytes = body.len(), "Storing response");
    store.set(key, entry, ttl);

    Response::from_parts(parts, Body::from(body))
}
