//! Response Cache - HTTP response caching middleware for axum
//!
//! Serves stored responses for a derived or caller-supplied key, and stores
//! fresh responses (body, status, content type) with a bounded TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod tasks;

pub use cache::{
    CacheEntry, CacheKey, CacheStore, KeyGenerator, KeyPolicy, Ttl, AUTO_GENERATE_KEY,
    NO_EXPIRATION,
};
pub use config::Config;
pub use error::DownstreamFailure;
pub use middleware::{CacheLayer, ResponseCache};
pub use tasks::spawn_cleanup_task;
