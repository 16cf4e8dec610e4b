//! Middleware Module
//!
//! The caching interceptor and the factory that builds it.
//!
//! # Usage
//! ```ignore
//! let cache = ResponseCache::new(Config::default());
//! let app = Router::new()
//!     .route("/", get(index).layer(cache.layer()))
//!     .route("/report", get(report).layer(cache.layer_with_key("report")));
//! ```

mod factory;
mod layer;

pub use factory::ResponseCache;
pub use layer::{CacheLayer, CacheService};
