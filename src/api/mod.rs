//! API Module
//!
//! HTTP handlers and routing for the demo server.
//!
//! # Endpoints
//! - `GET /`, `/other`, `/json`, `/report`, `/items/:id` - Cached demo content
//! - `DELETE /cache` - Invalidate a cached response
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::{AppJson, AppPath};
pub use handlers::*;
pub use routes::create_router;
