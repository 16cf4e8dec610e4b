//! Response DTOs for the demo API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for an item lookup (GET /items/:id)
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: u32,
    pub name: String,
    /// Cache slot this response was stored under
    pub cache_key: String,
    /// Render time in ISO 8601 format
    pub rendered_at: String,
}

impl ItemResponse {
    /// Creates a new ItemResponse stamped with the current time
    pub fn new(id: u32, name: impl Into<String>, cache_key: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cache_key: cache_key.into(),
            rendered_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for cache invalidation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Outcome message
    pub message: String,
    /// The key that was targeted
    pub key: String,
    /// Whether an entry was actually removed
    pub removed: bool,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(key: impl Into<String>, removed: bool) -> Self {
        let key = key.into();
        let message = if removed {
            format!("Key '{}' invalidated", key)
        } else {
            format!("Key '{}' was not cached", key)
        };
        Self {
            message,
            key,
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of responses stored
    pub stores: u64,
    /// Number of expired entries swept
    pub expired_removed: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stores: stats.stores,
            expired_removed: stats.expired_removed,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
