//! Request DTOs for the demo API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::KeyPolicy;

/// Request body for cache invalidation (DELETE /cache)
///
/// # Fields
/// - `key`: A literal cache key to remove
/// - `path`: A request path whose path-derived key should be removed
///
/// Exactly one of the two must be given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidateRequest {
    /// Literal cache key
    #[serde(default)]
    pub key: Option<String>,
    /// Request path for a path-derived key
    #[serde(default)]
    pub path: Option<String>,
}

impl InvalidateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match (&self.key, &self.path) {
            (Some(_), Some(_)) => Some("Specify either key or path, not both".to_string()),
            (None, None) => Some("Either key or path is required".to_string()),
            (Some(key), None) if key.is_empty() => Some("Key cannot be empty".to_string()),
            (None, Some(path)) if !path.starts_with('/') => {
                Some("Path must start with '/'".to_string())
            }
            _ => None,
        }
    }

    /// Returns the cache key this request targets.
    pub fn cache_key(&self) -> Option<String> {
        match (&self.key, &self.path) {
            (Some(key), None) => Some(key.clone()),
            (None, Some(path)) => Some(KeyPolicy::PathDerived.resolve(path)),
            _ => None,
        }
    }
}
