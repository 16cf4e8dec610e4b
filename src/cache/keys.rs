//! Cache Key Module
//!
//! Resolves which cache slot a request lands in.
//!
//! Auto-generated keys are path-derived: every distinct request path gets its
//! own slot. A literal key puts every request through the interceptor into one
//! slot. The counter policy from [`KeyGenerator`] also gives one slot per
//! interceptor, never per path, and its numbers restart with the process.
//!
//! All policies share one key space: a literal key spelled `"/other "` or
//! `"#0"` lands in the same slot as the derived or counter key it matches.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel key asking the interceptor to generate the key itself.
pub const AUTO_GENERATE_KEY: &str = "";

// == Key Policy ==
/// How an interceptor picks the cache key for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPolicy {
    /// The same caller-supplied key for every request
    Literal(String),
    /// The request path followed by a space delimiter
    PathDerived,
    /// A number assigned once when the interceptor was built
    Sequential(u64),
}

impl KeyPolicy {
    /// Picks the policy for a caller-supplied key.
    ///
    /// An empty key ([`AUTO_GENERATE_KEY`]) selects [`KeyPolicy::PathDerived`].
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == AUTO_GENERATE_KEY {
            KeyPolicy::PathDerived
        } else {
            KeyPolicy::Literal(key)
        }
    }

    // == Resolve ==
    /// Returns the key to use for a request with the given path.
    pub fn resolve(&self, path: &str) -> String {
        match self {
            KeyPolicy::Literal(key) => key.clone(),
            // Trailing space, so only literal keys ending in a space can match
            KeyPolicy::PathDerived => format!("{path} "),
            KeyPolicy::Sequential(index) => format!("#{index}"),
        }
    }

    /// Short policy name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            KeyPolicy::Literal(_) => "literal",
            KeyPolicy::PathDerived => "path",
            KeyPolicy::Sequential(_) => "sequential",
        }
    }
}

// == Key Generator ==
/// Hands out construction-order counter keys.
///
/// Each call to [`KeyGenerator::next_policy`] yields a fresh
/// [`KeyPolicy::Sequential`]. Numbering is local to the generator.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    next: AtomicU64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_policy(&self) -> KeyPolicy {
        KeyPolicy::Sequential(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

// == Cache Key ==
/// The resolved cache key, placed in request extensions before the
/// downstream handler runs.
///
/// Handlers read it with `Extension<CacheKey>`, e.g. to invalidate the slot
/// their output is about to land in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Name of the request-scoped slot holding the key.
    pub const CONTEXT_NAME: &'static str = "cacheKey";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_selects_path_policy() {
        assert_eq!(KeyPolicy::from_key(AUTO_GENERATE_KEY), KeyPolicy::PathDerived);
        assert_eq!(
            KeyPolicy::from_key("sampleKey"),
            KeyPolicy::Literal("sampleKey".to_string())
        );
    }

    #[test]
    fn test_literal_key_ignores_path() {
        let policy = KeyPolicy::from_key("sampleKey");
        assert_eq!(policy.resolve("/"), "sampleKey");
        assert_eq!(policy.resolve("/other"), "sampleKey");
    }

    #[test]
    fn test_path_keys_are_distinct_per_path() {
        let policy = KeyPolicy::PathDerived;
        let root = policy.resolve("/");
        let other = policy.resolve("/other");

        assert_ne!(root, other);
        assert_eq!(root, "/ ");
        // A literal key spelled like a path does not collide with the derived one
        assert_ne!(other, KeyPolicy::from_key("/other").resolve("/other"));
        // One spelled with the trailing space does
        assert_eq!(other, KeyPolicy::from_key("/other ").resolve("/"));
    }

    #[test]
    fn test_generator_counts_per_instance() {
        let generator = KeyGenerator::new();
        let first = generator.next_policy();
        let second = generator.next_policy();

        assert_eq!(first, KeyPolicy::Sequential(0));
        assert_eq!(second, KeyPolicy::Sequential(1));
        assert_eq!(first.resolve("/a"), first.resolve("/b"));
        assert_ne!(first.resolve("/a"), second.resolve("/a"));

        assert_eq!(KeyGenerator::new().next_policy(), KeyPolicy::Sequential(0));
    }

    #[test]
    fn test_cache_key_accessors() {
        let key = CacheKey::new("/ ");
        assert_eq!(key.as_str(), "/ ");
        assert_eq!(key.to_string(), "/ ");
        assert_eq!(key.into_inner(), "/ ");
        assert_eq!(CacheKey::CONTEXT_NAME, "cacheKey");
    }
}
