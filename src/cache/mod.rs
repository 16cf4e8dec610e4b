//! Cache Module
//!
//! In-memory response storage with TTL expiration, plus cache key policies.

mod entry;
mod keys;
mod lock;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{CacheEntry, Ttl, NO_EXPIRATION};
pub use keys::{CacheKey, KeyGenerator, KeyPolicy, AUTO_GENERATE_KEY};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Number of independently locked shards in a [`CacheStore`]
pub const SHARD_COUNT: usize = 16;
