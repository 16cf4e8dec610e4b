//! Response Cache Factory
//!
//! Builds cache layers that share one store and one configuration.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStore, KeyPolicy, Ttl, AUTO_GENERATE_KEY};
use crate::config::Config;
use crate::middleware::CacheLayer;
use crate::tasks::spawn_cleanup_task;

// == Response Cache ==
/// Shared cache handle and interceptor factory.
///
/// Cloning is cheap and every clone points at the same store. Auto-generated
/// keys are derived from the request path, so one layer can be reused across
/// routes without collisions. A literal key sends every request through that
/// layer to a single slot.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<CacheStore>,
    config: Config,
}

impl ResponseCache {
    // == Constructors ==
    /// Creates a factory over a fresh, empty store.
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(CacheStore::new()), config)
    }

    /// Creates a factory over an existing store.
    pub fn with_store(store: Arc<CacheStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// The store shared by every layer this factory builds.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // == Layer Builders ==
    /// Layer with an auto-generated key and the default TTL.
    pub fn layer(&self) -> CacheLayer {
        self.layer_with_key(AUTO_GENERATE_KEY)
    }

    /// Layer with a caller key and the default TTL.
    ///
    /// An empty key ([`AUTO_GENERATE_KEY`]) falls back to path-derived keys.
    pub fn layer_with_key(&self, key: impl Into<String>) -> CacheLayer {
        self.layer_with_key_and_ttl(key, self.config.default_ttl)
    }

    /// Layer with a caller key and a caller TTL.
    ///
    /// An empty key ([`AUTO_GENERATE_KEY`]) falls back to path-derived keys.
    pub fn layer_with_key_and_ttl(&self, key: impl Into<String>, ttl: impl Into<Ttl>) -> CacheLayer {
        self.layer_with_policy(KeyPolicy::from_key(key), ttl)
    }

    /// Layer with an explicitly chosen key policy.
    pub fn layer_with_policy(&self, policy: KeyPolicy, ttl: impl Into<Ttl>) -> CacheLayer {
        let ttl = ttl.into();
        debug!(policy = policy.name(), ttl = ?ttl, "Building cache layer");
        CacheLayer::new(Arc::clone(&self.store), policy, ttl)
    }

    // == Cleanup ==
    /// Starts the background sweep on the configured interval.
    ///
    /// Returns None when the interval is zero. The task stops by itself once
    /// the store is dropped.
    pub fn spawn_cleanup(&self) -> Option<JoinHandle<()>> {
        if self.config.cleanup_interval.is_zero() {
            debug!("Cleanup interval is zero, background sweep disabled");
            return None;
        }
        Some(spawn_cleanup_task(
            Arc::downgrade(&self.store),
            self.config.cleanup_interval,
        ))
    }
}
