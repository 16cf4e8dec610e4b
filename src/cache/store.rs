//! Cache Store Module
//!
//! Concurrency-safe key to response storage with per-entry expiration.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::{Arc, RwLock};

use tokio::time::Instant;
use tracing::debug;

use crate::cache::lock::{read_shard, write_shard};
use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, Ttl, SHARD_COUNT};

// == Slot ==
/// A stored entry together with its expiration deadline.
#[derive(Debug)]
struct Slot {
    entry: Arc<CacheEntry>,
    /// None = never expires
    expires_at: Option<Instant>,
}

impl Slot {
    /// An entry is expired once `now` reaches its deadline.
    fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}

type Shard = RwLock<HashMap<String, Slot>>;

// == Cache Store ==
/// Response storage shared by every request.
///
/// Keys are spread across a fixed set of shards, each behind its own lock, so
/// writers on different keys rarely contend. Locks are only held for map
/// operations. Entries are replaced as a whole `Arc`, which means a reader
/// sees either the previous entry or the new one and never a mix.
#[derive(Debug)]
pub struct CacheStore {
    shards: Box<[Shard]>,
    hasher: RandomState,
    stats: StatsRecorder,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        let shards = (0..SHARD_COUNT)
            .map(|_| RwLock::new(HashMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            shards,
            hasher: RandomState::new(),
            stats: StatsRecorder::default(),
        }
    }

    fn shard(&self, key: &str) -> &Shard {
        let index = (self.hasher.hash_one(key) as usize) % self.shards.len();
        &self.shards[index]
    }

    // == Get ==
    /// Returns the live entry stored under `key`.
    ///
    /// The deadline is checked on every call, so an expired entry is a miss
    /// even if no cleanup sweep has removed it yet.
    pub fn get(&self, key: &str) -> Option<Arc<CacheEntry>> {
        let now = Instant::now();
        let found = {
            let shard = read_shard(self.shard(key), "get");
            shard
                .get(key)
                .filter(|slot| !slot.is_expired(now))
                .map(|slot| Arc::clone(&slot.entry))
        };

        match found {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `entry` under `key`, replacing any previous entry.
    ///
    /// The expiration clock restarts from now using `ttl`.
    pub fn set(&self, key: impl Into<String>, entry: CacheEntry, ttl: Ttl) {
        let slot = Slot {
            entry: Arc::new(entry),
            expires_at: ttl.deadline(Instant::now()),
        };
        let key = key.into();

        write_shard(self.shard(&key), "set").insert(key, slot);
        self.stats.record_store();
    }

    // == Remove ==
    /// Removes the entry stored under `key`.
    ///
    /// Returns true if an entry (live or expired) was present.
    pub fn remove(&self, key: &str) -> bool {
        write_shard(self.shard(key), "remove").remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and resets the counters.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            write_shard(shard, "clear").clear();
        }
        self.stats.reset();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed. Shards are swept one at a time.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        for shard in self.shards.iter() {
            let mut guard = write_shard(shard, "cleanup_expired");
            let before = guard.len();
            guard.retain(|_, slot| !slot.is_expired(now));
            removed += before - guard.len();
        }

        if removed > 0 {
            self.stats.record_expired(removed);
            debug!(removed, "Swept expired cache entries");
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones that
    /// have not been swept yet.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| read_shard(shard, "len").len())
            .sum()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
