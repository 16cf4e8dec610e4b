//! Lock helpers that recover from poisoning instead of panicking.
//!
//! A panic while a shard lock is held must not take the whole cache down, so
//! the guard is recovered and the event is logged.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

pub(crate) fn read_shard<'a, T>(lock: &'a RwLock<T>, op: &'static str) -> RwLockReadGuard<'a, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!(
                op,
                lock_kind = "rwlock.read",
                "Recovered from poisoned cache shard lock"
            );
            poisoned.into_inner()
        }
    }
}

pub(crate) fn write_shard<'a, T>(
    lock: &'a RwLock<T>,
    op: &'static str,
) -> RwLockWriteGuard<'a, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!(
                op,
                lock_kind = "rwlock.write",
                "Recovered from poisoned cache shard lock"
            );
            poisoned.into_inner()
        }
    }
}
