//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store semantics over arbitrary responses and keys.

use axum::http::{HeaderValue, StatusCode};
use proptest::prelude::*;

use crate::cache::{CacheEntry, CacheStore, KeyPolicy, Ttl};

// == Test Configuration ==
const TEST_TTL_SECS: u64 = 300;

// == Strategies ==
/// Generates arbitrary cache keys, including path-like ones
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/ -]{1,64}"
}

/// Generates arbitrary response triples
fn entry_strategy() -> impl Strategy<Value = CacheEntry> {
    (
        prop::collection::vec(any::<u8>(), 0..512),
        100u16..600,
        prop::option::of("[a-z]{1,12}/[a-z0-9.+-]{1,24}"),
    )
        .prop_map(|(body, code, content_type)| {
            CacheEntry::new(
                body,
                StatusCode::from_u16(code).unwrap(),
                content_type.map(|value| HeaderValue::from_str(&value).unwrap()),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a response and reading it back yields the identical triple.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), entry in entry_strategy()) {
        let store = CacheStore::new();

        store.set(key.clone(), entry.clone(), Ttl::from_secs(TEST_TTL_SECS));

        let retrieved = store.get(&key).unwrap();
        prop_assert_eq!(&*retrieved, &entry, "Round-trip entry mismatch");
    }

    // Writing one key leaves every other key untouched.
    #[test]
    fn prop_keys_are_isolated(
        key_a in key_strategy(),
        key_b in key_strategy(),
        entry_a in entry_strategy(),
        entry_b in entry_strategy()
    ) {
        prop_assume!(key_a != key_b);
        let store = CacheStore::new();

        store.set(key_b.clone(), entry_b.clone(), Ttl::from_secs(TEST_TTL_SECS));
        store.set(key_a.clone(), entry_a.clone(), Ttl::from_secs(TEST_TTL_SECS));

        prop_assert_eq!(&*store.get(&key_b).unwrap(), &entry_b);
        prop_assert_eq!(&*store.get(&key_a).unwrap(), &entry_a);
        prop_assert_eq!(store.len(), 2);
    }

    // A second set under the same key fully replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in entry_strategy(),
        second in entry_strategy()
    ) {
        let store = CacheStore::new();

        store.set(key.clone(), first, Ttl::from_secs(TEST_TTL_SECS));
        store.set(key.clone(), second.clone(), Ttl::from_secs(TEST_TTL_SECS));

        prop_assert_eq!(&*store.get(&key).unwrap(), &second);
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Distinct paths never share a derived key.
    #[test]
    fn prop_path_keys_distinct(path_a in "/[a-z0-9/]{0,32}", path_b in "/[a-z0-9/]{0,32}") {
        prop_assume!(path_a != path_b);
        let policy = KeyPolicy::PathDerived;

        prop_assert_ne!(policy.resolve(&path_a), policy.resolve(&path_b));
    }
}
