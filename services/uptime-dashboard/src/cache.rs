//! Time-boxed memoization of fetch results

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Key/value cache whose entries expire a fixed time after insertion.
///
/// Expiry is based on insertion time only; reading an entry does not extend it.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Whether `key` has an entry that has not yet expired at `now`
    pub fn is_fresh(&self, key: &K, now: Instant) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now.saturating_duration_since(entry.inserted_at) < self.ttl)
    }

    /// A copy of the live value for `key`, if any
    pub fn get(&self, key: &K, now: Instant) -> Option<V> {
        if self.is_fresh(key, now) {
            self.entries.get(key).map(|entry| entry.value.clone())
        } else {
            None
        }
    }

    /// Store `value` for `key`, replacing any previous entry
    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
