// src/cache/ttl.rs
// =============================================================================
// An in-memory cache whose entries expire after a fixed time-to-live.
//
// How it works:
// - Each entry stores a value plus the time it was inserted
// - get() returns the value only while `now - stored_at < ttl`
// - insert() overwrites whatever was there (last writer wins)
// - Expired entries are not deleted, they are simply ignored until the
//   next insert replaces them
//
// The map is a DashMap, so the cache can be shared between tasks without an
// outer lock. Nothing is ever written to disk.
// =============================================================================

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use super::clock::Clock;

// A stored value and the moment it was stored
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    // Creates an empty cache
    //
    // Parameters:
    //   ttl: how long an entry stays valid after being stored
    //   clock: source of the current time
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    // Returns a copy of the value under `key` if it is still fresh
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        let age = self.clock.now() - entry.stored_at;

        if age < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    // Stores `value` under `key`, stamped with the current time
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };
        self.entries.insert(key.into(), entry);
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Arc<dyn Clock>?
//    - dyn Clock is "some type that implements Clock", decided at runtime
//    - Arc lets several owners share it (the cache and a test, for example)
//
// 2. Why does get() return a clone?
//    - DashMap hands out a guard that keeps part of the map locked
//    - Cloning the value lets us drop the guard before returning
// -----------------------------------------------------------------------------
