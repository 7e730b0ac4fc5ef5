//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction
//! and per-operation-type TTL expiration.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::stats::{Counters, TypeBreakdown};
use crate::cache::{CacheEntry, CacheStats, InsertionOrder, OperationType};
use crate::config::CacheConfig;

// == Cache Store ==
/// In-process store of computed AI results.
///
/// Capacity overflow evicts the single oldest insertion. Lookups do not
/// refresh an entry's position.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order for eviction
    order: InsertionOrder,
    /// Cumulative hit/miss/eviction counters
    counters: Counters,
    config: CacheConfig,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store from the cache configuration.
    ///
    /// `max_size` is clamped to at least 1.
    pub fn new(mut config: CacheConfig) -> Self {
        config.max_size = config.max_size.max(1);
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: Counters::default(),
            config,
        }
    }

    // == Get ==
    /// Looks up a key against the system clock.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Looks up a key at `now_ms`.
    ///
    /// Returns the value if present and unexpired and records a hit.
    /// Otherwise records a miss; an expired entry is removed on the way.
    /// A disabled cache always misses and records nothing.
    pub fn get_at(&mut self, key: &str, now_ms: u64) -> Option<Value> {
        if !self.config.enabled {
            return None;
        }

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now_ms) => {
                let value = entry.value.clone();
                self.counters.record_hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove_entry(key);
            debug!(key = %key, "Dropped expired cache entry on lookup");
        }
        self.counters.record_miss();
        None
    }

    // == Set ==
    /// Stores a value against the system clock.
    pub fn set(&mut self, key: impl Into<String>, value: Value, operation_type: OperationType) {
        self.set_at(key, value, operation_type, current_timestamp_ms());
    }

    /// Stores a value inserted at `now_ms`.
    ///
    /// The TTL comes from the operation type. Overwriting an existing key
    /// replaces it and counts as a fresh insertion. Inserting a new key into
    /// a full store evicts the oldest insertion first. No-op when disabled.
    pub fn set_at(
        &mut self,
        key: impl Into<String>,
        value: Value,
        operation_type: OperationType,
        now_ms: u64,
    ) {
        if !self.config.enabled {
            return;
        }

        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.config.max_size {
            if let Some(evicted_key) = self.order.pop_oldest() {
                self.entries.remove(&evicted_key);
                self.counters.record_eviction();
                debug!(key = %evicted_key, "Evicted oldest cache entry");
            }
        }

        let ttl = self.config.ttl_seconds.for_operation(operation_type);
        let entry = CacheEntry::new(value, operation_type, ttl, now_ms);
        self.entries.insert(key.clone(), entry);
        self.order.record_insert(&key);
    }

    // == Get Or Insert ==
    /// Returns the cached value for `key`, or runs `compute`, caches its
    /// result and returns it. Failed computations are not cached.
    pub fn get_or_insert_with<F, E>(
        &mut self,
        key: &str,
        operation_type: OperationType,
        compute: F,
    ) -> std::result::Result<Value, E>
    where
        F: FnOnce() -> std::result::Result<Value, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = compute()?;
        self.set(key, value.clone(), operation_type);
        Ok(value)
    }

    // == Clear ==
    /// Removes every entry and returns how many were removed.
    ///
    /// Counters are cumulative and survive a clear.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    pub fn cleanup_expired_at(&mut self, now_ms: u64) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now_ms))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.remove_entry(&key);
        }

        count
    }

    // == Stats ==
    /// Reports current statistics against the system clock.
    pub fn stats(&self) -> CacheStats {
        self.stats_at(current_timestamp_ms())
    }

    /// Reports statistics at `now_ms`. Breakdown, average age and memory
    /// estimate only consider unexpired entries.
    pub fn stats_at(&self, now_ms: u64) -> CacheStats {
        let mut by_type = TypeBreakdown::default();
        let mut total_age_ms: u64 = 0;
        let mut memory_estimate_bytes = 0;

        for (key, entry) in self.entries.iter().filter(|(_, e)| !e.is_expired_at(now_ms)) {
            by_type.increment(entry.operation_type);
            total_age_ms = total_age_ms.saturating_add(entry.age_ms_at(now_ms));
            memory_estimate_bytes += key.len() + entry.estimated_size();
        }

        let live = by_type.total();
        let average_age_seconds = if live == 0 {
            0.0
        } else {
            total_age_ms as f64 / live as f64 / 1000.0
        };

        CacheStats {
            size: self.entries.len(),
            max_size: self.config.max_size,
            hits: self.counters.hits,
            misses: self.counters.misses,
            evictions: self.counters.evictions,
            hit_rate: self.counters.hit_rate(),
            by_type,
            average_age_seconds,
            memory_estimate_bytes,
        }
    }

    // == Config ==
    /// Returns the effective configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is stored, regardless of expiry. Does not touch counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.remove(key);
    }
}
