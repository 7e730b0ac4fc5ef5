//! Cache Entry Module
//!
//! Defines a cached AI result together with its timing metadata.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::cache::OperationType;

// == Cache Entry ==
/// A previously computed AI result and its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload
    pub value: Value,
    /// Operation category the payload belongs to
    pub operation_type: OperationType,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry inserted at `now_ms` that lives for `ttl_seconds`.
    pub fn new(value: Value, operation_type: OperationType, ttl_seconds: u64, now_ms: u64) -> Self {
        Self {
            value,
            operation_type,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at `now_ms`.
    ///
    /// Boundary condition: an entry is expired once `now_ms >= expires_at`,
    /// so it is never served at the exact instant its TTL runs out.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    /// Checks expiry against the system clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Age ==
    /// Age of the entry in milliseconds at `now_ms`.
    pub fn age_ms_at(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Size Estimate ==
    /// Rough in-memory footprint of the payload: its serialized JSON length.
    pub fn estimated_size(&self) -> usize {
        serde_json::to_vec(&self.value)
            .map(|bytes| bytes.len())
            .unwrap_or(0)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
