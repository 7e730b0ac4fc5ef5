//! Cache Statistics Module
//!
//! Cumulative lookup counters and the point-in-time report built from them.

use serde::Serialize;

use crate::cache::OperationType;

// == Counters ==
/// Cumulative counters updated by store operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counters {
    /// Lookups that returned a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
}

impl Counters {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Hit Rate ==
    /// Hit rate as a percentage: `hits / (hits + misses) * 100`, or 0.0 when
    /// no lookups have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

// == Type Breakdown ==
/// Live entry counts per operation type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeBreakdown {
    pub chat: usize,
    pub diagnosis: usize,
    pub planning: usize,
    pub general: usize,
}

impl TypeBreakdown {
    pub fn increment(&mut self, op: OperationType) {
        match op {
            OperationType::Chat => self.chat += 1,
            OperationType::Diagnosis => self.diagnosis += 1,
            OperationType::Planning => self.planning += 1,
            OperationType::General => self.general += 1,
        }
    }

    pub fn get(&self, op: OperationType) -> usize {
        match op {
            OperationType::Chat => self.chat,
            OperationType::Diagnosis => self.diagnosis,
            OperationType::Planning => self.planning,
            OperationType::General => self.general,
        }
    }

    pub fn total(&self) -> usize {
        self.chat + self.diagnosis + self.planning + self.general
    }
}

// == Cache Stats ==
/// Snapshot reported by `GET /cache/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently held, expired or not
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Percentage in `[0, 100]`
    pub hit_rate: f64,
    /// Live (unexpired) entries per operation type
    pub by_type: TypeBreakdown,
    /// Mean age of live entries, in seconds
    pub average_age_seconds: f64,
    /// Sum of key and serialized value lengths of live entries
    pub memory_estimate_bytes: usize,
}
