//! Cache Module
//!
//! In-memory store of AI operation results with per-operation-type TTL
//! expiration, evict-oldest-on-overflow capacity control and hit/miss
//! statistics.

mod entry;
mod fingerprint;
mod operation;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use fingerprint::{
    chat_key, diagnosis_key, normalize_number, normalize_text, planning_key, Fingerprint,
    DEFAULT_PRECISION,
};
pub use operation::OperationType;
pub use order::InsertionOrder;
pub use stats::{CacheStats, TypeBreakdown};
pub use store::CacheStore;
