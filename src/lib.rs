//! AI Response Cache - in-process cache for AI crop-assistant results
//!
//! Caches chat, diagnosis and planning outputs keyed by a fingerprint of
//! normalized inputs, with per-operation TTLs, evict-oldest capacity control
//! and an HTTP surface for statistics.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStore, OperationType};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
