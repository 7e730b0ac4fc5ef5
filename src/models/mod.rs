//! Response models for the cache service API
//!
//! DTOs serialized into HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{ClearResponse, HealthResponse, PreviousStats, StatsData, StatsResponse};
