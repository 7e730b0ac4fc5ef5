//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::config::CacheConfig;

/// Response body for `GET /cache/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsData,
}

/// Payload of a stats response
#[derive(Debug, Clone, Serialize)]
pub struct StatsData {
    pub stats: CacheStats,
    pub config: CacheConfig,
}

impl StatsResponse {
    /// Creates a successful stats response
    pub fn new(stats: CacheStats, config: CacheConfig) -> Self {
        Self {
            success: true,
            data: StatsData { stats, config },
        }
    }
}

/// Size and hit rate captured just before a clear
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousStats {
    pub size: usize,
    pub hit_rate: f64,
}

/// Response body for `DELETE /cache/stats`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    pub previous_stats: PreviousStats,
}

impl ClearResponse {
    /// Creates a ClearResponse from the pre-clear snapshot and removed count
    pub fn new(previous: &CacheStats, removed: usize) -> Self {
        Self {
            success: true,
            message: format!("Cache cleared: {} entries removed", removed),
            previous_stats: PreviousStats {
                size: previous.size,
                hit_rate: previous.hit_rate,
            },
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use serde_json::json;

    #[test]
    fn test_stats_response_shape() {
        let store = CacheStore::new(CacheConfig::default());
        let resp = StatsResponse::new(store.stats(), store.config().clone());
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["stats"]["size"], 0);
        assert_eq!(json["data"]["stats"]["hitRate"], 0.0);
        assert_eq!(json["data"]["config"]["enabled"], true);
        assert_eq!(json["data"]["config"]["ttlSeconds"]["diagnosis"], 3600);
    }

    #[test]
    fn test_clear_response_shape() {
        let mut store = CacheStore::new(CacheConfig::default());
        store.set("k", json!("v"), crate::cache::OperationType::Chat);
        store.get("k");
        let before = store.stats();

        let resp = ClearResponse::new(&before, 1);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Cache cleared: 1 entries removed");
        assert_eq!(json["previousStats"]["size"], 1);
        assert_eq!(json["previousStats"]["hitRate"], 100.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
