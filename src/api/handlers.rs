//! API Handlers
//!
//! HTTP request handlers for the cache service endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, http::Uri, Json};
use tracing::info;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{ClearResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Contains the cache store wrapped in Arc<RwLock<>> for thread-safe access.
/// AI operation handlers receive the same handle.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.cache.clone()))
    }
}

/// Handler for GET /cache/stats
///
/// Returns statistics and the effective cache configuration.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(cache.stats(), cache.config().clone()))
}

/// Handler for DELETE /cache/stats
///
/// Clears every cached entry and reports the size and hit rate from just
/// before the clear.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let previous = cache.stats();
    let removed = cache.clear();

    info!(removed = removed, hit_rate = previous.hit_rate, "Response cache cleared");
    Json(ClearResponse::new(&previous, removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes.
pub async fn not_found_handler(uri: Uri) -> Result<()> {
    Err(ServiceError::NotFound(format!("No route for {}", uri.path())))
}
