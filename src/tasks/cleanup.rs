//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries so stale
//! AI results do not linger until their key is looked up again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` between runs and holds the
/// write lock only while sweeping.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::from_config(&config);
/// let sweep = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
/// // Later, during shutdown:
/// sweep.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(
                    "Expiry sweep: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
