//! Configuration Module
//!
//! Handles loading and managing server and cache configuration from
//! environment variables.

use std::env;

use serde::Serialize;

use crate::cache::OperationType;
use crate::error::{Result, ServiceError};

// == TTL Config ==
/// Time-to-live per operation type, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TtlConfig {
    pub chat: u64,
    pub diagnosis: u64,
    pub planning: u64,
    /// Fallback for operations without a dedicated bucket
    pub default: u64,
}

impl TtlConfig {
    /// TTL in seconds for the given operation type.
    pub fn for_operation(&self, op: OperationType) -> u64 {
        match op {
            OperationType::Chat => self.chat,
            OperationType::Diagnosis => self.diagnosis,
            OperationType::Planning => self.planning,
            OperationType::General => self.default,
        }
    }
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            chat: 600,
            diagnosis: 3600,
            planning: 1800,
            default: 900,
        }
    }
}

// == Cache Config ==
/// Response cache settings, also reported by `GET /cache/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// When false, lookups always miss and inserts are dropped
    pub enabled: bool,
    /// Maximum number of entries held at once
    pub max_size: usize,
    pub ttl_seconds: TtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_size: 100,
            ttl_seconds: TtlConfig::default(),
        }
    }
}

// == Server Config ==
/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub cache: CacheConfig,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `AI_CACHE_ENABLED` - Enable the response cache (default: true)
    /// - `AI_CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `AI_CACHE_TTL_CHAT` - Chat TTL in seconds (default: 600)
    /// - `AI_CACHE_TTL_DIAGNOSIS` - Diagnosis TTL in seconds (default: 3600)
    /// - `AI_CACHE_TTL_PLANNING` - Planning TTL in seconds (default: 1800)
    /// - `AI_CACHE_TTL_DEFAULT` - Fallback TTL in seconds (default: 900)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let ttl = defaults.cache.ttl_seconds;

        Self {
            cache: CacheConfig {
                enabled: lookup("AI_CACHE_ENABLED")
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(defaults.cache.enabled),
                max_size: parse_or(&lookup, "AI_CACHE_MAX_SIZE", defaults.cache.max_size),
                ttl_seconds: TtlConfig {
                    chat: parse_or(&lookup, "AI_CACHE_TTL_CHAT", ttl.chat),
                    diagnosis: parse_or(&lookup, "AI_CACHE_TTL_DIAGNOSIS", ttl.diagnosis),
                    planning: parse_or(&lookup, "AI_CACHE_TTL_PLANNING", ttl.planning),
                    default: parse_or(&lookup, "AI_CACHE_TTL_DEFAULT", ttl.default),
                },
            },
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    // == Validate ==
    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cleanup_interval == 0 {
            return Err(ServiceError::InvalidConfig(
                "CLEANUP_INTERVAL must be greater than 0".to_string(),
            ));
        }

        for op in OperationType::ALL {
            if self.cache.ttl_seconds.for_operation(op) == 0 {
                return Err(ServiceError::InvalidConfig(format!(
                    "TTL for '{}' operations must be greater than 0",
                    op
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
