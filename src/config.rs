//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of memoized responses the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// URL of the upstream country dataset
    pub upstream_url: String,
    /// Dataset refresh interval in seconds (0 disables refresh)
    pub refresh_interval: u64,
}

/// Default upstream serving the full country dataset.
const DEFAULT_UPSTREAM_URL: &str = "https://restcountries.com/v3.1/all";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum memoized responses (default: 100)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_URL` - Country dataset URL (default: restcountries.com)
    /// - `REFRESH_INTERVAL` - Refresh frequency in seconds (default: 3600, 0 disables)
    ///
    /// A capacity of zero is passed through here and rejected when the
    /// cache is constructed, so startup fails loudly instead of running
    /// without memoization.
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            upstream_url: env::var("UPSTREAM_URL")
                .ok()
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            refresh_interval: env::var("REFRESH_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 100,
            server_port: 3000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            refresh_interval: 3600,
        }
    }
}
