//! Response DTOs for the country facade API
//!
//! Defines the structure of outgoing HTTP response bodies for the
//! operational endpoints. Country payloads are served directly from the
//! dataset (or the response cache) and have no wrapper DTO.

use serde::Serialize;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in the cache
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Number of countries currently held in the dataset
    pub dataset_size: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache counters and dataset size
    pub fn new(stats: &crate::cache::CacheStats, dataset_size: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            entries: stats.entries,
            hit_rate: stats.hit_rate(),
            dataset_size,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g. "healthy")
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    #[allow(dead_code)]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
