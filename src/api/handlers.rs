//! API Handlers
//!
//! HTTP request handlers for each country endpoint. Every dataset-backed
//! handler consults the response cache first and memoizes the payload it
//! computes; empty results are returned as 404s and never cached.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{Method, Uri},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cache::LruCache;
use crate::config::Config;
use crate::dataset;
use crate::error::{FacadeError, Result};
use crate::models::{Country, HealthResponse, SearchQuery, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the reference dataset and the response cache, each behind its own
/// Arc<RwLock<>>. The cache lock is always taken in write mode, even for
/// lookups: a cache hit promotes the entry's recency, so `get` mutates.
#[derive(Clone)]
pub struct AppState {
    /// Reference dataset served by the facade
    pub dataset: Arc<RwLock<Vec<Country>>>,
    /// Memoized response payloads keyed by request identity
    pub cache: Arc<RwLock<LruCache<Value>>>,
}

impl AppState {
    /// Creates a new AppState with an empty dataset and the given cache.
    pub fn new(cache: LruCache<Value>) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Vec::new())),
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured cache capacity is invalid; startup must
    /// abort rather than run with an unbounded or useless cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = LruCache::new(config.cache_capacity)?;
        Ok(Self::new(cache))
    }

    /// Installs a freshly fetched dataset and drops every memoized
    /// response, so no cached payload outlives the data it came from.
    pub async fn replace_dataset(&self, countries: Vec<Country>) {
        let mut dataset = self.dataset.write().await;
        *dataset = countries;
        drop(dataset);
        self.cache.write().await.clear();
    }
}

// == Cache Key ==
/// Derives the cache key from the full request identity.
fn request_cache_key(method: &Method, uri: &Uri) -> String {
    match uri.path_and_query() {
        Some(path_and_query) => format!("{} {}", method, path_and_query),
        None => format!("{} {}", method, uri.path()),
    }
}

/// Serializes a selection into a cacheable payload.
fn to_payload<T: Serialize>(data: &T) -> Result<Value> {
    serde_json::to_value(data).map_err(|err| FacadeError::Internal(err.to_string()))
}

/// Looks up a memoized payload for this request.
async fn cached_payload(state: &AppState, key: &str) -> Option<Value> {
    let cached = state.cache.write().await.get(key);
    if cached.is_some() {
        debug!("Cache hit for {}", key);
    }
    cached
}

// Concurrent requests for the same uncached key can both miss, both
// compute the payload, and both store it; the last set wins. The payload
// is derived from the same dataset either way, so the duplicate work is
// wasteful but harmless.
async fn memoize(state: &AppState, key: String, payload: &Value) {
    state.cache.write().await.set(key, payload.clone());
}

/// Handler for GET /countries
///
/// Returns the whole dataset.
pub async fn list_countries_handler(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Value>> {
    let key = request_cache_key(&method, &uri);
    if let Some(cached) = cached_payload(&state, &key).await {
        return Ok(Json(cached));
    }

    let payload = {
        let countries = state.dataset.read().await;
        if countries.is_empty() {
            return Err(FacadeError::NotFound(
                "No countries have been found.".to_string(),
            ));
        }
        to_payload(&*countries)?
    };

    memoize(&state, key, &payload).await;
    Ok(Json(payload))
}

/// Handler for GET /countries/region/:region
///
/// Returns every country in the given region, matched case-insensitively.
pub async fn countries_by_region_handler(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(region): Path<String>,
) -> Result<Json<Value>> {
    let key = request_cache_key(&method, &uri);
    if let Some(cached) = cached_payload(&state, &key).await {
        return Ok(Json(cached));
    }

    let payload = {
        let countries = state.dataset.read().await;
        let matches = dataset::by_region(&countries, &region);
        if matches.is_empty() {
            return Err(FacadeError::NotFound(
                "No countries have been found for the given region query.".to_string(),
            ));
        }
        to_payload(&matches)?
    };

    memoize(&state, key, &payload).await;
    Ok(Json(payload))
}

/// Handler for GET /countries/search
///
/// Returns the countries matching every filter present in the query
/// string.
pub async fn search_countries_handler(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let key = request_cache_key(&method, &uri);
    if let Some(cached) = cached_payload(&state, &key).await {
        return Ok(Json(cached));
    }

    let payload = {
        let countries = state.dataset.read().await;
        let matches = dataset::search(&countries, &query);
        if matches.is_empty() {
            return Err(FacadeError::NotFound(
                "No countries have been found for the given search filters.".to_string(),
            ));
        }
        to_payload(&matches)?
    };

    memoize(&state, key, &payload).await;
    Ok(Json(payload))
}

/// Handler for GET /countries/:code
///
/// Returns the single country matching the alpha-2 or alpha-3 code.
pub async fn country_by_code_handler(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(code): Path<String>,
) -> Result<Json<Value>> {
    let key = request_cache_key(&method, &uri);
    if let Some(cached) = cached_payload(&state, &key).await {
        return Ok(Json(cached));
    }

    let payload = {
        let countries = state.dataset.read().await;
        match dataset::by_code(&countries, &code) {
            Some(country) => to_payload(country)?,
            None => {
                return Err(FacadeError::NotFound(format!(
                    "Country could not be found for country code {}.",
                    code.to_uppercase()
                )))
            }
        }
    };

    memoize(&state, key, &payload).await;
    Ok(Json(payload))
}

/// Handler for GET /stats
///
/// Returns current cache counters and the dataset size.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    let dataset_size = state.dataset.read().await.len();

    Json(StatsResponse::new(&stats, dataset_size))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
