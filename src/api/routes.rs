//! API Routes
//!
//! Configures the Axum router with all country facade endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    countries_by_region_handler, country_by_code_handler, health_handler, list_countries_handler,
    search_countries_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /countries` - Full country dataset
/// - `GET /countries/region/:region` - Countries in a region
/// - `GET /countries/search` - Countries matching query-string filters
/// - `GET /countries/:code` - Single country by alpha-2/alpha-3 code
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// `/countries/search` is a static segment and takes precedence over the
/// `/countries/:code` capture.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/countries", get(list_countries_handler))
        .route("/countries/region/:region", get(countries_by_region_handler))
        .route("/countries/search", get(search_countries_handler))
        .route("/countries/:code", get(country_by_code_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
