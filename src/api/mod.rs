//! API Module
//!
//! HTTP handlers and routing for the country facade REST API.
//!
//! # Endpoints
//! - `GET /countries` - Full country dataset
//! - `GET /countries/region/:region` - Countries in a region
//! - `GET /countries/search` - Countries matching query-string filters
//! - `GET /countries/:code` - Single country by alpha-2/alpha-3 code
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
