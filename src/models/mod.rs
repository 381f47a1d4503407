//! Request and Response models for the country facade API
//!
//! This module defines the domain model and the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response
//! bodies.

pub mod country;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use country::Country;
pub use requests::SearchQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
