//! Error types for the country facade
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Facade Error Enum ==
/// Unified error type for the country facade.
#[derive(Error, Debug)]
pub enum FacadeError {
    /// Invalid configuration detected at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No data matched the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream dataset request failed
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FacadeError::InvalidConfiguration(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            FacadeError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            FacadeError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            FacadeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the country facade.
pub type Result<T> = std::result::Result<T, FacadeError>;
