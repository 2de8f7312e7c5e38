//! Bamboo API error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Bamboo REST API
#[derive(Error, Debug)]
pub enum BambooApiError {
    /// The HTTP client could not be built (TLS backend, invalid header)
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Credentials rejected (HTTP 401)
    #[error("Authentication failed - check the Bamboo username and password")]
    Unauthorized,

    /// Authenticated user lacks permission (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Endpoint or entity does not exist (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bamboo failed to handle the request (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Any other non-success status
    #[error("Unexpected response ({0}): {1}")]
    UnexpectedStatus(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not what the endpoint documents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BambooApiError {
    /// Classify a non-success response
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            500..=599 => Self::ServerError(status, body),
            _ => Self::UnexpectedStatus(status, body),
        }
    }
}
