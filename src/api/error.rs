//! Error types for catalog API calls.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build request URLs
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to connect or send the request
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// Server answered with a non-success status
    #[error("Server returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Response body is not the expected JSON
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short message suitable for the status area of the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } | ApiError::Client(_) => "Catalog client is misconfigured",
            ApiError::Connection { .. } => "Could not reach the catalog server",
            ApiError::Timeout { .. } => "The catalog server took too long to answer",
            ApiError::Status { .. } => "The catalog server rejected the request",
            ApiError::Decode { .. } => "The catalog server sent an unexpected response",
        }
    }
}
