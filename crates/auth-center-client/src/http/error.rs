/*
[INPUT]:  Error sources (HTTP, API, serialization, auth)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the auth-center client
#[derive(Error, Debug)]
pub enum AuthCenterError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthCenterError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AuthCenterError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            AuthCenterError::Authentication { .. } => true,
            AuthCenterError::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Result type alias for auth-center operations
pub type Result<T> = std::result::Result<T, AuthCenterError>;
