//! Error types for gateway operations.

use thiserror::Error;

/// Errors that can occur when calling the remote automation service.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Network-level failure issuing the request.
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success HTTP status.
    #[error("webhook returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body could not be decoded into the expected record.
    #[error("malformed webhook response: {0}")]
    Malformed(String),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
