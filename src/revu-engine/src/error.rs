//! Error types for the Revu engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors from the provider boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No API key was configured for the provider.
    #[error("API key not configured for provider")]
    ApiKeyMissing,

    /// The outbound call itself failed (DNS, connection refused, TLS).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The provider did not answer within the configured deadline.
    #[error("Request timeout")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("Provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider answered successfully but with no usable text.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The provider's response body did not match the expected shape.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error)
        }
    }
}
