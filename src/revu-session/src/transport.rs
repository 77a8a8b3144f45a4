//! Transport to the gateway.
//!
//! [`ReviewTransport`] is the controller's outbound seam; tests swap in
//! stubs, the CLI uses [`HttpTransport`] against a running gateway.

use std::time::Duration;

use async_trait::async_trait;
use revu_protocol::ReviewRequest;
use thiserror::Error;

/// Default gateway endpoint during development.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

/// Default deadline for one review request.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors from the outbound call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The call itself failed (DNS, connection refused, CORS rejection).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The gateway did not answer within the deadline.
    #[error("Request timeout")]
    Timeout,

    /// The gateway answered with a non-success status.
    #[error("Gateway returned status {0}")]
    Status(u16),

    /// The gateway's success body did not parse.
    #[error("Malformed gateway response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error)
        }
    }
}

/// Outbound call to the gateway.
#[async_trait]
pub trait ReviewTransport: Send + Sync {
    /// Submit a review request and return the review text.
    async fn review(&self, request: &ReviewRequest) -> Result<String, TransportError>;
}

/// HTTP transport posting to the gateway's review endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` (or the default gateway when
    /// `None`).
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with an explicit request deadline.
    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build transport client: {e}, using defaults");
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
        }
    }
}

#[async_trait]
impl ReviewTransport for HttpTransport {
    async fn review(&self, request: &ReviewRequest) -> Result<String, TransportError> {
        let url = format!("{}/ai/get-review", self.base_url);

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        resp.json::<String>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}
