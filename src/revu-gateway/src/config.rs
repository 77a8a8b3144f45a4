//! Gateway configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins (empty = allow all, dev mode).
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Deadline for one provider call, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Provider configuration.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// AI provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible endpoint (None = provider default).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key. The gateway starts without one; review requests then fail
    /// with a clean provider error instead of a crash.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    // The origin the browser editor is served from during development.
    vec!["http://localhost:5173".to_string()]
}

fn default_request_timeout() -> u64 {
    120
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_origins: default_cors_origins(),
            request_timeout: default_request_timeout(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            model: default_model(),
            api_key: None,
        }
    }
}

impl GatewayConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            config.listen_addr = format!("0.0.0.0:{port}");
        }

        if let Ok(addr) = std::env::var("REVU_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(origins) = std::env::var("REVU_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty() && *o != "*")
                .map(String::from)
                .collect();
        }

        if let Ok(timeout) = std::env::var("REVU_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.request_timeout = secs;
            }
        }

        if let Ok(url) = std::env::var("REVU_PROVIDER_URL") {
            config.provider.base_url = Some(url);
        }

        if let Ok(model) = std::env::var("REVU_MODEL") {
            config.provider.model = model;
        }

        if let Ok(key) = std::env::var("REVU_API_KEY") {
            config.provider.api_key = Some(key);
        } else if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.provider.api_key = Some(key);
        }

        config
    }

    /// Get the provider deadline as a Duration.
    pub fn request_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
