//! Application state shared across request handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use revu_engine::{HttpReviewModel, ReviewModel};

use crate::config::GatewayConfig;

/// Shared state. The gateway itself is stateless between requests; this
/// holds only configuration, the provider handle, and the start time.
pub struct AppState {
    /// Gateway configuration.
    pub config: GatewayConfig,
    /// AI provider collaborator.
    pub model: Arc<dyn ReviewModel>,
    /// Start time, for uptime reporting.
    start_time: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("start_time", &self.start_time)
            .finish()
    }
}

impl AppState {
    /// Create state with the HTTP provider described by the configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let mut model = HttpReviewModel::with_timeout(
            config.provider.model.clone(),
            config.provider.base_url.clone(),
            config.request_timeout_duration(),
        );
        if let Some(key) = &config.provider.api_key {
            model = model.with_api_key(key.clone());
        }
        Self::with_model(config, Arc::new(model))
    }

    /// Create state with an explicit provider. Used by tests to swap in
    /// stub models.
    pub fn with_model(config: GatewayConfig, model: Arc<dyn ReviewModel>) -> Self {
        Self {
            config,
            model,
            start_time: Instant::now(),
        }
    }

    /// Time since the server started.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}
