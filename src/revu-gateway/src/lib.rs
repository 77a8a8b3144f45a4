//! Revu Gateway - HTTP relay between the browser editor and the AI provider.
//!
//! This crate provides:
//! - `POST /ai/get-review`: validate a code submission and relay it to the
//!   provider collaborator
//! - `GET /health` and a root service banner
//! - CORS for the browser editor origin
//! - Environment-driven configuration and graceful shutdown
//!
//! The gateway is stateless: each request is independent and the provider
//! call is the only await point of consequence.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::GatewayConfig;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Run the gateway with the given configuration.
pub async fn run(config: GatewayConfig) -> anyhow::Result<()> {
    run_with_shutdown(config, std::future::pending()).await
}

/// Run the gateway with graceful shutdown support.
pub async fn run_with_shutdown<F>(config: GatewayConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if config.provider.api_key.is_none() {
        warn!("No provider API key configured; review requests will fail");
        warn!("Set REVU_API_KEY (or OPENAI_API_KEY) to enable reviews.");
    }

    let state = Arc::new(AppState::new(config.clone()));
    let app = create_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Starting Revu gateway on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Gateway stopped");
    Ok(())
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = middleware::cors_layer(&state.config.cors_origins);

    api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
