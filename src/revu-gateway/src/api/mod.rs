//! HTTP API routes and handlers.

mod health;
mod review;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub use types::HealthResponse;

/// Create the API routes.
///
/// The review route is mounted at the path the browser editor calls,
/// not under an API version prefix.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/ai/get-review", post(review::get_review))
}
