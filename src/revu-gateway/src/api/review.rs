//! The review relay endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use revu_protocol::ReviewRequest;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Handle a review submission.
///
/// Validates the submission, forwards the code verbatim to the provider
/// as a single-turn completion, and relays the provider's full text back
/// as the response body. Each request is independent; no state is kept
/// between calls.
pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewRequest>,
) -> AppResult<Json<String>> {
    if req.is_blank() {
        return Err(AppError::Validation("code is required".to_string()));
    }

    info!(
        model = state.model.model(),
        code_bytes = req.code.len(),
        "Review requested"
    );

    let review = state.model.review(&req.code).await?;

    info!(review_bytes = review.len(), "Review completed");
    Ok(Json(review))
}
