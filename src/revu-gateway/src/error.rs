//! Error types for the gateway.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use revu_protocol::ErrorBody;
use thiserror::Error;

/// Gateway error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Provider error. All provider-side failures collapse here; the
    /// message stays generic and detail goes to the server log only.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider deadline expired.
    #[error("Request timeout")]
    Timeout,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Provider(_) => "provider_error",
            Self::Timeout => "timeout",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody::new(self.error_code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Result type for gateway handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<revu_engine::EngineError> for AppError {
    fn from(error: revu_engine::EngineError) -> Self {
        use revu_engine::EngineError;

        // The client never sees provider-internal detail; log it here.
        tracing::error!(error = %error, "Provider call failed");

        match error {
            EngineError::Timeout => Self::Timeout,
            _ => Self::Provider("upstream model provider failed".to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            AppError::Validation("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Provider("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(AppError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn error_codes() {
        assert_eq!(
            AppError::Validation("test".into()).error_code(),
            "validation_error"
        );
        assert_eq!(
            AppError::Provider("test".into()).error_code(),
            "provider_error"
        );
    }

    #[test]
    fn engine_errors_collapse_to_generic_provider_error() {
        let err: AppError = revu_engine::EngineError::Provider {
            status: 500,
            message: "internal provider detail".to_string(),
        }
        .into();
        assert!(!err.to_string().contains("internal provider detail"));
        assert_eq!(err.error_code(), "provider_error");
    }

    #[test]
    fn engine_timeout_maps_to_gateway_timeout() {
        let err: AppError = revu_engine::EngineError::Timeout.into();
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }
}
