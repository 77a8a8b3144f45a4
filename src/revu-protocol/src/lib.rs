//! Wire contract between the Revu gateway and its clients.
//!
//! The gateway accepts a [`ReviewRequest`] on `POST /ai/get-review` and
//! answers either with the provider's markdown review (a JSON string) or
//! with an [`ErrorBody`] envelope. Both sides of the HTTP boundary depend
//! on this crate so the contract cannot drift.

use serde::{Deserialize, Serialize};

/// One code submission, created at submit time and immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Source code to review. Arbitrary text; the gateway rejects
    /// submissions that are empty or whitespace-only.
    pub code: String,
}

impl ReviewRequest {
    /// Create a request from the current editor buffer.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Whether the submission carries no reviewable content.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}

/// Error response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error detail.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `validation_error`.
    pub code: String,
    /// Human-readable message. Never carries provider-internal detail.
    pub message: String,
}

impl ErrorBody {
    /// Build an envelope from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn review_request_serializes_with_code_field() {
        let req = ReviewRequest::new("function f(){}");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"code":"function f(){}"}"#);
    }

    #[test]
    fn review_request_accepts_empty_code_on_the_wire() {
        let req: ReviewRequest = serde_json::from_str(r#"{"code":""}"#).unwrap();
        assert!(req.is_blank());
    }

    #[test]
    fn whitespace_only_code_is_blank() {
        assert!(ReviewRequest::new(" \n\t ").is_blank());
        assert!(!ReviewRequest::new("fn main() {}").is_blank());
    }

    #[test]
    fn missing_code_field_fails_to_parse() {
        let err = serde_json::from_str::<ReviewRequest>("{}").unwrap_err();
        assert!(err.to_string().contains("code"));
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody::new("validation_error", "code is required");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], "code is required");
    }
}
