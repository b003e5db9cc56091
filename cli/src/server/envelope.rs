//! # JSON Envelopes
//!
//! File: cli/src/server/envelope.rs
//!
//! ## Overview
//!
//! Every response body is a JSON object with a `status` of `"success"` or
//! `"error"`. Errors carry a `message` and nothing else, so no internal detail
//! reaches the client.
//!
//! Request bodies are read leniently: anything that is not a JSON object is
//! treated as an object with no fields, and a field holding a non-string
//! value counts as missing.
//!
use crate::core::error::CodepalError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] CodepalError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(rejection) => rejection.status(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Rejected request ({}): {}", status, self);
        }
        error_response(status, &self.to_string())
    }
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}

pub type ApiResult = std::result::Result<Json<Value>, ApiError>;

/// Decoded request body: the top-level JSON object, or an empty map.
#[derive(Debug, Default)]
pub struct Body(Map<String, Value>);

impl Body {
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// The field's string value, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// The trimmed field, which must be present.
    pub fn required(&self, field: &'static str) -> Result<String, CodepalError> {
        self.text(field)
            .map(|value| value.trim().to_string())
            .ok_or(CodepalError::MissingField { field })
    }

    /// The trimmed field, which must be present and non-blank.
    pub fn required_non_empty(&self, field: &'static str) -> Result<String, CodepalError> {
        let value = self.required(field)?;
        if value.is_empty() {
            return Err(CodepalError::EmptyField { field });
        }
        Ok(value)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_objects_have_no_fields() {
        for raw in ["", "not json", "[1,2]", "\"message\""] {
            let body = Body::parse(raw.as_bytes());
            assert_eq!(
                body.required("message"),
                Err(CodepalError::MissingField { field: "message" })
            );
        }
    }

    #[test]
    fn test_non_string_fields_count_as_missing() {
        let body = Body::parse(br#"{"message": 42}"#);
        assert!(body.text("message").is_none());
        assert_eq!(
            body.required("message").unwrap_err().to_string(),
            "Message field is required"
        );
    }

    #[test]
    fn test_required_fields_are_trimmed() {
        let body = Body::parse(br#"{"goal": "  web  ", "topic": "   "}"#);
        assert_eq!(body.required("goal").unwrap(), "web");
        assert_eq!(body.required("topic").unwrap(), "");
        assert_eq!(
            body.required_non_empty("topic").unwrap_err().to_string(),
            "Topic cannot be empty"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(CodepalError::EmptyField { field: "code" }).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }
}
