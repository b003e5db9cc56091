//! # Request Handlers
//!
//! File: cli/src/server/handlers/mod.rs
//!
//! One submodule per chatbot variant. Handlers are thin: decode the body,
//! call the chatbot, wrap the result in a JSON envelope.
//!
pub mod full;
pub mod simple;

use crate::server::envelope::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known routes hit with the wrong HTTP method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
