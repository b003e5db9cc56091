//! # Codepal Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Codepal. The responder
//! engine itself almost never fails: unknown topics, words, or domains are
//! answered with a help listing rather than an error. Errors exist for the
//! plumbing around it: configuration loading, request validation, and
//! arithmetic parsing.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CodepalError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The HTTP boundary translates errors into JSON envelopes in
//! `server::envelope`; this module knows nothing about status codes.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if message.trim().is_empty() {
//!     return Err(CodepalError::EmptyField { field: "message" })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Codepal application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodepalError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required request field was absent (or the body was not a JSON object).
    #[error("{} field is required", capitalize(.field))]
    MissingField { field: &'static str },

    /// A required request field was present but blank.
    #[error("{} cannot be empty", capitalize(.field))]
    EmptyField { field: &'static str },

    /// An arithmetic operand could not be read as a number.
    #[error("Could not parse '{0}' as a number")]
    NotANumber(String),

    /// An arithmetic result left the float range although its operand did not.
    #[error("Result of squaring {0} is too large")]
    Overflow(String),

    #[error("Unknown chatbot variant '{0}' (expected 'full' or 'simple')")]
    UnknownVariant(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Upper-cases the first character of a field name for user-facing messages.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = CodepalError::Config("Missing setting 'port'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'port'"
        );

        let missing = CodepalError::MissingField { field: "message" };
        assert_eq!(missing.to_string(), "Message field is required");

        let empty = CodepalError::EmptyField { field: "code" };
        assert_eq!(empty.to_string(), "Code cannot be empty");

        let variant = CodepalError::UnknownVariant("tiny".into());
        assert_eq!(
            variant.to_string(),
            "Unknown chatbot variant 'tiny' (expected 'full' or 'simple')"
        );

        let overflow = CodepalError::Overflow("1e+200".into());
        assert_eq!(overflow.to_string(), "Result of squaring 1e+200 is too large");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("problem"), "Problem");
        assert_eq!(capitalize(""), "");
    }
}
