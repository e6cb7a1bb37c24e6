//! Validation error type
//!
//! Form and payload validation surfaces one error per offending field so the
//! UI can render the message inline next to the input.

use thiserror::Error;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field the error belongs to (e.g. "price", "config.percentage")
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;
