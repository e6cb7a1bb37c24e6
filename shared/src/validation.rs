//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! admin form drafts. The backend enforces nothing client-side code can rely
//! on, so bounds are checked here before a payload is built.

use crate::error::ValidationError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, offer
pub const MAX_NAME_LEN: usize = 200;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(ValidationError::new(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(ValidationError::new(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Parse a required numeric form field.
///
/// Distinguishes "missing" from "non-numeric" so the form can surface the
/// right message inline.
pub fn parse_required_number(raw: &str, field: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::new(field, format!("{field} must be a number")))
}

/// Parse a required integer form field (rejects fractional input).
pub fn parse_required_integer(raw: &str, field: &str) -> Result<i64, ValidationError> {
    let value = parse_required_number(raw, field)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{field} must be a whole number"),
        ));
    }
    Ok(value as i64)
}
