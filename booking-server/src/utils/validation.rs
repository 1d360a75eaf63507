//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! at the handler boundary.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Free-text notes attached to a booking
pub const MAX_NOTE_LEN: usize = 500;

/// Wire date format: YYYY-MM-DD
pub const DATE_LEN: usize = 10;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a strictly positive integer field (guest_count, duration)
pub fn validate_positive(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}

/// Validate a non-negative numeric field (deposit_amount)
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("2024-01-01", "date", DATE_LEN).is_ok());
        assert!(validate_required_text("  ", "date", DATE_LEN).is_err());
        assert!(validate_required_text("2024-01-01T00:00", "date", DATE_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("window seat".into()), "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(1, "guest_count").is_ok());
        assert!(validate_positive(0, "guest_count").is_err());
        assert!(validate_positive(-5, "duration").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative(0.0, "deposit_amount").is_ok());
        assert!(validate_non_negative(150.5, "deposit_amount").is_ok());
        assert!(validate_non_negative(-0.01, "deposit_amount").is_err());
        assert!(validate_non_negative(f64::NAN, "deposit_amount").is_err());
    }
}
