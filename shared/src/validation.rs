//! Input validation helpers
//!
//! Required-field checks run before create/update requests leave the
//! client. Everything beyond that is left to the backend.

use crate::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer, username, chamber model, issue title, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, bios
pub const MAX_NOTE_LEN: usize = 5000;

/// Short identifiers: serial numbers, phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
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
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required reference (foreign id) has been chosen.
pub fn validate_required_ref(value: Option<i64>, field: &str) -> Result<(), AppError> {
    match value {
        Some(id) if id > 0 => Ok(()),
        _ => Err(AppError::required_field(field)),
    }
}

/// Validate an email address: required, bounded, and shaped like `local@domain`.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::validation(format!("{field} is not a valid email address"))
            .with_detail("field", field)),
    }
}
