//! Form field validation helpers.
//!
//! These mirror what a form screen needs: a human-readable message per field,
//! keyed by the field's display name.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Default minimum length for free-text fields.
pub const DEFAULT_MIN_TEXT_LEN: usize = 3;

/// A validation failure tied to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<FieldError> for DomainError {
    fn from(value: FieldError) -> Self {
        DomainError::validation(value.message)
    }
}

/// Validate a free-text field.
///
/// Blank input is rejected as missing; otherwise the trimmed value must have at
/// least `min_len` characters.
pub fn validate_input_text(name: &str, value: &str, min_len: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{name} is required")));
    }
    if value.trim().chars().count() < min_len {
        return Err(DomainError::validation(format!(
            "{name} must be at least {min_len} characters"
        )));
    }
    Ok(())
}

/// Validate an integer field entered as text and return the parsed value.
pub fn validate_int_field(name: &str, value: &str, min: i64) -> DomainResult<i64> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{name} is required")));
    }
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("{name} must be an integer")))?;
    if number < min {
        return Err(DomainError::validation(format!(
            "{name} must be greater than or equal to {min}"
        )));
    }
    Ok(number)
}

/// Run a field check and turn its failure into a [`FieldError`].
pub fn check_field<T>(field: &str, result: DomainResult<T>) -> Result<T, FieldError> {
    result.map_err(|err| match err {
        DomainError::Validation(msg) => FieldError::new(field, msg),
        other => FieldError::new(field, other.to_string()),
    })
}
