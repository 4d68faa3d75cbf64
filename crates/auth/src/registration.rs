//! Sign-up form validation.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use appshop_core::FieldError;

use crate::user::normalize_email;

/// Sign-up form input.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Trim the name and canonicalize the email. Passwords are taken verbatim.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            ..self
        }
    }

    /// Normalize then validate, returning field errors sorted by field name.
    pub fn check(self) -> Result<Self, Vec<FieldError>> {
        let normalized = self.normalized();
        match normalized.validate() {
            Ok(()) => Ok(normalized),
            Err(errors) => Err(to_field_errors(&errors)),
        }
    }
}

/// Flatten `validator` errors into one message per failed rule.
pub fn to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_registration_is_normalized() {
        let reg = Registration::new("  Ana ", " Ana@Example.COM ", "secret1", "secret1")
            .check()
            .unwrap();
        assert_eq!(reg.name, "Ana");
        assert_eq!(reg.email, "ana@example.com");
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = Registration::new("   ", "ana@example.com", "secret1", "secret1")
            .check()
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
        assert_eq!(errors[0].message, "name is required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = Registration::new("Ana", "ana.example.com", "secret1", "secret1")
            .check()
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["email"]);
    }

    #[test]
    fn short_password_and_mismatch_are_both_reported() {
        let errors = Registration::new("Ana", "ana@example.com", "abc", "abd")
            .check()
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["confirm_password", "password"]);
        assert_eq!(errors[0].message, "passwords do not match");
        assert_eq!(errors[1].message, "password must be at least 6 characters");
    }
}
