use thiserror::Error;

use appshop_core::FieldError;

/// Failures of account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more form fields were rejected.
    #[error("validation failed: {}", describe(.0))]
    Validation(Vec<FieldError>),

    #[error("email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable).
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AuthError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AuthError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
