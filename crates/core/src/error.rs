//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic input failures live here. Transport and storage
/// failures belong to the crate that talks to the outside world.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank or malformed form input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Validation message, if this is a validation failure.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            DomainError::Validation(msg) => Some(msg),
        }
    }
}
