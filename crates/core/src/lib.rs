//! `appshop-core`: domain foundation building blocks.
//!
//! Shared error type, the value-object marker and form field validation. No IO.

pub mod error;
pub mod validation;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use validation::{
    DEFAULT_MIN_TEXT_LEN, FieldError, check_field, validate_input_text, validate_int_field,
};
pub use value_object::ValueObject;
