//! `appshop-auth`: local user accounts.
//!
//! Sign-up validation, bcrypt password hashing, SQLite storage, and the
//! session user. Decoupled from any UI: screens call [`AuthService`] and render
//! the returned [`AuthError`] field messages.

pub mod error;
pub mod password;
pub mod registration;
pub mod repository;
pub mod service;
pub mod user;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use registration::Registration;
pub use repository::UserRepository;
pub use service::AuthService;
pub use user::{NewUser, ProfileUpdate, User};
