//! Account use cases: sign up, log in, profile edits, and the session user.

use std::sync::{PoisonError, RwLock};

use appshop_core::{check_field, validate_input_text};

use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::registration::Registration;
use crate::repository::UserRepository;
use crate::user::{NewUser, ProfileUpdate, User, normalize_email};

/// Authentication service for one app instance.
///
/// Holds at most one logged-in user. Passwords are stored as bcrypt hashes.
#[derive(Debug)]
pub struct AuthService {
    users: UserRepository,
    hasher: PasswordHasher,
    session: RwLock<Option<User>>,
}

impl AuthService {
    pub fn new(users: UserRepository, hasher: PasswordHasher) -> Self {
        Self {
            users,
            hasher,
            session: RwLock::new(None),
        }
    }

    /// Register a new account. Does not log the user in.
    pub async fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let registration = registration.check().map_err(AuthError::Validation)?;

        if self.users.find_by_email(&registration.email).await?.is_some() {
            tracing::info!(email = %registration.email, "registration rejected: email taken");
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash_off_runtime(registration.password)
            .await?;
        let user = self
            .users
            .insert(&NewUser {
                name: registration.name,
                email: registration.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Check credentials and make the user the session user.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::info!("login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify_off_runtime(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            tracing::info!(user_id = user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "user logged in");
        self.set_session(Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        self.set_session(None);
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Update the profile of the account with `email`.
    ///
    /// If that account is the session user, the session copy is refreshed.
    pub async fn update_profile(
        &self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<User, AuthError> {
        check_field("name", validate_input_text("name", &update.name, 1))
            .map_err(|err| AuthError::Validation(vec![err]))?;

        let email = normalize_email(email);
        let update = ProfileUpdate {
            name: update.name.trim().to_string(),
            ..update
        };
        if !self.users.update_profile(&email, &update).await? {
            return Err(AuthError::NotFound);
        }

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if session.as_ref().is_some_and(|current| current.email == user.email) {
            *session = Some(user.clone());
        }

        tracing::info!(user_id = user.id, "profile updated");
        Ok(user)
    }

    fn set_session(&self, user: Option<User>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}
