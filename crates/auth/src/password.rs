//! Password hashing utilities

use bcrypt::{BcryptError, hash, verify};

pub use bcrypt::DEFAULT_COST;

use crate::error::AuthError;

/// bcrypt hasher with a configurable work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// Verify a password against a stored hash
    pub fn verify(&self, password: &str, hashed: &str) -> Result<bool, BcryptError> {
        verify(password, hashed)
    }

    /// [`PasswordHasher::hash`] on the blocking pool, keeping runtime workers free.
    pub async fn hash_off_runtime(self, password: String) -> Result<String, AuthError> {
        let hashed = tokio::task::spawn_blocking(move || self.hash(&password)).await??;
        Ok(hashed)
    }

    /// [`PasswordHasher::verify`] on the blocking pool.
    pub async fn verify_off_runtime(
        self,
        password: String,
        hashed: String,
    ) -> Result<bool, AuthError> {
        let matches = tokio::task::spawn_blocking(move || self.verify(&password, &hashed)).await??;
        Ok(matches)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
