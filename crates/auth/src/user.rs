//! Local user accounts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user, as stored in the local database.
///
/// The email is unique (case-insensitive, stored lowercased) and serves as the
/// account key for logins and profile updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub profile_image_uri: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub profile_image_uri: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

/// A user row that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Canonical form of an email used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
