//! SQLite-backed user storage.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::AuthError;
use crate::user::{NewUser, ProfileUpdate, User};

/// Data access for the `users` table.
///
/// The pool is injected by the composition root; this type never opens
/// connections on its own.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id                INTEGER PRIMARY KEY AUTOINCREMENT,
                name              TEXT NOT NULL,
                email             TEXT NOT NULL UNIQUE,
                password_hash     TEXT NOT NULL,
                last_name         TEXT NULL,
                address           TEXT NULL,
                profile_image_uri TEXT NULL,
                birthdate         TEXT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new user. A duplicate email maps to [`AuthError::EmailTaken`].
    pub async fn insert(&self, new_user: &NewUser) -> Result<User, AuthError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
            other => AuthError::Storage(other),
        })?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            last_name: None,
            address: None,
            profile_image_uri: None,
            birthdate: None,
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, last_name, address,
                   profile_image_uri, birthdate
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Overwrite the profile fields of the user with `email`.
    ///
    /// Returns `false` if no such user exists.
    pub async fn update_profile(
        &self,
        email: &str,
        update: &ProfileUpdate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?1,
                last_name = ?2,
                address = ?3,
                profile_image_uri = ?4,
                birthdate = ?5
            WHERE email = ?6
            "#,
        )
        .bind(&update.name)
        .bind(&update.last_name)
        .bind(&update.address)
        .bind(&update.profile_image_uri)
        .bind(update.birthdate)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        last_name: row.try_get("last_name")?,
        address: row.try_get("address")?,
        profile_image_uri: row.try_get("profile_image_uri")?,
        birthdate: row.try_get("birthdate")?,
    })
}
