// ABOUTME: User account database operations
// ABOUTME: Handles registration, lookup by email or id, last-active updates, and account deletion

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::errors::{AppError, AppResult};
use burjo_core::models::User;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// User account operations
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account; the email must already be normalized
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the email is taken
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        display_name: Option<&str>,
    ) -> AppResult<User> {
        if self.get_user_by_email(email).await?.is_some() {
            return Err(AppError::already_exists("User with this email"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            display_name: display_name.map(ToOwned::to_owned),
            password_hash: password_hash.to_owned(),
            created_at: now,
            last_active: now,
        };

        sqlx::query(
            r"
            INSERT INTO users (id, email, display_name, password_hash, created_at, last_active)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(encode_timestamp(now))
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                AppError::already_exists("User with this email")
            }
            _ => AppError::database(format!("Failed to create user: {e}")),
        })?;

        Ok(user)
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, email, display_name, password_hash, created_at, last_active
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Get a user by (normalized) email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, email, display_name, password_hash, created_at, last_active
            FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user by email: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Update the user's last active timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_last_active(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_active = $1 WHERE id = $2")
            .bind(encode_timestamp(Utc::now()))
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update last active: {e}")))?;
        Ok(())
    }

    /// Delete the account and, through cascades, everything it owns
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no such user exists
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User").with_user_id(user_id));
        }
        Ok(())
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
    Ok(User {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        email: row.get("email"),
        display_name: row.get("display_name"),
        password_hash: row.get("password_hash"),
        created_at: decode_timestamp(&row.get::<String, _>("created_at"))?,
        last_active: decode_timestamp(&row.get::<String, _>("last_active"))?,
    })
}
