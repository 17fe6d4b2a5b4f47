// ABOUTME: Mood journal database operations
// ABOUTME: Append-only inserts plus range, latest-entry and per-day queries

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::constants::mood_limits;
use crate::errors::{AppError, AppResult};
use burjo_core::models::{MoodLog, MoodType};
use burjo_core::validation;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Mood journal operations
pub struct MoodLogManager {
    pool: SqlitePool,
}

impl MoodLogManager {
    /// Create a new mood log manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an entry stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns a validation error for oversized notes or a database error
    pub async fn insert_mood_log(
        &self,
        user_id: Uuid,
        mood: MoodType,
        notes: Option<String>,
    ) -> AppResult<MoodLog> {
        validation::max_len_opt("notes", notes.as_deref(), mood_limits::MAX_NOTES_LEN)?;
        let log = MoodLog {
            id: Uuid::new_v4(),
            user_id,
            mood,
            notes: notes.filter(|n| !n.trim().is_empty()),
            logged_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO mood_logs (id, user_id, mood, notes, logged_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(log.id.to_string())
        .bind(user_id.to_string())
        .bind(mood.as_str())
        .bind(&log.notes)
        .bind(encode_timestamp(log.logged_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert mood log: {e}")))?;

        Ok(log)
    }

    /// Entries with `start <= logged_at <= end`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_mood_logs(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<MoodLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, mood, notes, logged_at
            FROM mood_logs
            WHERE user_id = $1 AND logged_at >= $2 AND logged_at <= $3
            ORDER BY logged_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(encode_timestamp(start))
        .bind(encode_timestamp(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get mood logs: {e}")))?;

        rows.iter().map(row_to_mood_log).collect()
    }

    /// Most recent entry
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_latest_mood_log(&self, user_id: Uuid) -> AppResult<Option<MoodLog>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, mood, notes, logged_at
            FROM mood_logs
            WHERE user_id = $1
            ORDER BY logged_at DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get latest mood log: {e}")))?;

        row.map(|r| row_to_mood_log(&r)).transpose()
    }

    /// Whether any entry falls in `[start, end)`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn has_mood_log_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM mood_logs
            WHERE user_id = $1 AND logged_at >= $2 AND logged_at < $3
            ",
        )
        .bind(user_id.to_string())
        .bind(encode_timestamp(start))
        .bind(encode_timestamp(end))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to check mood logs: {e}")))?;

        Ok(count > 0)
    }
}

fn row_to_mood_log(row: &sqlx::sqlite::SqliteRow) -> AppResult<MoodLog> {
    let mood: String = row.get("mood");
    Ok(MoodLog {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        user_id: decode_uuid(&row.get::<String, _>("user_id"))?,
        mood: MoodType::parse(&mood)
            .map_err(|_| AppError::database(format!("Invalid stored mood: {mood}")))?,
        notes: row.get("notes"),
        logged_at: decode_timestamp(&row.get::<String, _>("logged_at"))?,
    })
}
