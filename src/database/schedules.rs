// ABOUTME: Weekly schedule database operations
// ABOUTME: Whole-schedule replacement in a transaction plus per-item and bulk deletion

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::constants::schedule_limits;
use crate::errors::{AppError, AppResult};
use burjo_core::models::{DayOfWeek, ScheduleItem};
use burjo_core::validation;
use chrono::Utc;
use serde::Deserialize;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Client-supplied schedule entry
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItemInput {
    /// Exercise name
    pub exercise_name: String,
    /// Planned weekday
    pub day_of_week: DayOfWeek,
    /// Planned duration in minutes
    pub duration_minutes: u32,
}

impl ScheduleItemInput {
    /// Check the name and duration
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        validation::required("exercise_name", &self.exercise_name)?;
        validation::max_len(
            "exercise_name",
            &self.exercise_name,
            schedule_limits::MAX_EXERCISE_NAME_LEN,
        )?;
        validation::in_range(
            "duration_minutes",
            self.duration_minutes,
            schedule_limits::DURATION_MINUTES_RANGE,
        )
    }
}

/// Weekly schedule operations
pub struct ScheduleManager {
    pool: SqlitePool,
}

impl ScheduleManager {
    /// Create a new schedule manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All items owned by `user_id`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_schedule(&self, user_id: Uuid) -> AppResult<Vec<ScheduleItem>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, exercise_name, day_of_week, duration_minutes, created_at
            FROM schedule_items
            WHERE user_id = $1
            ORDER BY created_at, rowid
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get schedule: {e}")))?;

        rows.iter().map(row_to_item).collect()
    }

    /// Replace the user's whole schedule atomically
    ///
    /// # Errors
    ///
    /// Returns a validation error if any item is invalid, leaving the old schedule intact
    pub async fn replace_schedule(
        &self,
        user_id: Uuid,
        items: &[ScheduleItemInput],
    ) -> AppResult<Vec<ScheduleItem>> {
        for item in items {
            item.validate()?;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM schedule_items WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear schedule: {e}")))?;

        let now = encode_timestamp(Utc::now());
        for item in items {
            sqlx::query(
                r"
                INSERT INTO schedule_items
                    (id, user_id, exercise_name, day_of_week, duration_minutes, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(user_id.to_string())
            .bind(item.exercise_name.trim())
            .bind(item.day_of_week.as_str())
            .bind(i64::from(item.duration_minutes))
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert schedule item: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit schedule: {e}")))?;
        debug!(user_id = %user_id, items = items.len(), "Schedule replaced");

        self.get_schedule(user_id).await
    }

    /// Delete one item owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the item does not exist or belongs to someone else
    pub async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM schedule_items WHERE id = $1 AND user_id = $2")
            .bind(item_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete schedule item: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Schedule item")
                .with_user_id(user_id)
                .with_resource_id(item_id.to_string()));
        }
        Ok(())
    }

    /// Delete every item owned by `user_id`, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn clear_schedule(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM schedule_items WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear schedule: {e}")))?;
        Ok(result.rows_affected())
    }
}

fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> AppResult<ScheduleItem> {
    let day: String = row.get("day_of_week");
    let minutes: i64 = row.get("duration_minutes");
    Ok(ScheduleItem {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        user_id: decode_uuid(&row.get::<String, _>("user_id"))?,
        exercise_name: row.get("exercise_name"),
        day_of_week: DayOfWeek::parse(&day)
            .map_err(|_| AppError::database(format!("Invalid stored day: {day}")))?,
        duration_minutes: u32::try_from(minutes)
            .map_err(|_| AppError::database(format!("Invalid stored duration: {minutes}")))?,
        created_at: decode_timestamp(&row.get::<String, _>("created_at"))?,
    })
}
