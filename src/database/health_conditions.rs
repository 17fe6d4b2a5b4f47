// ABOUTME: Health condition database operations
// ABOUTME: At most one condition per profile; upserts stamp updated_at on replacement

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::constants::health_limits;
use crate::errors::{AppError, AppResult};
use burjo_core::models::HealthCondition;
use burjo_core::validation;
use chrono::Utc;
use serde::Deserialize;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Client-supplied condition fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthConditionInput {
    /// Comma-separated chronic diseases
    #[serde(default)]
    pub chronic_diseases: String,
    /// Comma-separated physical complaints
    #[serde(default)]
    pub physical_complaints: String,
    /// Typical daily activity in minutes
    #[serde(default)]
    pub daily_activity_minutes: u32,
}

impl HealthConditionInput {
    /// Check lengths and the activity range
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        validation::max_len(
            "chronic_diseases",
            &self.chronic_diseases,
            health_limits::MAX_CHRONIC_DISEASES_LEN,
        )?;
        validation::max_len(
            "physical_complaints",
            &self.physical_complaints,
            health_limits::MAX_PHYSICAL_COMPLAINTS_LEN,
        )?;
        validation::in_range(
            "daily_activity_minutes",
            self.daily_activity_minutes,
            (0, health_limits::MAX_DAILY_ACTIVITY_MINUTES),
        )
    }
}

/// Health condition operations
pub struct HealthConditionManager {
    pool: SqlitePool,
}

impl HealthConditionManager {
    /// Create a new health condition manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the condition for `profile_id` or replace the existing one
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or a database error
    pub async fn upsert_condition(
        &self,
        profile_id: Uuid,
        input: &HealthConditionInput,
    ) -> AppResult<HealthCondition> {
        input.validate()?;
        let now = encode_timestamp(Utc::now());

        sqlx::query(
            r"
            INSERT INTO health_conditions
                (id, profile_id, chronic_diseases, physical_complaints,
                 daily_activity_minutes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NULL)
            ON CONFLICT(profile_id) DO UPDATE SET
                chronic_diseases = excluded.chronic_diseases,
                physical_complaints = excluded.physical_complaints,
                daily_activity_minutes = excluded.daily_activity_minutes,
                updated_at = $6
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(profile_id.to_string())
        .bind(input.chronic_diseases.trim())
        .bind(input.physical_complaints.trim())
        .bind(i64::from(input.daily_activity_minutes))
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save health condition: {e}")))?;

        self.get_condition(profile_id)
            .await?
            .ok_or_else(|| AppError::internal("Health condition vanished after upsert"))
    }

    /// Get the condition recorded for `profile_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_condition(&self, profile_id: Uuid) -> AppResult<Option<HealthCondition>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, chronic_diseases, physical_complaints,
                   daily_activity_minutes, created_at, updated_at
            FROM health_conditions WHERE profile_id = $1
            ",
        )
        .bind(profile_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get health condition: {e}")))?;

        row.map(|r| row_to_condition(&r)).transpose()
    }
}

fn row_to_condition(row: &sqlx::sqlite::SqliteRow) -> AppResult<HealthCondition> {
    let minutes: i64 = row.get("daily_activity_minutes");
    let updated_at: Option<String> = row.get("updated_at");
    Ok(HealthCondition {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        profile_id: decode_uuid(&row.get::<String, _>("profile_id"))?,
        chronic_diseases: row.get("chronic_diseases"),
        physical_complaints: row.get("physical_complaints"),
        daily_activity_minutes: u32::try_from(minutes).map_err(|_| {
            AppError::database(format!("Invalid stored activity minutes: {minutes}"))
        })?,
        created_at: decode_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: updated_at.as_deref().map(decode_timestamp).transpose()?,
    })
}
