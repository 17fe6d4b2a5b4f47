// ABOUTME: Health profile database operations
// ABOUTME: One profile per user, created or replaced through a validated upsert

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::constants::profile_limits;
use crate::errors::{AppError, AppResult};
use burjo_core::models::HealthProfile;
use burjo_core::validation;
use chrono::Utc;
use serde::Deserialize;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Client-supplied profile fields
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    /// Full name
    pub full_name: String,
    /// Age in years
    pub age: u32,
    /// Free-text gender
    pub gender: String,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Free-text medical history
    #[serde(default)]
    pub medical_history: Option<String>,
    /// Self-reported fitness level
    #[serde(default)]
    pub fitness_level: Option<String>,
}

impl ProfileInput {
    /// Check lengths and physical ranges
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        validation::required("full_name", &self.full_name)?;
        validation::max_len("full_name", &self.full_name, profile_limits::MAX_FULL_NAME_LEN)?;
        validation::in_range("age", self.age, profile_limits::AGE_RANGE)?;
        validation::required("gender", &self.gender)?;
        validation::max_len("gender", &self.gender, profile_limits::MAX_LABEL_LEN)?;
        validation::in_range("height_cm", self.height_cm, profile_limits::HEIGHT_CM_RANGE)?;
        validation::in_range("weight_kg", self.weight_kg, profile_limits::WEIGHT_KG_RANGE)?;
        validation::max_len_opt(
            "medical_history",
            self.medical_history.as_deref(),
            profile_limits::MAX_MEDICAL_HISTORY_LEN,
        )?;
        validation::max_len_opt(
            "fitness_level",
            self.fitness_level.as_deref(),
            profile_limits::MAX_LABEL_LEN,
        )
    }
}

/// Health profile operations
pub struct ProfileManager {
    pool: SqlitePool,
}

impl ProfileManager {
    /// Create a new profile manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the user's profile, or replace its fields if one exists
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or a database error
    pub async fn upsert_profile(
        &self,
        user_id: Uuid,
        input: &ProfileInput,
    ) -> AppResult<HealthProfile> {
        input.validate()?;
        let now = encode_timestamp(Utc::now());

        sqlx::query(
            r"
            INSERT INTO health_profiles
                (id, user_id, full_name, age, gender, height_cm, weight_kg,
                 medical_history, fitness_level, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            ON CONFLICT(user_id) DO UPDATE SET
                full_name = excluded.full_name,
                age = excluded.age,
                gender = excluded.gender,
                height_cm = excluded.height_cm,
                weight_kg = excluded.weight_kg,
                medical_history = excluded.medical_history,
                fitness_level = excluded.fitness_level,
                updated_at = excluded.updated_at
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(input.full_name.trim())
        .bind(i64::from(input.age))
        .bind(input.gender.trim())
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(&input.medical_history)
        .bind(&input.fitness_level)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save health profile: {e}")))?;

        self.get_profile_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::internal("Health profile vanished after upsert"))
    }

    /// Get a profile by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_profile(&self, profile_id: Uuid) -> AppResult<Option<HealthProfile>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, full_name, age, gender, height_cm, weight_kg,
                   medical_history, fitness_level, created_at, updated_at
            FROM health_profiles WHERE id = $1
            ",
        )
        .bind(profile_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get health profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// Get the profile owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_profile_by_user(&self, user_id: Uuid) -> AppResult<Option<HealthProfile>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, full_name, age, gender, height_cm, weight_kg,
                   medical_history, fitness_level, created_at, updated_at
            FROM health_profiles WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get health profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }
}

fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> AppResult<HealthProfile> {
    let age: i64 = row.get("age");
    Ok(HealthProfile {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        user_id: decode_uuid(&row.get::<String, _>("user_id"))?,
        full_name: row.get("full_name"),
        age: u32::try_from(age)
            .map_err(|_| AppError::database(format!("Invalid stored age: {age}")))?,
        gender: row.get("gender"),
        height_cm: row.get("height_cm"),
        weight_kg: row.get("weight_kg"),
        medical_history: row.get("medical_history"),
        fitness_level: row.get("fitness_level"),
        created_at: decode_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: decode_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}
