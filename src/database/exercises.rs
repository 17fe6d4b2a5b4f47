// ABOUTME: Exercise catalog database operations
// ABOUTME: Listing by category for recommendations plus administrative create, update and delete

use super::{decode_timestamp, decode_uuid, encode_timestamp};
use crate::constants::exercise_limits;
use crate::errors::{AppError, AppResult};
use burjo_core::models::{Exercise, RiskCategory};
use burjo_core::validation;
use chrono::Utc;
use serde::Deserialize;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Fields for creating or replacing a catalog entry
#[derive(Debug, Clone, Deserialize)]
pub struct NewExercise {
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Target risk category
    pub category: RiskCategory,
}

impl NewExercise {
    /// Check required fields and lengths
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        validation::required("name", &self.name)?;
        validation::max_len("name", &self.name, exercise_limits::MAX_NAME_LEN)?;
        validation::required("description", &self.description)?;
        validation::max_len(
            "description",
            &self.description,
            exercise_limits::MAX_DESCRIPTION_LEN,
        )
    }
}

const SELECT_EXERCISE: &str = r"
    SELECT id, name, description, category, created_at, updated_at
    FROM exercises
";

const ORDER_BY_SEVERITY_THEN_NAME: &str = r"
    ORDER BY CASE category
        WHEN 'safe' THEN 0
        WHEN 'light_supervision' THEN 1
        ELSE 2
    END, name
";

/// Exercise catalog operations
pub struct ExerciseManager {
    pub(super) pool: SqlitePool,
}

impl ExerciseManager {
    /// Create a new exercise manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a catalog entry
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input or a database error
    pub async fn create_exercise(&self, input: &NewExercise) -> AppResult<Exercise> {
        input.validate()?;
        let exercise = Exercise {
            id: Uuid::new_v4(),
            name: input.name.trim().to_owned(),
            description: input.description.trim().to_owned(),
            category: input.category,
            created_at: Utc::now(),
            updated_at: None,
        };

        sqlx::query(
            r"
            INSERT INTO exercises (id, name, description, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NULL)
            ",
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(exercise.category.as_str())
        .bind(encode_timestamp(exercise.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;

        Ok(exercise)
    }

    /// Get a catalog entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_exercise(&self, exercise_id: Uuid) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(&format!("{SELECT_EXERCISE} WHERE id = $1"))
            .bind(exercise_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    /// Whole catalog ordered by category severity then name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(&format!("{SELECT_EXERCISE} {ORDER_BY_SEVERITY_THEN_NAME}"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Entries tagged with exactly `category`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_by_category(&self, category: RiskCategory) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(&format!(
            "{SELECT_EXERCISE} WHERE category = $1 ORDER BY name"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises by category: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Replace an entry's fields
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the id is unknown
    pub async fn update_exercise(
        &self,
        exercise_id: Uuid,
        input: &NewExercise,
    ) -> AppResult<Exercise> {
        input.validate()?;
        let result = sqlx::query(
            r"
            UPDATE exercises
            SET name = $1, description = $2, category = $3, updated_at = $4
            WHERE id = $5
            ",
        )
        .bind(input.name.trim())
        .bind(input.description.trim())
        .bind(input.category.as_str())
        .bind(encode_timestamp(Utc::now()))
        .bind(exercise_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Exercise").with_resource_id(exercise_id.to_string()));
        }
        self.get_exercise(exercise_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise"))
    }

    /// Remove an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the id is unknown
    pub async fn delete_exercise(&self, exercise_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(exercise_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Exercise").with_resource_id(exercise_id.to_string()));
        }
        Ok(())
    }

    /// Number of catalog entries
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_exercises(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))
    }
}

fn row_to_exercise(row: &sqlx::sqlite::SqliteRow) -> AppResult<Exercise> {
    let category: String = row.get("category");
    let updated_at: Option<String> = row.get("updated_at");
    Ok(Exercise {
        id: decode_uuid(&row.get::<String, _>("id"))?,
        name: row.get("name"),
        description: row.get("description"),
        category: RiskCategory::parse(&category)
            .map_err(|_| AppError::database(format!("Invalid stored category: {category}")))?,
        created_at: decode_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: updated_at.as_deref().map(decode_timestamp).transpose()?,
    })
}
