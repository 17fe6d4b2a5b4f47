// ABOUTME: SQLite persistence layer with inline migrations and per-table managers
// ABOUTME: Owns the connection pool and hands out managers for users, health, exercises, moods and schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Database Management
//!
//! [`Database`] opens the pool and runs `CREATE TABLE IF NOT EXISTS`
//! migrations at startup. Each table has a manager holding a clone of the
//! pool. Timestamps are stored as fixed-width RFC 3339 UTC text so string
//! comparison in SQL matches chronological order.

mod exercises;
mod health_conditions;
mod mood_logs;
mod profiles;
/// Adapters exposing the managers through the intelligence storage traits
pub mod repositories;
mod schedules;
mod seed;
mod users;

pub use exercises::{ExerciseManager, NewExercise};
pub use health_conditions::{HealthConditionManager, HealthConditionInput};
pub use mood_logs::MoodLogManager;
pub use profiles::{ProfileInput, ProfileManager};
pub use schedules::{ScheduleItemInput, ScheduleManager};
pub use seed::REFERENCE_EXERCISES;
pub use users::UserManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Connection pool plus migrations
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database, creating the file if needed, and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or any migration fails
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            DatabaseUrl::Memory => {
                let options = SqliteConnectOptions::from_str("sqlite::memory:")
                    .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
                    .foreign_keys(true);
                // Every connection to :memory: is a separate database
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect_with(options)
                    .await
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::config(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .foreign_keys(true);
                SqlitePoolOptions::new().connect_with(options).await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// User accounts
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Health profiles
    #[must_use]
    pub fn profiles(&self) -> ProfileManager {
        ProfileManager::new(self.pool.clone())
    }

    /// Health conditions
    #[must_use]
    pub fn health_conditions(&self) -> HealthConditionManager {
        HealthConditionManager::new(self.pool.clone())
    }

    /// Exercise catalog
    #[must_use]
    pub fn exercises(&self) -> ExerciseManager {
        ExerciseManager::new(self.pool.clone())
    }

    /// Mood journal
    #[must_use]
    pub fn mood_logs(&self) -> MoodLogManager {
        MoodLogManager::new(self.pool.clone())
    }

    /// Weekly schedules
    #[must_use]
    pub fn schedules(&self) -> ScheduleManager {
        ScheduleManager::new(self.pool.clone())
    }

    /// Cheap liveness query used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        debug!(statements = SCHEMA.len(), "Migrations applied");
        Ok(())
    }
}

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        email TEXT UNIQUE NOT NULL,
        display_name TEXT,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL,
        last_active TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS health_profiles (
        id TEXT PRIMARY KEY,
        user_id TEXT UNIQUE NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        full_name TEXT NOT NULL,
        age INTEGER NOT NULL,
        gender TEXT NOT NULL,
        height_cm REAL NOT NULL,
        weight_kg REAL NOT NULL,
        medical_history TEXT,
        fitness_level TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS health_conditions (
        id TEXT PRIMARY KEY,
        profile_id TEXT UNIQUE NOT NULL REFERENCES health_profiles(id) ON DELETE CASCADE,
        chronic_diseases TEXT NOT NULL DEFAULT '',
        physical_complaints TEXT NOT NULL DEFAULT '',
        daily_activity_minutes INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS exercises (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL CHECK (category IN ('safe', 'light_supervision', 'medical_supervision')),
        created_at TEXT NOT NULL,
        updated_at TEXT
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_exercises_category ON exercises(category)",
    r"
    CREATE TABLE IF NOT EXISTS mood_logs (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        mood TEXT NOT NULL CHECK (mood IN ('sangat_baik', 'baik', 'sedang', 'buruk')),
        notes TEXT,
        logged_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_mood_logs_user_time ON mood_logs(user_id, logged_at)",
    r"
    CREATE TABLE IF NOT EXISTS schedule_items (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        exercise_name TEXT NOT NULL,
        day_of_week TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_schedule_items_user ON schedule_items(user_id)",
];

/// Encode a timestamp for storage
pub(crate) fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Decode a stored timestamp
pub(crate) fn decode_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp '{raw}': {e}")))
}

/// Decode a stored identifier
pub(crate) fn decode_uuid(raw: &str) -> AppResult<uuid::Uuid> {
    uuid::Uuid::parse_str(raw)
        .map_err(|e| AppError::database(format!("Invalid stored id '{raw}': {e}")))
}
