// ABOUTME: Storage capability traits consumed by the decision engines
// ABOUTME: Implemented by the SQLite repositories in the server and by in-memory fakes in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use async_trait::async_trait;
use burjo_core::errors::AppResult;
use burjo_core::models::{
    Exercise, HealthCondition, HealthProfile, MoodLog, MoodType, RiskCategory,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read access to health profiles and their conditions
#[async_trait]
pub trait HealthProfileStore: Send + Sync {
    /// Fetch a profile by its identifier
    async fn get_health_profile(&self, profile_id: Uuid) -> AppResult<Option<HealthProfile>>;

    /// Fetch the profile owned by a user
    async fn find_profile_for_user(&self, user_id: Uuid) -> AppResult<Option<HealthProfile>>;

    /// Fetch the condition attached to a profile
    async fn get_health_condition(&self, profile_id: Uuid) -> AppResult<Option<HealthCondition>>;
}

/// Read access to the exercise catalog
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// All exercises tagged with `category`
    async fn get_exercises_by_category(&self, category: RiskCategory) -> AppResult<Vec<Exercise>>;
}

/// Append-only mood journal
#[async_trait]
pub trait MoodLogStore: Send + Sync {
    /// Entries with `start <= logged_at <= end`, newest first
    async fn get_mood_logs(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<MoodLog>>;

    /// Most recent entry
    async fn get_latest_mood_log(&self, user_id: Uuid) -> AppResult<Option<MoodLog>>;

    /// Whether any entry falls within the current UTC day
    async fn has_mood_log_today(&self, user_id: Uuid) -> AppResult<bool>;

    /// Insert a new entry stamped with the current time
    async fn insert_mood_log(
        &self,
        user_id: Uuid,
        mood: MoodType,
        notes: Option<String>,
    ) -> AppResult<MoodLog>;
}
