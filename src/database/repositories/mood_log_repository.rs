// ABOUTME: Mood log repository implementation
// ABOUTME: Backs the mood aggregator with the mood_logs table

use crate::database::Database;
use crate::errors::AppResult;
use async_trait::async_trait;
use burjo_core::models::{MoodLog, MoodType};
use burjo_intelligence::mood_aggregator::utc_day_bounds;
use burjo_intelligence::MoodLogStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// `SQLite` implementation of `MoodLogStore`
pub struct MoodLogRepositoryImpl {
    db: Database,
}

impl MoodLogRepositoryImpl {
    /// Create a new repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MoodLogStore for MoodLogRepositoryImpl {
    async fn get_mood_logs(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<MoodLog>> {
        self.db.mood_logs().get_mood_logs(user_id, start, end).await
    }

    async fn get_latest_mood_log(&self, user_id: Uuid) -> AppResult<Option<MoodLog>> {
        self.db.mood_logs().get_latest_mood_log(user_id).await
    }

    async fn has_mood_log_today(&self, user_id: Uuid) -> AppResult<bool> {
        let (start, end) = utc_day_bounds(Utc::now());
        self.db
            .mood_logs()
            .has_mood_log_between(user_id, start, end)
            .await
    }

    async fn insert_mood_log(
        &self,
        user_id: Uuid,
        mood: MoodType,
        notes: Option<String>,
    ) -> AppResult<MoodLog> {
        self.db
            .mood_logs()
            .insert_mood_log(user_id, mood, notes)
            .await
    }
}
