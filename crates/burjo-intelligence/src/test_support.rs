// ABOUTME: In-memory implementation of the storage traits for unit tests
// ABOUTME: Supports seeding profiles, conditions, exercises, and mood logs plus forced read failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::mood_aggregator::utc_day_bounds;
use crate::store::{ExerciseCatalog, HealthProfileStore, MoodLogStore};
use async_trait::async_trait;
use burjo_core::errors::{AppError, AppResult};
use burjo_core::models::{
    Exercise, HealthCondition, HealthProfile, MoodLog, MoodType, RiskCategory,
};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    profiles: Mutex<Vec<HealthProfile>>,
    conditions: Mutex<Vec<HealthCondition>>,
    exercises: Mutex<Vec<Exercise>>,
    moods: Mutex<Vec<MoodLog>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn add_profile(&self, user_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.profiles.lock().unwrap().push(HealthProfile {
            id,
            user_id,
            full_name: "Budi Santoso".to_owned(),
            age: 40,
            gender: "male".to_owned(),
            height_cm: 170.0,
            weight_kg: 70.0,
            medical_history: None,
            fitness_level: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        id
    }

    pub fn set_condition(&self, profile_id: Uuid, diseases: &str, complaints: &str, minutes: u32) {
        let mut conditions = self.conditions.lock().unwrap();
        conditions.retain(|c| c.profile_id != profile_id);
        conditions.push(HealthCondition {
            id: Uuid::new_v4(),
            profile_id,
            chronic_diseases: diseases.to_owned(),
            physical_complaints: complaints.to_owned(),
            daily_activity_minutes: minutes,
            created_at: Utc::now(),
            updated_at: None,
        });
    }

    pub fn add_exercise(&self, name: &str, category: RiskCategory) -> Uuid {
        let id = Uuid::new_v4();
        self.exercises.lock().unwrap().push(Exercise {
            id,
            name: name.to_owned(),
            description: format!("{name} description"),
            category,
            created_at: Utc::now(),
            updated_at: None,
        });
        id
    }

    pub fn add_mood(&self, user_id: Uuid, mood: MoodType, logged_at: DateTime<Utc>) {
        self.moods.lock().unwrap().push(MoodLog {
            id: Uuid::new_v4(),
            user_id,
            mood,
            notes: None,
            logged_at,
        });
    }

    pub fn fail_reads(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthProfileStore for InMemoryStore {
    async fn get_health_profile(&self, profile_id: Uuid) -> AppResult<Option<HealthProfile>> {
        self.check()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == profile_id)
            .cloned())
    }

    async fn find_profile_for_user(&self, user_id: Uuid) -> AppResult<Option<HealthProfile>> {
        self.check()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn get_health_condition(&self, profile_id: Uuid) -> AppResult<Option<HealthCondition>> {
        self.check()?;
        Ok(self
            .conditions
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.profile_id == profile_id)
            .cloned())
    }
}

#[async_trait]
impl ExerciseCatalog for InMemoryStore {
    async fn get_exercises_by_category(&self, category: RiskCategory) -> AppResult<Vec<Exercise>> {
        self.check()?;
        Ok(self
            .exercises
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MoodLogStore for InMemoryStore {
    async fn get_mood_logs(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<MoodLog>> {
        self.check()?;
        let mut logs: Vec<MoodLog> = self
            .moods
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id && m.logged_at >= start && m.logged_at <= end)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        Ok(logs)
    }

    async fn get_latest_mood_log(&self, user_id: Uuid) -> AppResult<Option<MoodLog>> {
        self.check()?;
        Ok(self
            .moods
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id)
            .max_by_key(|m| m.logged_at)
            .cloned())
    }

    async fn has_mood_log_today(&self, user_id: Uuid) -> AppResult<bool> {
        self.check()?;
        let (start, end) = utc_day_bounds(Utc::now());
        Ok(self
            .moods
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.user_id == user_id && m.logged_at >= start && m.logged_at < end))
    }

    async fn insert_mood_log(
        &self,
        user_id: Uuid,
        mood: MoodType,
        notes: Option<String>,
    ) -> AppResult<MoodLog> {
        self.check()?;
        let log = MoodLog {
            id: Uuid::new_v4(),
            user_id,
            mood,
            notes,
            logged_at: Utc::now(),
        };
        self.moods.lock().unwrap().push(log.clone());
        Ok(log)
    }
}
