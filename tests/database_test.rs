// ABOUTME: Integration tests for the SQLite managers and repository adapters
// ABOUTME: Covers uniqueness, upserts, cascades, seeding and time-range queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use burjo_core::errors::ErrorCode;
use burjo_core::models::{DayOfWeek, MoodType, RiskCategory};
use burjo_intelligence::{ExerciseCatalog, HealthProfileStore, MoodLogStore};
use burjo_server::config::DatabaseUrl;
use burjo_server::database::repositories::{
    ExerciseCatalogRepositoryImpl, HealthProfileRepositoryImpl, MoodLogRepositoryImpl,
};
use burjo_server::database::{
    Database, HealthConditionInput, NewExercise, ProfileInput, ScheduleItemInput,
    REFERENCE_EXERCISES,
};
use chrono::{Duration, Utc};
use common::create_test_database;
use uuid::Uuid;

fn profile_input() -> ProfileInput {
    ProfileInput {
        full_name: "Agus Salim".to_owned(),
        age: 52,
        gender: "male".to_owned(),
        height_cm: 170.0,
        weight_kg: 72.5,
        medical_history: Some("operasi lutut 2019".to_owned()),
        fitness_level: None,
    }
}

async fn user(db: &Database) -> Uuid {
    db.users()
        .create_user(&format!("{}@example.com", Uuid::new_v4()), "hash", None)
        .await
        .unwrap()
        .id
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let db = create_test_database().await.unwrap();
    db.users().create_user("a@example.com", "h", None).await.unwrap();

    let err = db
        .users()
        .create_user("a@example.com", "h", None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_delete_user_cascades_owned_rows() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;
    let profile = db.profiles().upsert_profile(user_id, &profile_input()).await.unwrap();
    db.health_conditions()
        .upsert_condition(profile.id, &HealthConditionInput::default())
        .await
        .unwrap();
    db.mood_logs()
        .insert_mood_log(user_id, MoodType::Baik, None)
        .await
        .unwrap();
    db.schedules()
        .replace_schedule(
            user_id,
            &[ScheduleItemInput {
                exercise_name: "Yoga".to_owned(),
                day_of_week: DayOfWeek::Friday,
                duration_minutes: 30,
            }],
        )
        .await
        .unwrap();

    db.users().delete_user(user_id).await.unwrap();

    assert!(db.profiles().get_profile(profile.id).await.unwrap().is_none());
    assert!(db.health_conditions().get_condition(profile.id).await.unwrap().is_none());
    assert!(db.mood_logs().get_latest_mood_log(user_id).await.unwrap().is_none());
    assert!(db.schedules().get_schedule(user_id).await.unwrap().is_empty());

    let err = db.users().delete_user(user_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Profiles and conditions
// ============================================================================

#[tokio::test]
async fn test_profile_upsert_keeps_one_row_per_user() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;

    let first = db.profiles().upsert_profile(user_id, &profile_input()).await.unwrap();
    let mut changed = profile_input();
    changed.weight_kg = 70.0;
    let second = db.profiles().upsert_profile(user_id, &changed).await.unwrap();

    assert_eq!(first.id, second.id);
    assert!((second.weight_kg - 70.0).abs() < f64::EPSILON);
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn test_health_profile_store_returns_condition() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;
    let profile = db.profiles().upsert_profile(user_id, &profile_input()).await.unwrap();
    db.health_conditions()
        .upsert_condition(
            profile.id,
            &HealthConditionInput {
                chronic_diseases: "hypertension".to_owned(),
                physical_complaints: String::new(),
                daily_activity_minutes: 15,
            },
        )
        .await
        .unwrap();

    let store = HealthProfileRepositoryImpl::new(db.clone());
    let found = store.find_profile_for_user(user_id).await.unwrap().unwrap();
    let condition = store.get_health_condition(found.id).await.unwrap().unwrap();

    assert_eq!(condition.chronic_diseases, "hypertension");
    assert_eq!(condition.daily_activity_minutes, 15);
}

// ============================================================================
// Exercises
// ============================================================================

#[tokio::test]
async fn test_seed_runs_once() {
    let db = create_test_database().await.unwrap();

    let first = db.exercises().seed_reference_catalog().await.unwrap();
    let second = db.exercises().seed_reference_catalog().await.unwrap();

    assert_eq!(first, REFERENCE_EXERCISES.len());
    assert_eq!(second, 0);
    assert_eq!(db.exercises().count_exercises().await.unwrap(), 12);
}

#[tokio::test]
async fn test_seed_skips_non_empty_catalog() {
    let db = create_test_database().await.unwrap();
    db.exercises()
        .create_exercise(&NewExercise {
            name: "Custom".to_owned(),
            description: "Dibuat admin".to_owned(),
            category: RiskCategory::Safe,
        })
        .await
        .unwrap();

    assert_eq!(db.exercises().seed_reference_catalog().await.unwrap(), 0);
    assert_eq!(db.exercises().count_exercises().await.unwrap(), 1);
}

#[tokio::test]
async fn test_catalog_adapter_filters_by_category() {
    let db = create_test_database().await.unwrap();
    db.exercises().seed_reference_catalog().await.unwrap();
    let catalog = ExerciseCatalogRepositoryImpl::new(db);

    let light = catalog
        .get_exercises_by_category(RiskCategory::LightSupervision)
        .await
        .unwrap();

    assert_eq!(light.len(), 4);
    assert!(light.iter().all(|e| e.category == RiskCategory::LightSupervision));
    let names: Vec<&str> = light.iter().map(|e| e.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

// ============================================================================
// Mood logs
// ============================================================================

#[tokio::test]
async fn test_mood_range_queries() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;
    let entry = db
        .mood_logs()
        .insert_mood_log(user_id, MoodType::Sedang, Some("  ".to_owned()))
        .await
        .unwrap();
    assert!(entry.notes.is_none());

    let store = MoodLogRepositoryImpl::new(db.clone());
    let now = Utc::now();
    let around = store
        .get_mood_logs(user_id, now - Duration::hours(1), now + Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(around.len(), 1);

    let yesterday = store
        .get_mood_logs(user_id, now - Duration::days(2), now - Duration::days(1))
        .await
        .unwrap();
    assert!(yesterday.is_empty());

    assert!(store.has_mood_log_today(user_id).await.unwrap());
    assert!(!store.has_mood_log_today(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_mood_notes_limit() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;

    let err = db
        .mood_logs()
        .insert_mood_log(user_id, MoodType::Baik, Some("x".repeat(501)))
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 400);
}

// ============================================================================
// Schedules
// ============================================================================

#[tokio::test]
async fn test_replace_schedule_is_all_or_nothing() {
    let db = create_test_database().await.unwrap();
    let user_id = user(&db).await;
    let valid = ScheduleItemInput {
        exercise_name: "Jalan Kaki".to_owned(),
        day_of_week: DayOfWeek::Monday,
        duration_minutes: 20,
    };
    db.schedules().replace_schedule(user_id, &[valid.clone()]).await.unwrap();

    let invalid = ScheduleItemInput {
        duration_minutes: 0,
        ..valid.clone()
    };
    assert!(db
        .schedules()
        .replace_schedule(user_id, &[valid, invalid])
        .await
        .is_err());

    assert_eq!(db.schedules().get_schedule(user_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_file_database_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("nested").join("burjo.db"),
    };

    {
        let db = Database::new(&url).await.unwrap();
        db.exercises().seed_reference_catalog().await.unwrap();
    }
    let reopened = Database::new(&url).await.unwrap();

    assert_eq!(reopened.exercises().count_exercises().await.unwrap(), 12);
}
