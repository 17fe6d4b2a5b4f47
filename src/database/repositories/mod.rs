// ABOUTME: Repository adapters binding the SQLite managers to the intelligence storage traits
// ABOUTME: Lets the risk engine, recommendation filter and mood aggregator run against the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Repository implementations
//!
//! The intelligence crate only knows the [`HealthProfileStore`],
//! [`ExerciseCatalog`] and [`MoodLogStore`] traits. Each type here wraps a
//! [`Database`](super::Database) and delegates to the matching manager.
//!
//! [`HealthProfileStore`]: burjo_intelligence::HealthProfileStore
//! [`ExerciseCatalog`]: burjo_intelligence::ExerciseCatalog
//! [`MoodLogStore`]: burjo_intelligence::MoodLogStore

mod exercise_catalog_repository;
mod health_profile_repository;
mod mood_log_repository;

pub use exercise_catalog_repository::ExerciseCatalogRepositoryImpl;
pub use health_profile_repository::HealthProfileRepositoryImpl;
pub use mood_log_repository::MoodLogRepositoryImpl;
