// ABOUTME: Core data models and types for the Burjo fitness backend
// ABOUTME: Re-exports risk, health, exercise, mood, schedule, and user structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Data Models
//!
//! - `RiskCategory` / `RiskAssessment`: output of the risk rule engine
//! - `HealthProfile` / `HealthCondition`: per-user body metrics and condition text
//! - `Exercise`: catalog entry tagged with the risk category it targets
//! - `MoodType` / `MoodLog`: append-only mood journal
//! - `ScheduleItem` / `DaySchedule`: weekly exercise plan
//! - `User`: account record

mod exercise;
mod health;
mod mood;
mod risk;
mod schedule;
mod user;

pub use exercise::Exercise;
pub use health::{HealthCondition, HealthProfile};
pub use mood::{MoodLog, MoodType};
pub use risk::{RiskAssessment, RiskCategory};
pub use schedule::{group_by_day, DayOfWeek, DaySchedule, ScheduleItem};
pub use user::User;
