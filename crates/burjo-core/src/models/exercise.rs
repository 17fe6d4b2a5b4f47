// ABOUTME: Exercise catalog entry tagged with a single target risk category
// ABOUTME: Reference data seeded at first boot and read by the recommendation filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use super::RiskCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// How to perform it and why it suits the category
    pub description: String,
    /// Risk category the exercise is intended for
    pub category: RiskCategory,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}
