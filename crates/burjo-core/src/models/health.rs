// ABOUTME: Health profile and health condition records
// ABOUTME: Profile carries body metrics, condition carries the free text fed to risk assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user body metrics. One profile per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Profile identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Full name
    pub full_name: String,
    /// Age in years
    pub age: u32,
    /// Free-form gender label
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Free-text medical history
    pub medical_history: Option<String>,
    /// Self-reported fitness level
    pub fitness_level: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl HealthProfile {
    /// Body mass index rounded to two decimals, zero when height is unknown
    #[must_use]
    pub fn bmi(&self) -> f64 {
        if self.height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 100.0).round() / 100.0
    }
}

/// Health condition attached to exactly one profile.
///
/// Both text fields are comma-separated lists kept as typed by the user; they
/// are normalized only when assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCondition {
    /// Condition identifier
    pub id: Uuid,
    /// Owning profile
    pub profile_id: Uuid,
    /// Comma-separated chronic diseases
    pub chronic_diseases: String,
    /// Comma-separated physical complaints
    pub physical_complaints: String,
    /// Average daily activity in minutes (0-480)
    pub daily_activity_minutes: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(height_cm: f64, weight_kg: f64) -> HealthProfile {
        HealthProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: "Siti Rahma".to_owned(),
            age: 34,
            gender: "female".to_owned(),
            height_cm,
            weight_kg,
            medical_history: None,
            fitness_level: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_bmi_rounds_to_two_decimals() {
        assert!((profile(170.0, 65.0).bmi() - 22.49).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert!(profile(0.0, 65.0).bmi().abs() < f64::EPSILON);
    }
}
