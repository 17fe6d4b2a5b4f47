// ABOUTME: Rule engine that maps a health condition to a risk category, factors, and message
// ABOUTME: Three rules in strict priority order; free text is parsed permissively and never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Risk assessment
//!
//! Evaluation order, first match wins:
//!
//! 1. Heart disease or chest pain: `MedicalSupervision`
//! 2. Hypertension with fewer than 30 daily active minutes: `LightSupervision`
//! 3. Otherwise `Safe`, with informational factors for diabetes, hypertension,
//!    low activity, shortness of breath, and dizziness
//!
//! Keywords are matched against whole comma-separated entries after trimming and
//! lowercasing. Both English and Indonesian spellings are accepted.

use crate::store::HealthProfileStore;
use burjo_core::constants::health_limits::LOW_ACTIVITY_THRESHOLD_MINUTES;
use burjo_core::errors::{AppError, AppResult};
use burjo_core::models::{HealthCondition, RiskAssessment, RiskCategory};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const HEART_DISEASE: &[&str] = &["heart disease", "penyakit jantung"];
const CHEST_PAIN: &[&str] = &["chest pain", "nyeri dada"];
const HYPERTENSION: &[&str] = &["hypertension", "hipertensi"];
const DIABETES: &[&str] = &["diabetes"];
const SHORTNESS_OF_BREATH: &[&str] = &["shortness of breath", "sesak napas"];
const DIZZINESS: &[&str] = &["dizziness", "pusing"];

/// Factor and message strings produced by the engine
pub mod factors {
    /// No condition record exists yet
    pub const NO_HEALTH_DATA: &str = "no health data recorded";
    /// Default branch found nothing worth noting
    pub const NO_RISK_FACTORS: &str = "no identified risk factors";
    /// Heart disease listed among chronic diseases
    pub const HEART_DISEASE: &str = "heart disease history";
    /// Chest pain listed among complaints
    pub const CHEST_PAIN: &str = "chest pain complaint";
    /// Hypertension listed among chronic diseases
    pub const HYPERTENSION: &str = "hypertension";
    /// Hypertension noted under the default branch
    pub const HYPERTENSION_MONITOR: &str = "hypertension (monitor blood pressure)";
    /// Diabetes listed among chronic diseases
    pub const DIABETES: &str = "diabetes (monitor blood sugar)";
    /// Fewer than 30 active minutes per day
    pub const LOW_ACTIVITY: &str = "daily activity below 30 minutes";
    /// Shortness of breath listed among complaints
    pub const SHORTNESS_OF_BREATH: &str = "shortness of breath complaint";
    /// Dizziness listed among complaints
    pub const DIZZINESS: &str = "dizziness complaint";
}

/// Advice attached to each outcome
pub mod messages {
    /// No condition record exists yet
    pub const NO_HEALTH_DATA: &str =
        "No health data recorded yet. Complete your health profile to get a personalized assessment.";
    /// Rule A
    pub const MEDICAL_SUPERVISION: &str = "Your condition requires medical supervision. Please consult a doctor before starting any exercise program.";
    /// Rule B
    pub const LIGHT_SUPERVISION: &str = "Start with light-intensity exercise and monitor your blood pressure regularly.";
    /// Default branch without factors
    pub const SAFE: &str = "Your condition is safe for exercise. Keep up your healthy, active lifestyle!";
    /// Default branch with informational factors
    pub const SAFE_WITH_CAUTION: &str = "You can exercise safely, but keep the noted factors in mind and increase intensity gradually.";
}

/// Split comma-separated free text into a normalized set of entries
#[must_use]
pub fn parse_entries(text: &str) -> HashSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_any(entries: &HashSet<String>, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| entries.contains(*keyword))
}

/// Assessment returned when a profile has no condition record
#[must_use]
pub fn no_data_assessment() -> RiskAssessment {
    RiskAssessment {
        category: RiskCategory::Safe,
        message: messages::NO_HEALTH_DATA.to_owned(),
        factors: vec![factors::NO_HEALTH_DATA.to_owned()],
    }
}

/// Evaluate the three rules against raw condition fields
#[must_use]
pub fn evaluate(
    chronic_diseases: &str,
    physical_complaints: &str,
    daily_activity_minutes: u32,
) -> RiskAssessment {
    let diseases = parse_entries(chronic_diseases);
    let complaints = parse_entries(physical_complaints);
    let low_activity = daily_activity_minutes < LOW_ACTIVITY_THRESHOLD_MINUTES;

    let has_heart_disease = contains_any(&diseases, HEART_DISEASE);
    let has_chest_pain = contains_any(&complaints, CHEST_PAIN);
    if has_heart_disease || has_chest_pain {
        let mut reasons = Vec::with_capacity(2);
        if has_heart_disease {
            reasons.push(factors::HEART_DISEASE.to_owned());
        }
        if has_chest_pain {
            reasons.push(factors::CHEST_PAIN.to_owned());
        }
        return RiskAssessment {
            category: RiskCategory::MedicalSupervision,
            message: messages::MEDICAL_SUPERVISION.to_owned(),
            factors: reasons,
        };
    }

    let has_hypertension = contains_any(&diseases, HYPERTENSION);
    if has_hypertension && low_activity {
        return RiskAssessment {
            category: RiskCategory::LightSupervision,
            message: messages::LIGHT_SUPERVISION.to_owned(),
            factors: vec![
                factors::HYPERTENSION.to_owned(),
                factors::LOW_ACTIVITY.to_owned(),
            ],
        };
    }

    let noted = [
        (contains_any(&diseases, DIABETES), factors::DIABETES),
        (has_hypertension, factors::HYPERTENSION_MONITOR),
        (low_activity, factors::LOW_ACTIVITY),
        (
            contains_any(&complaints, SHORTNESS_OF_BREATH),
            factors::SHORTNESS_OF_BREATH,
        ),
        (contains_any(&complaints, DIZZINESS), factors::DIZZINESS),
    ];
    let informational: Vec<String> = noted
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, factor)| (*factor).to_owned())
        .collect();

    if informational.is_empty() {
        RiskAssessment {
            category: RiskCategory::Safe,
            message: messages::SAFE.to_owned(),
            factors: vec![factors::NO_RISK_FACTORS.to_owned()],
        }
    } else {
        RiskAssessment {
            category: RiskCategory::Safe,
            message: messages::SAFE_WITH_CAUTION.to_owned(),
            factors: informational,
        }
    }
}

/// Evaluate a stored condition record
#[must_use]
pub fn evaluate_condition(condition: &HealthCondition) -> RiskAssessment {
    evaluate(
        &condition.chronic_diseases,
        &condition.physical_complaints,
        condition.daily_activity_minutes,
    )
}

/// Risk assessment engine backed by a health profile store
#[derive(Clone)]
pub struct RiskAssessmentEngine {
    store: Arc<dyn HealthProfileStore>,
}

impl RiskAssessmentEngine {
    /// Create an engine reading through `store`
    #[must_use]
    pub fn new(store: Arc<dyn HealthProfileStore>) -> Self {
        Self { store }
    }

    /// Assess the profile identified by `profile_id`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the profile does not exist, or the store's
    /// error if a read fails
    pub async fn assess(&self, profile_id: Uuid) -> AppResult<RiskAssessment> {
        let profile = self
            .store
            .get_health_profile(profile_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Health profile").with_resource_id(profile_id.to_string())
            })?;

        let assessment = match self.store.get_health_condition(profile.id).await? {
            Some(condition) => evaluate_condition(&condition),
            None => no_data_assessment(),
        };

        debug!(
            profile_id = %profile.id,
            category = %assessment.category,
            factor_count = assessment.factors.len(),
            "Risk assessment computed"
        );
        Ok(assessment)
    }

    /// Assess the profile owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the user has no profile, or the store's
    /// error if a read fails
    pub async fn assess_for_user(&self, user_id: Uuid) -> AppResult<RiskAssessment> {
        let profile = self
            .store
            .find_profile_for_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Health profile").with_user_id(user_id))?;
        self.assess(profile.id).await
    }
}
