// ABOUTME: Exercise recommendation filter driven by the user's risk category
// ABOUTME: Applies an explicit category inclusion table, de-duplicates, and sorts deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::risk_assessment::RiskAssessmentEngine;
use crate::store::ExerciseCatalog;
use burjo_core::errors::AppResult;
use burjo_core::models::{Exercise, RiskCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Categories whose exercises are also offered to a user in `category`.
///
/// Supervised categories fall back to Safe exercises but never to each other.
#[must_use]
pub const fn additional_categories(category: RiskCategory) -> &'static [RiskCategory] {
    match category {
        RiskCategory::Safe => &[],
        RiskCategory::LightSupervision | RiskCategory::MedicalSupervision => {
            &[RiskCategory::Safe]
        }
    }
}

/// Recommendation list together with the category it was built for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    /// Category used for filtering
    pub category: RiskCategory,
    /// True when the user's profile could not be resolved and Safe was assumed
    pub fallback: bool,
    /// Exercises ordered by category severity then name
    pub exercises: Vec<Exercise>,
}

/// Selects catalog exercises appropriate for a user's risk category
#[derive(Clone)]
pub struct RecommendationFilter {
    engine: RiskAssessmentEngine,
    catalog: Arc<dyn ExerciseCatalog>,
}

impl RecommendationFilter {
    /// Create a filter using `engine` for categories and `catalog` for exercises
    #[must_use]
    pub fn new(engine: RiskAssessmentEngine, catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self { engine, catalog }
    }

    /// Ordered exercises for `user_id`
    ///
    /// # Errors
    ///
    /// Returns store errors other than a missing profile, which degrades to Safe
    pub async fn recommend(&self, user_id: Uuid) -> AppResult<Vec<Exercise>> {
        Ok(self.recommend_with_category(user_id).await?.exercises)
    }

    /// Like [`Self::recommend`] but also reports the category used
    ///
    /// # Errors
    ///
    /// Returns store errors other than a missing profile, which degrades to Safe
    pub async fn recommend_with_category(&self, user_id: Uuid) -> AppResult<Recommendations> {
        let (category, fallback) = match self.engine.assess_for_user(user_id).await {
            Ok(assessment) => (assessment.category, false),
            Err(e) if e.is_not_found() => {
                info!(user_id = %user_id, "No health profile, recommending safe exercises only");
                (RiskCategory::Safe, true)
            }
            Err(e) => return Err(e),
        };

        let exercises = self.exercises_for(category).await?;
        debug!(
            user_id = %user_id,
            category = %category,
            count = exercises.len(),
            "Recommendations selected"
        );
        Ok(Recommendations {
            category,
            fallback,
            exercises,
        })
    }

    /// Exercises eligible for `category`, merged with its additional categories
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read
    pub async fn exercises_for(&self, category: RiskCategory) -> AppResult<Vec<Exercise>> {
        let mut merged = self.catalog.get_exercises_by_category(category).await?;
        for extra in additional_categories(category) {
            merged.extend(self.catalog.get_exercises_by_category(*extra).await?);
        }

        let mut seen = HashSet::with_capacity(merged.len());
        merged.retain(|exercise| seen.insert(exercise.id));
        merged.sort_by(|a, b| {
            a.category
                .severity()
                .cmp(&b.category.severity())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryStore;

    fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::default());
        store.add_exercise("Yoga", RiskCategory::Safe);
        store.add_exercise("Jalan Kaki", RiskCategory::Safe);
        store.add_exercise("Renang Ringan", RiskCategory::LightSupervision);
        store.add_exercise("Bersepeda Santai", RiskCategory::LightSupervision);
        store.add_exercise("Latihan Pernapasan", RiskCategory::MedicalSupervision);
        store
    }

    fn filter(store: &Arc<InMemoryStore>) -> RecommendationFilter {
        RecommendationFilter::new(RiskAssessmentEngine::new(store.clone()), store.clone())
    }

    fn names(exercises: &[Exercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_inclusion_table() {
        assert!(additional_categories(RiskCategory::Safe).is_empty());
        assert_eq!(
            additional_categories(RiskCategory::LightSupervision),
            &[RiskCategory::Safe]
        );
        assert_eq!(
            additional_categories(RiskCategory::MedicalSupervision),
            &[RiskCategory::Safe]
        );
    }

    #[tokio::test]
    async fn test_safe_user_gets_safe_exercises_sorted_by_name() {
        let store = seeded_store();
        let user_id = Uuid::new_v4();
        let profile = store.add_profile(user_id);
        store.set_condition(profile, "", "", 60);

        let result = filter(&store).recommend(user_id).await.unwrap();
        assert_eq!(names(&result), vec!["Jalan Kaki", "Yoga"]);
    }

    #[tokio::test]
    async fn test_light_supervision_includes_safe_sorted_by_severity() {
        let store = seeded_store();
        let user_id = Uuid::new_v4();
        let profile = store.add_profile(user_id);
        store.set_condition(profile, "hipertensi", "", 10);

        let result = filter(&store).recommend(user_id).await.unwrap();
        assert_eq!(
            names(&result),
            vec!["Jalan Kaki", "Yoga", "Bersepeda Santai", "Renang Ringan"]
        );
    }

    #[tokio::test]
    async fn test_medical_supervision_excludes_light_supervision() {
        let store = seeded_store();
        let user_id = Uuid::new_v4();
        let profile = store.add_profile(user_id);
        store.set_condition(profile, "penyakit jantung", "", 60);

        let result = filter(&store).recommend_with_category(user_id).await.unwrap();
        assert_eq!(result.category, RiskCategory::MedicalSupervision);
        assert!(!result.fallback);
        assert!(result
            .exercises
            .iter()
            .all(|e| e.category != RiskCategory::LightSupervision));
        assert_eq!(
            names(&result.exercises),
            vec!["Jalan Kaki", "Yoga", "Latihan Pernapasan"]
        );
    }

    #[tokio::test]
    async fn test_missing_profile_falls_back_to_safe() {
        let store = seeded_store();

        let result = filter(&store)
            .recommend_with_category(Uuid::new_v4())
            .await
            .unwrap();
        assert!(result.fallback);
        assert_eq!(result.category, RiskCategory::Safe);
        assert_eq!(names(&result.exercises), vec!["Jalan Kaki", "Yoga"]);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_swallowed() {
        let store = seeded_store();
        store.fail_reads();

        assert!(filter(&store).recommend(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_valid() {
        let store = Arc::new(InMemoryStore::default());
        let result = filter(&store).recommend(Uuid::new_v4()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_no_duplicate_identities() {
        let store = seeded_store();
        let result = filter(&store)
            .exercises_for(RiskCategory::LightSupervision)
            .await
            .unwrap();
        let unique: HashSet<Uuid> = result.iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), result.len());
    }
}
