// ABOUTME: Exercise catalog repository implementation
// ABOUTME: Serves per-category exercise lists to the recommendation filter

use crate::database::Database;
use crate::errors::AppResult;
use async_trait::async_trait;
use burjo_core::models::{Exercise, RiskCategory};
use burjo_intelligence::ExerciseCatalog;

/// `SQLite` implementation of `ExerciseCatalog`
pub struct ExerciseCatalogRepositoryImpl {
    db: Database,
}

impl ExerciseCatalogRepositoryImpl {
    /// Create a new repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciseCatalog for ExerciseCatalogRepositoryImpl {
    async fn get_exercises_by_category(&self, category: RiskCategory) -> AppResult<Vec<Exercise>> {
        self.db.exercises().list_by_category(category).await
    }
}
