// ABOUTME: Health profile repository implementation
// ABOUTME: Reads profiles and conditions for risk assessment

use crate::database::Database;
use crate::errors::AppResult;
use async_trait::async_trait;
use burjo_core::models::{HealthCondition, HealthProfile};
use burjo_intelligence::HealthProfileStore;
use uuid::Uuid;

/// `SQLite` implementation of `HealthProfileStore`
pub struct HealthProfileRepositoryImpl {
    db: Database,
}

impl HealthProfileRepositoryImpl {
    /// Create a new repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthProfileStore for HealthProfileRepositoryImpl {
    async fn get_health_profile(&self, profile_id: Uuid) -> AppResult<Option<HealthProfile>> {
        self.db.profiles().get_profile(profile_id).await
    }

    async fn find_profile_for_user(&self, user_id: Uuid) -> AppResult<Option<HealthProfile>> {
        self.db.profiles().get_profile_by_user(user_id).await
    }

    async fn get_health_condition(&self, profile_id: Uuid) -> AppResult<Option<HealthCondition>> {
        self.db.health_conditions().get_condition(profile_id).await
    }
}
