// ABOUTME: Health condition and risk assessment route handlers
// ABOUTME: Stores the caller's chronic diseases, complaints and activity, then categorizes risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use super::authenticate;
use crate::database::HealthConditionInput;
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use burjo_core::models::{HealthProfile, RiskAssessment};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Risk assessment with a localized category label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentResponse {
    /// Assessment result
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    /// Localized category name
    pub category_label: String,
}

/// Health condition routes
pub struct HealthConditionRoutes;

impl HealthConditionRoutes {
    /// Create all health condition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/health/conditions",
                get(Self::handle_get_condition)
                    .post(Self::handle_upsert_condition)
                    .put(Self::handle_upsert_condition),
            )
            .route(
                "/api/health/risk-assessment",
                get(Self::handle_risk_assessment),
            )
            .with_state(resources)
    }

    async fn require_profile(resources: &ServerResources, user_id: Uuid) -> AppResult<HealthProfile> {
        resources
            .database
            .profiles()
            .get_profile_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Health profile").with_user_id(user_id))
    }

    async fn handle_get_condition(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let profile = Self::require_profile(&resources, auth.user_id).await?;
        let condition = resources
            .database
            .health_conditions()
            .get_condition(profile.id)
            .await?
            .ok_or_else(|| AppError::not_found("Health condition").with_user_id(auth.user_id))?;

        Ok((StatusCode::OK, Json(condition)).into_response())
    }

    async fn handle_upsert_condition(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(input): Json<HealthConditionInput>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let profile = Self::require_profile(&resources, auth.user_id).await?;
        let condition = resources
            .database
            .health_conditions()
            .upsert_condition(profile.id, &input)
            .await?;
        info!(user_id = %auth.user_id, profile_id = %profile.id, "Health condition saved");

        Ok((StatusCode::OK, Json(condition)).into_response())
    }

    async fn handle_risk_assessment(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let assessment = resources.risk_engine.assess_for_user(auth.user_id).await?;
        let response = RiskAssessmentResponse {
            category_label: assessment.category.display_label().to_owned(),
            assessment,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
