// ABOUTME: Health profile route handlers
// ABOUTME: Creates, replaces and reads the caller's profile, reporting BMI alongside it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Health profile routes
//!
//! A user owns at most one profile. `PUT` creates it on first use and
//! replaces every field afterwards.

use super::authenticate;
use crate::database::ProfileInput;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use burjo_core::models::HealthProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Profile plus derived body-mass index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Stored profile
    #[serde(flatten)]
    pub profile: HealthProfile,
    /// Weight over height squared, two decimals
    pub bmi: f64,
}

impl From<HealthProfile> for ProfileResponse {
    fn from(profile: HealthProfile) -> Self {
        let bmi = profile.bmi();
        Self { profile, bmi }
    }
}

/// Health profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/profile",
                get(Self::handle_get_profile).put(Self::handle_put_profile),
            )
            .with_state(resources)
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let profile = resources
            .database
            .profiles()
            .get_profile_by_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Health profile").with_user_id(auth.user_id))?;

        Ok((StatusCode::OK, Json(ProfileResponse::from(profile))).into_response())
    }

    async fn handle_put_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(input): Json<ProfileInput>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let profile = resources
            .database
            .profiles()
            .upsert_profile(auth.user_id, &input)
            .await?;
        info!(user_id = %auth.user_id, profile_id = %profile.id, "Health profile saved");

        Ok((StatusCode::OK, Json(ProfileResponse::from(profile))).into_response())
    }
}
