// ABOUTME: Route module organization for the Burjo HTTP API
// ABOUTME: Assembles domain routers with tracing and CORS layers into one application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Route module for the Burjo server
//!
//! Each domain module owns its route definitions and thin handlers that
//! delegate to the database managers and intelligence engines held in
//! [`ServerResources`].

/// Registration and login
pub mod auth;
/// Conversational assistant
pub mod chat;
/// Exercise catalog and recommendations
pub mod exercises;
/// Health check and readiness
pub mod health;
/// Health conditions and risk assessment
pub mod health_conditions;
/// Mood journal
pub mod mood;
/// Health profile
pub mod profile;
/// Weekly schedule
pub mod schedule;
/// Account endpoints
pub mod users;

pub use auth::{AuthRoutes, LoginRequest, LoginResponse, RegisterRequest};
pub use chat::{ChatRoutes, SendMessageRequest};
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use health_conditions::{HealthConditionRoutes, RiskAssessmentResponse};
pub use mood::{LogMoodRequest, MoodRoutes};
pub use profile::{ProfileResponse, ProfileRoutes};
pub use schedule::{ReplaceScheduleRequest, ScheduleRoutes};
pub use users::UserRoutes;

use crate::auth::AuthResult;
use crate::errors::AppError;
use crate::middleware::{make_request_span, setup_cors};
use crate::resources::ServerResources;
use axum::body::Body;
use axum::http::HeaderMap;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()))
        .merge(ProfileRoutes::routes(resources.clone()))
        .merge(HealthConditionRoutes::routes(resources.clone()))
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(MoodRoutes::routes(resources.clone()))
        .merge(ScheduleRoutes::routes(resources.clone()))
        .merge(ChatRoutes::routes(resources))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(cors)
}

/// Resolve the caller from the bearer token and confirm the account still exists
pub(crate) async fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> Result<AuthResult, AppError> {
    let auth = resources.auth_manager.authenticate_request(headers)?;
    if resources.database.users().get_user(auth.user_id).await?.is_none() {
        warn!(user_id = %auth.user_id, "Token presented for a deleted account");
        return Err(AppError::auth_invalid("User account no longer exists"));
    }
    Ok(auth)
}
