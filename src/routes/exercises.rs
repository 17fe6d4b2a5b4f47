// ABOUTME: Exercise catalog and recommendation route handlers
// ABOUTME: Lists, reads and administers catalog entries and returns risk-filtered suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Exercise routes
//!
//! Catalog writes only require a valid token; there is no separate admin
//! role in this service.

use super::authenticate;
use crate::database::NewExercise;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use burjo_core::models::{Exercise, RiskCategory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Optional catalog filter
#[derive(Debug, Default, Deserialize)]
pub struct ListExercisesQuery {
    /// Restrict to one category
    pub category: Option<RiskCategory>,
}

/// Catalog listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    /// Matching exercises
    pub exercises: Vec<Exercise>,
    /// Number of exercises returned
    pub total: usize,
}

/// Recommendations for the caller
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Category the list was filtered by
    pub category: RiskCategory,
    /// Localized category name
    pub category_label: String,
    /// True when no profile existed and `safe` was assumed
    pub fallback: bool,
    /// Suggested exercises
    pub exercises: Vec<Exercise>,
}

/// Exercise catalog routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/exercises",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/exercises/recommendations",
                get(Self::handle_recommendations),
            )
            .route(
                "/api/exercises/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListExercisesQuery>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources).await?;
        let exercises = match query.category {
            Some(category) => resources.database.exercises().list_by_category(category).await?,
            None => resources.database.exercises().list_exercises().await?,
        };
        let response = ExerciseListResponse {
            total: exercises.len(),
            exercises,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(exercise_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources).await?;
        let exercise = resources
            .database
            .exercises()
            .get_exercise(exercise_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise").with_resource_id(exercise_id.to_string()))?;

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(input): Json<NewExercise>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let exercise = resources.database.exercises().create_exercise(&input).await?;
        info!(user_id = %auth.user_id, exercise_id = %exercise.id, "Exercise created");

        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(exercise_id): Path<Uuid>,
        Json(input): Json<NewExercise>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let exercise = resources
            .database
            .exercises()
            .update_exercise(exercise_id, &input)
            .await?;
        info!(user_id = %auth.user_id, exercise_id = %exercise.id, "Exercise updated");

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(exercise_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        resources.database.exercises().delete_exercise(exercise_id).await?;
        info!(user_id = %auth.user_id, exercise_id = %exercise_id, "Exercise deleted");

        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let recommendations = resources
            .recommendations
            .recommend_with_category(auth.user_id)
            .await?;
        let response = RecommendationResponse {
            category: recommendations.category,
            category_label: recommendations.category.display_label().to_owned(),
            fallback: recommendations.fallback,
            exercises: recommendations.exercises,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
