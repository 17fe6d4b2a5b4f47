// ABOUTME: Mood journal route handlers
// ABOUTME: Logs moods and serves weekly history with statistics, the latest entry and today's flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use burjo_core::models::MoodType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Mood entry submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMoodRequest {
    /// Reported mood
    pub mood: MoodType,
    /// Optional note, at most 500 characters
    #[serde(default)]
    pub notes: Option<String>,
}

/// History window selection
#[derive(Debug, Default, Deserialize)]
pub struct MoodHistoryQuery {
    /// First day of the week; defaults to the current week's Monday
    pub week_start: Option<NaiveDate>,
}

/// Whether the caller has logged a mood today
#[derive(Debug, Serialize, Deserialize)]
pub struct MoodTodayResponse {
    /// True once an entry exists for the current UTC day
    pub has_logged_today: bool,
}

/// Mood journal routes
pub struct MoodRoutes;

impl MoodRoutes {
    /// Create all mood routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/mood", post(Self::handle_log_mood))
            .route("/api/mood/history", get(Self::handle_history))
            .route("/api/mood/latest", get(Self::handle_latest))
            .route("/api/mood/today", get(Self::handle_today))
            .with_state(resources)
    }

    async fn handle_log_mood(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<LogMoodRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let entry = resources
            .moods
            .log_mood(auth.user_id, request.mood, request.notes)
            .await?;
        debug!(user_id = %auth.user_id, mood = entry.mood.as_str(), "Mood logged");

        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<MoodHistoryQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let history = resources
            .moods
            .weekly_history(auth.user_id, query.week_start)
            .await?;

        Ok((StatusCode::OK, Json(history)).into_response())
    }

    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let latest = resources
            .moods
            .latest_mood(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Mood log").with_user_id(auth.user_id))?;

        Ok((StatusCode::OK, Json(latest)).into_response())
    }

    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let has_logged_today = resources.moods.has_logged_today(auth.user_id).await?;

        Ok((StatusCode::OK, Json(MoodTodayResponse { has_logged_today })).into_response())
    }
}
