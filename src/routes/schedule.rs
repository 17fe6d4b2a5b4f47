// ABOUTME: Weekly exercise schedule route handlers
// ABOUTME: Reads the schedule grouped by weekday, replaces it wholesale, and removes items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use super::authenticate;
use crate::database::ScheduleItemInput;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use burjo_core::models::{group_by_day, DaySchedule, ScheduleItem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// New schedule replacing every existing item
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceScheduleRequest {
    /// Items to store; an empty list clears the schedule
    #[serde(default)]
    pub items: Vec<ScheduleItemInput>,
}

/// Schedule grouped by weekday
#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyScheduleResponse {
    /// Non-empty days, Monday first
    pub days: Vec<DaySchedule>,
    /// Planned minutes across the week
    pub total_minutes: u32,
    /// Number of items
    pub total_items: usize,
}

impl From<Vec<ScheduleItem>> for WeeklyScheduleResponse {
    fn from(items: Vec<ScheduleItem>) -> Self {
        let total_items = items.len();
        let days = group_by_day(items);
        Self {
            total_minutes: days.iter().map(|d| d.total_minutes).sum(),
            total_items,
            days,
        }
    }
}

/// Weekly schedule routes
pub struct ScheduleRoutes;

impl ScheduleRoutes {
    /// Create all schedule routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/schedule",
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .delete(Self::handle_clear),
            )
            .route("/api/schedule/:id", delete(Self::handle_delete_item))
            .with_state(resources)
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let items = resources.database.schedules().get_schedule(auth.user_id).await?;

        Ok((StatusCode::OK, Json(WeeklyScheduleResponse::from(items))).into_response())
    }

    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ReplaceScheduleRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let items = resources
            .database
            .schedules()
            .replace_schedule(auth.user_id, &request.items)
            .await?;
        info!(user_id = %auth.user_id, items = items.len(), "Schedule replaced");

        Ok((StatusCode::OK, Json(WeeklyScheduleResponse::from(items))).into_response())
    }

    async fn handle_clear(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let deleted = resources.database.schedules().clear_schedule(auth.user_id).await?;

        Ok((StatusCode::OK, Json(serde_json::json!({ "deleted": deleted }))).into_response())
    }

    async fn handle_delete_item(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(item_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        resources
            .database
            .schedules()
            .delete_item(auth.user_id, item_id)
            .await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
