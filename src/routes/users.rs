// ABOUTME: Account route handlers for the authenticated user
// ABOUTME: Returns the current account and deletes it together with all owned data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Current-user routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all account routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/me",
                get(Self::handle_get_me).delete(Self::handle_delete_me),
            )
            .with_state(resources)
    }

    async fn handle_get_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        let user = resources
            .database
            .users()
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(auth.user_id))?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    async fn handle_delete_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        resources.database.users().delete_user(auth.user_id).await?;
        info!(user_id = %auth.user_id, "Account deleted");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
