// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Normalizes credentials, hashes passwords, and issues bearer tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Authentication routes
//!
//! Both endpoints answer with the same body: a bearer token, its expiry, and
//! the account with its health profile when one exists.

use crate::constants::auth as auth_limits;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use super::profile::ProfileResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use burjo_core::models::User;
use burjo_core::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Email address, case-insensitive
    pub email: String,
    /// Plain-text password
    pub password: String,
    /// Optional display name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address, case-insensitive
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Token issued on registration or login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token
    pub token: String,
    /// Account id
    pub user_id: Uuid,
    /// Normalized email
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Token expiry
    pub expires_at: DateTime<Utc>,
    /// Health profile, if the user has created one
    pub profile: Option<ProfileResponse>,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    fn normalize_email(email: &str) -> AppResult<String> {
        let email = email.trim().to_lowercase();
        validation::required("email", &email)?;
        validation::max_len("email", &email, auth_limits::MAX_EMAIL_LEN)?;
        validation::email(&email)?;
        Ok(email)
    }

    async fn issue(resources: &ServerResources, user: User) -> AppResult<LoginResponse> {
        let issued = resources.auth_manager.generate_token(&user)?;
        let profile = resources
            .database
            .profiles()
            .get_profile_by_user(user.id)
            .await?
            .map(ProfileResponse::from);

        Ok(LoginResponse {
            token: issued.token,
            user_id: user.id,
            email: user.email,
            display_name: user.display_name,
            expires_at: issued.expires_at,
            profile,
        })
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let email = Self::normalize_email(&request.email)?;
        if request.password.chars().count() < auth_limits::MIN_PASSWORD_LEN {
            return Err(AppError::invalid_input(format!(
                "password must be at least {} characters",
                auth_limits::MIN_PASSWORD_LEN
            )));
        }
        let display_name = request
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        validation::max_len_opt(
            "display_name",
            display_name,
            crate::constants::profile_limits::MAX_FULL_NAME_LEN,
        )?;

        let password_hash = resources.auth_manager.hash_password(&request.password).await?;
        let user = resources
            .database
            .users()
            .create_user(&email, &password_hash, display_name)
            .await?;

        info!(user_id = %user.id, "User registered");
        AppLogger::log_auth_event(&email, "register", true);

        let response = Self::issue(&resources, user).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let email = request.email.trim().to_lowercase();
        let invalid = || AppError::auth_invalid("Invalid email or password");

        let Some(user) = resources.database.users().get_user_by_email(&email).await? else {
            AppLogger::log_auth_event(&email, "login", false);
            return Err(invalid());
        };

        if !resources
            .auth_manager
            .verify_password(&request.password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            AppLogger::log_auth_event(&email, "login", false);
            return Err(invalid());
        }

        resources.database.users().update_last_active(user.id).await?;
        AppLogger::log_auth_event(&email, "login", true);

        let response = Self::issue(&resources, user).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
