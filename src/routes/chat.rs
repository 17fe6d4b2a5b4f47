// ABOUTME: Chat route handlers for the conversational assistant
// ABOUTME: Applies the emergency scan and operating-hours gate before dispatching by intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Chat routes
//!
//! `POST /api/chat/send` checks, in order:
//! 1. the emergency scanner, which answers at any hour
//! 2. the operating-hours gate
//! 3. the intent dispatcher

use super::authenticate;
use crate::constants::chat_limits;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use burjo_intelligence::{ChatReply, ConversationalDispatcher};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Message sent by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Free text, 1 to 1000 characters
    pub message: String,
}

impl SendMessageRequest {
    fn validate(&self) -> AppResult<()> {
        if self.message.trim().is_empty() {
            return Err(AppError::invalid_input("message is required"));
        }
        if self.message.chars().count() > chat_limits::MAX_MESSAGE_LEN {
            return Err(AppError::invalid_input(format!(
                "message must be at most {} characters",
                chat_limits::MAX_MESSAGE_LEN
            )));
        }
        Ok(())
    }
}

/// Chat routes
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat/send", post(Self::handle_send))
            .route("/api/chat/welcome", get(Self::handle_welcome))
            .route("/api/chat/help", get(Self::handle_help))
            .route("/api/chat/status", get(Self::handle_status))
            .with_state(resources)
    }

    fn canned(response: String, quick_replies: Vec<String>) -> ChatReply {
        ChatReply {
            response,
            timestamp: Utc::now(),
            suggested_actions: None,
            quick_replies,
        }
    }

    async fn handle_send(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources).await?;
        request.validate()?;
        let user_id = auth.user_id.to_string();

        if let Some(keyword) = resources.emergency_scanner.scan(&request.message) {
            warn!(user_id = %user_id, keyword = %keyword, "Emergency phrase detected in chat");
            AppLogger::log_chat_short_circuit(&user_id, "emergency");
            let reply = Self::canned(
                resources.emergency_scanner.emergency_message().to_owned(),
                Vec::new(),
            );
            return Ok((StatusCode::OK, Json(reply)).into_response());
        }

        let now = Utc::now();
        if !resources.hours_gate.is_open_at(now) {
            AppLogger::log_chat_short_circuit(&user_id, "out_of_hours");
            let reply = Self::canned(resources.hours_gate.out_of_hours_message(now), Vec::new());
            return Ok((StatusCode::OK, Json(reply)).into_response());
        }

        let reply = resources
            .dispatcher
            .dispatch(auth.user_id, &request.message)
            .await;
        Ok((StatusCode::OK, Json(reply)).into_response())
    }

    async fn handle_welcome() -> Json<ChatReply> {
        Json(ConversationalDispatcher::welcome())
    }

    async fn handle_help() -> Json<ChatReply> {
        Json(ConversationalDispatcher::help())
    }

    async fn handle_status(State(resources): State<Arc<ServerResources>>) -> impl IntoResponse {
        Json(resources.hours_gate.status(Utc::now()))
    }
}
