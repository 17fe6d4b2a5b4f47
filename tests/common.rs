// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, wired server resources, and user/token helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `burjo_server`

use anyhow::Result;
use axum::Router;
use burjo_core::models::User;
use burjo_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    resources::ServerResources,
    routes, server,
};
use burjo_intelligence::{HoursFallback, OperatingHoursSettings};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// Chat window that never parses, so the fallback decides
pub fn chat_hours(fallback: HoursFallback) -> OperatingHoursSettings {
    OperatingHoursSettings {
        start_time: "not-a-time".to_owned(),
        fallback,
        ..OperatingHoursSettings::default()
    }
}

/// Test configuration with the chat always open
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::for_testing();
    config.chat.operating_hours = chat_hours(HoursFallback::AlwaysOpen);
    config
}

/// Server resources over a fresh in-memory database with the catalog seeded
pub async fn create_test_resources_with(config: ServerConfig) -> Result<Arc<ServerResources>> {
    init_test_logging();
    server::build_resources(config).await
}

/// Server resources with the default test configuration
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with(test_config()).await
}

/// Full application router plus the resources behind it
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    Ok((routes::router(resources.clone()), resources))
}

/// Create a user directly in the database and issue a token for it
pub async fn create_test_user(resources: &ServerResources) -> Result<(User, String)> {
    create_test_user_with_email(resources, &format!("user_{}@example.com", Uuid::new_v4())).await
}

/// Like [`create_test_user`] with a chosen email
pub async fn create_test_user_with_email(
    resources: &ServerResources,
    email: &str,
) -> Result<(User, String)> {
    let hash = resources.auth_manager.hash_password("password123").await?;
    let user = resources
        .database
        .users()
        .create_user(email, &hash, Some("Test User"))
        .await?;
    let token = resources.auth_manager.generate_token(&user)?.token;
    Ok((user, token))
}

/// Profile body accepted by `PUT /api/profile`
pub fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "full_name": "Siti Rahma",
        "age": 34,
        "gender": "female",
        "height_cm": 160.0,
        "weight_kg": 55.0,
        "fitness_level": "beginner"
    })
}
