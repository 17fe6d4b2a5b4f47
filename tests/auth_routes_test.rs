// ABOUTME: Integration tests for registration, login and account routes
// ABOUTME: Covers email normalization, password rules, token checks and account deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use burjo_server::routes::LoginResponse;
use common::{create_test_app, profile_body};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn register(app: &axum::Router, email: &str, password: &str) -> helpers::axum_test::AxumTestResponse {
    AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": email, "password": password, "display_name": "Budi" }))
        .send(app.clone())
        .await
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_returns_token_and_normalized_email() {
    let (app, resources) = create_test_app().await.unwrap();

    let response = register(&app, "  Budi@Example.COM ", "rahasia123").await;
    let body: LoginResponse = response.assert_status(StatusCode::CREATED).json();

    assert_eq!(body.email, "budi@example.com");
    assert_eq!(body.display_name.as_deref(), Some("Budi"));
    assert!(body.profile.is_none());

    let claims = resources.auth_manager.validate_token(&body.token).unwrap();
    assert_eq!(claims.sub, body.user_id.to_string());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (app, _) = create_test_app().await.unwrap();

    register(&app, "dup@example.com", "rahasia123")
        .await
        .assert_status(StatusCode::CREATED);
    let response = register(&app, "DUP@example.com", "lainnya456").await;

    let body: Value = response.assert_status(StatusCode::CONFLICT).json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_rejects_short_password_and_bad_email() {
    let (app, _) = create_test_app().await.unwrap();

    register(&app, "short@example.com", "12345")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    register(&app, "not-an-email", "rahasia123")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    register(&app, "   ", "rahasia123")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_is_case_insensitive_and_includes_profile() {
    let (app, _) = create_test_app().await.unwrap();
    let registered: LoginResponse = register(&app, "sari@example.com", "rahasia123").await.json();

    AxumTestRequest::put("/api/profile")
        .bearer(&registered.token)
        .json(&profile_body())
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "SARI@example.com", "password": "rahasia123" }))
        .send(app)
        .await;
    let body: Value = response.assert_status(StatusCode::OK).json();

    assert_eq!(body["user_id"], registered.user_id.to_string());
    assert_eq!(body["profile"]["full_name"], "Siti Rahma");
    assert!(body["profile"]["bmi"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let (app, _) = create_test_app().await.unwrap();
    register(&app, "eko@example.com", "rahasia123").await;

    let wrong_password: Value = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "eko@example.com", "password": "salah" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    let unknown_user: Value = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "rahasia123" }))
        .send(app)
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();

    assert_eq!(wrong_password["error"]["message"], unknown_user["error"]["message"]);
}

// ============================================================================
// Current user
// ============================================================================

#[tokio::test]
async fn test_users_me_requires_valid_token() {
    let (app, _) = create_test_app().await.unwrap();

    let missing: Value = AxumTestRequest::get("/api/users/me")
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(missing["error"]["code"], "AUTH_REQUIRED");

    AxumTestRequest::get("/api/users/me")
        .bearer("garbage.token.value")
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    AxumTestRequest::get("/api/users/me")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .send(app)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_users_me_hides_password_hash() {
    let (app, _) = create_test_app().await.unwrap();
    let registered: LoginResponse = register(&app, "rina@example.com", "rahasia123").await.json();

    let body: Value = AxumTestRequest::get("/api/users/me")
        .bearer(&registered.token)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["email"], "rina@example.com");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_delete_me_removes_account() {
    let (app, resources) = create_test_app().await.unwrap();
    let registered: LoginResponse = register(&app, "gone@example.com", "rahasia123").await.json();

    AxumTestRequest::delete("/api/users/me")
        .bearer(&registered.token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(resources
        .database
        .users()
        .get_user(registered.user_id)
        .await
        .unwrap()
        .is_none());

    let stale: Value = AxumTestRequest::get("/api/users/me")
        .bearer(&registered.token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(stale["error"]["code"], "AUTH_INVALID");

    let mood: Value = AxumTestRequest::post("/api/mood")
        .bearer(&registered.token)
        .json(&json!({"mood": "baik"}))
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(mood["error"]["code"], "AUTH_INVALID");

    AxumTestRequest::put("/api/profile")
        .bearer(&registered.token)
        .json(&profile_body())
        .send(app)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
