// ABOUTME: Integration tests for profile, health condition and risk assessment routes
// ABOUTME: Exercises BMI reporting, condition upserts and each risk rule end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_app, create_test_user, profile_body};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn setup_with_profile() -> (axum::Router, String) {
    let (app, resources) = create_test_app().await.unwrap();
    let (_, token) = create_test_user(&resources).await.unwrap();
    AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&profile_body())
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    (app, token)
}

async fn assess(app: &axum::Router, token: &str, condition: Value) -> Value {
    AxumTestRequest::post("/api/health/conditions")
        .bearer(token)
        .json(&condition)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK);
    AxumTestRequest::get("/api/health/risk-assessment")
        .bearer(token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_missing_until_created() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_, token) = create_test_user(&resources).await.unwrap();

    AxumTestRequest::get("/api/profile")
        .bearer(&token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let created: Value = AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&profile_body())
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!((created["bmi"].as_f64().unwrap() - 21.48).abs() < 1e-9);

    let fetched: Value = AxumTestRequest::get("/api/profile")
        .bearer(&token)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn test_profile_update_keeps_identity() {
    let (app, token) = setup_with_profile().await;
    let first: Value = AxumTestRequest::get("/api/profile")
        .bearer(&token)
        .send(app.clone())
        .await
        .json();

    let mut body = profile_body();
    body["weight_kg"] = json!(60.0);
    let updated: Value = AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&body)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated["id"], first["id"]);
    assert_eq!(updated["weight_kg"], 60.0);
}

#[tokio::test]
async fn test_profile_validation_rejects_out_of_range_values() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_, token) = create_test_user(&resources).await.unwrap();

    let mut body = profile_body();
    body["height_cm"] = json!(10.0);
    AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&body)
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mut body = profile_body();
    body["full_name"] = json!("  ");
    AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&body)
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Health conditions
// ============================================================================

#[tokio::test]
async fn test_condition_requires_profile() {
    let (app, resources) = create_test_app().await.unwrap();
    let (_, token) = create_test_user(&resources).await.unwrap();

    AxumTestRequest::post("/api/health/conditions")
        .bearer(&token)
        .json(&json!({ "chronic_diseases": "diabetes" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    AxumTestRequest::get("/api/health/risk-assessment")
        .bearer(&token)
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_condition_upsert_sets_updated_at_on_second_write() {
    let (app, token) = setup_with_profile().await;

    let first: Value = AxumTestRequest::post("/api/health/conditions")
        .bearer(&token)
        .json(&json!({ "chronic_diseases": "diabetes", "daily_activity_minutes": 45 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(first["updated_at"].is_null());

    let second: Value = AxumTestRequest::put("/api/health/conditions")
        .bearer(&token)
        .json(&json!({ "physical_complaints": "pusing", "daily_activity_minutes": 20 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["chronic_diseases"], "");
    assert!(!second["updated_at"].is_null());

    let fetched: Value = AxumTestRequest::get("/api/health/conditions")
        .bearer(&token)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["daily_activity_minutes"], 20);
}

#[tokio::test]
async fn test_condition_rejects_activity_above_limit() {
    let (app, token) = setup_with_profile().await;

    AxumTestRequest::post("/api/health/conditions")
        .bearer(&token)
        .json(&json!({ "daily_activity_minutes": 481 }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Risk assessment
// ============================================================================

#[tokio::test]
async fn test_risk_without_condition_is_safe_with_no_data() {
    let (app, token) = setup_with_profile().await;

    let body: Value = AxumTestRequest::get("/api/health/risk-assessment")
        .bearer(&token)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["category"], "safe");
    assert_eq!(body["category_label"], "Aman");
    assert_eq!(body["factors"], json!(["no health data recorded"]));
}

#[tokio::test]
async fn test_risk_heart_disease_requires_medical_supervision() {
    let (app, token) = setup_with_profile().await;

    let body = assess(
        &app,
        &token,
        json!({ "chronic_diseases": "Penyakit Jantung, diabetes", "daily_activity_minutes": 90 }),
    )
    .await;

    assert_eq!(body["category"], "medical_supervision");
    assert_eq!(body["category_label"], "Supervisi Medis");
    assert_eq!(body["factors"], json!(["heart disease history"]));
}

#[tokio::test]
async fn test_risk_hypertension_with_low_activity_is_light_supervision() {
    let (app, token) = setup_with_profile().await;

    let body = assess(
        &app,
        &token,
        json!({ "chronic_diseases": "hipertensi", "daily_activity_minutes": 29 }),
    )
    .await;
    assert_eq!(body["category"], "light_supervision");

    let body = assess(
        &app,
        &token,
        json!({ "chronic_diseases": "hipertensi", "daily_activity_minutes": 30 }),
    )
    .await;
    assert_eq!(body["category"], "safe");
    assert_eq!(body["factors"], json!(["hypertension (monitor blood pressure)"]));
}

#[tokio::test]
async fn test_risk_diabetes_with_low_activity_stays_safe() {
    let (app, token) = setup_with_profile().await;

    let body = assess(
        &app,
        &token,
        json!({ "chronic_diseases": "diabetes", "daily_activity_minutes": 10 }),
    )
    .await;

    assert_eq!(body["category"], "safe");
    assert_eq!(
        body["factors"],
        json!(["diabetes (monitor blood sugar)", "daily activity below 30 minutes"])
    );
}
