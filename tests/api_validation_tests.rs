// SPDX-License-Identifier: MIT

//! API input validation tests.
//!
//! Validation rejections happen before any store access, so these run
//! against the offline mock database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_missing_password() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/register",
            json!({"name": "Test User", "email": "test@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_blank_name_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/register",
            json!({"name": "  ", "email": "test@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exercise_log_missing_value() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/exercise/log",
            json!({"user_id": "u1", "exercise_type": "running"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exercise_log_zero_value() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/exercise/log",
            json!({"user_id": "u1", "exercise_type": "running", "value": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exercise_log_negative_value() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/exercise/log",
            json!({"user_id": "u1", "exercise_type": "cycling", "value": -5.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_complete_challenge_missing_challenge_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/challenges/complete", json!({"user_id": "u1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_points_missing_user_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/points")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_points_missing_team_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/teams/points")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redeem_missing_reward_name() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/rewards/redeem", json!({"user_id": "u1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_create_missing_fields() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/teams/create", json!({"name": "The Striders"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invite_without_user_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/teams/invite", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_profile_requires_user_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/update")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "New Name"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
