// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end enrollment flow tests against the real router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

/// Log in through the API and return the issued token.
async fn login(app: &axum::Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!(
                    "/auth/login?username={}&password={}",
                    username, password
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["token"].as_str().unwrap().to_string()
}

async fn authed_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn roster(app: &axum::Router, activity: &str) -> Vec<String> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_login_and_signup_flow() {
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "ms_martinez", "chess-rocks").await;

    let (status, json) = authed_request(
        &app,
        "POST",
        "/activities/Art%20Club/signup?email=new@x.edu",
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Signed up new@x.edu for Art Club");
    assert!(roster(&app, "Art Club")
        .await
        .contains(&"new@x.edu".to_string()));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (app, _, _guard) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login?username=ms_martinez&password=wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "invalid_credentials");
    assert!(json.get("token").is_none());
}

#[tokio::test]
async fn test_signup_unknown_activity() {
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "ms_martinez", "chess-rocks").await;

    let (status, json) = authed_request(
        &app,
        "POST",
        "/activities/Knitting/signup?email=new@x.edu",
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_signup_at_capacity() {
    // Chess Club fixture has capacity 2 and two members.
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "ms_martinez", "chess-rocks").await;

    let (status, json) = authed_request(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=c@x.edu",
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "at_capacity");
    assert_eq!(roster(&app, "Chess Club").await, ["a@x.edu", "b@x.edu"]);
}

#[tokio::test]
async fn test_signup_already_enrolled_on_full_roster() {
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "ms_martinez", "chess-rocks").await;

    let (status, json) = authed_request(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=a@x.edu",
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "already_enrolled");
}

#[tokio::test]
async fn test_unregister_then_signup_fills_freed_seat() {
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "ms_martinez", "chess-rocks").await;

    let (status, json) = authed_request(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=a@x.edu",
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Unregistered a@x.edu from Chess Club");

    let (status, _) = authed_request(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=c@x.edu",
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(roster(&app, "Chess Club").await, ["b@x.edu", "c@x.edu"]);
}

#[tokio::test]
async fn test_unregister_not_enrolled() {
    let (app, _, _guard) = common::create_test_app();
    let token = login(&app, "mr_chen", "art4ever").await;

    let (status, json) = authed_request(
        &app,
        "DELETE",
        "/activities/Art%20Club/unregister?email=nobody@x.edu",
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "not_enrolled");
}

#[tokio::test]
async fn test_catalog_snapshot_shape() {
    let (app, _, _guard) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let chess = &json["Chess Club"];
    assert_eq!(chess["max_participants"], 2);
    assert!(chess["description"].is_string());
    assert!(chess["schedule"].is_string());
    assert_eq!(chess["participants"].as_array().unwrap().len(), 2);
}
