// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Session gate tests for the /api routes
//!
//! Every /api route rejects a missing or invalid session with
//! 401 {"error":"Unauthorized"} before the body is looked at.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::util::ServiceExt;

use super::support::{send, Fakes};

const ROUTES: [&str; 2] = ["/api/generate-thumbnail", "/api/chat"];

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    for route in ROUTES {
        let fakes = Fakes::happy();
        let (status, body) = send(
            fakes.app(),
            Method::POST,
            route,
            None,
            Some(r#"{"prompt":"a dragon over a castle"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {}", route);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
        assert_eq!(fakes.image.call_count(), 0);
    }
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    for route in ROUTES {
        let (status, body) = send(
            Fakes::happy().app(),
            Method::POST,
            route,
            Some("forged"),
            Some(r#"{"messages":[]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {}", route);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_auth_checked_before_body() {
    // Garbage body, no token: still 401, not 400
    let (status, body) = send(
        Fakes::happy().app(),
        Method::POST,
        "/api/generate-thumbnail",
        None,
        Some("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let fakes = Fakes::happy();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/generate-thumbnail")
        .header(header::COOKIE, "theme=dark; __session=valid-token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"prompt":"a dragon over a castle"}"#))
        .unwrap();

    let response = fakes.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fakes.image.call_count(), 1);
}
