// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! OpenAI chat completions client against a local upstream

use axum::http::StatusCode;
use prompt2pixel::providers::{CompletionRequest, OpenAiClient, ProviderError, TextCompleter};
use serde_json::json;
use std::time::Duration;

use super::mock_server::{spawn, Upstream};

fn client(base_url: &str, key: Option<&str>) -> OpenAiClient {
    OpenAiClient::new(
        base_url,
        key.map(str::to_string),
        "gpt-4o-mini",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_completion_round_trip() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "A lone runner at dawn" } }] }),
    );
    let base_url = spawn(upstream.clone()).await;

    let request = CompletionRequest::new("running person")
        .with_system("rewrite")
        .with_max_tokens(500)
        .with_temperature(0.7);
    let text = client(&base_url, Some("sk-test"))
        .complete(&request)
        .await
        .unwrap();
    assert_eq!(text, "A lone runner at dawn");

    let recorded = upstream.last();
    assert_eq!(recorded.path_segment, "completions");
    assert_eq!(recorded.headers["authorization"], "Bearer sk-test");
    assert_eq!(recorded.body["model"], "gpt-4o-mini");
    assert_eq!(recorded.body["messages"][0]["content"], "rewrite");
    assert_eq!(recorded.body["messages"][1]["content"], "running person");
    assert_eq!(recorded.body["max_tokens"], 500);
}

#[tokio::test]
async fn test_missing_content_is_empty_response() {
    let upstream = Upstream::new(StatusCode::OK, json!({ "choices": [] }));
    let base_url = spawn(upstream).await;

    let err = client(&base_url, Some("sk-test"))
        .complete(&CompletionRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse { .. }));
}

#[tokio::test]
async fn test_rate_limit_is_api_error() {
    let upstream = Upstream::new(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Rate limit reached" } }),
    );
    let base_url = spawn(upstream).await;

    let err = client(&base_url, Some("sk-test"))
        .complete(&CompletionRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 429, .. }));
}

#[tokio::test]
async fn test_missing_key_never_calls_upstream() {
    let upstream = Upstream::new(StatusCode::OK, json!({}));
    let base_url = spawn(upstream.clone()).await;

    let err = client(&base_url, None)
        .complete(&CompletionRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MissingApiKey { .. }));
    assert!(upstream.seen.lock().unwrap().is_empty());
}
