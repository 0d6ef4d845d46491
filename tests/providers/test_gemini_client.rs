// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Gemini client against a local upstream

use axum::http::StatusCode;
use prompt2pixel::providers::gemini::{
    GenerateContentResponse, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL,
};
use prompt2pixel::providers::{
    CompletionRequest, GeminiClient, ImageGenerator, ProviderError, TextCompleter,
};
use prompt2pixel::thumbnail::InlineImage;
use serde_json::json;
use std::time::Duration;

use super::mock_server::{spawn, Upstream};

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        base_url,
        Some("test-key".to_string()),
        DEFAULT_IMAGE_MODEL,
        DEFAULT_CHAT_MODEL,
        Duration::from_secs(5),
    )
    .unwrap()
}

fn image_reply() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your thumbnail" },
                    { "inlineData": { "mimeType": "image/png", "data": "FIRST" } },
                    { "inlineData": { "mimeType": "image/png", "data": "SECOND" } }
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_text_only_image_request() {
    let upstream = Upstream::new(StatusCode::OK, image_reply());
    let base_url = spawn(upstream.clone()).await;

    let image = client(&base_url)
        .generate_image("a neon city", None)
        .await
        .unwrap();
    assert_eq!(image.data, "FIRST");
    assert_eq!(image.mime_type.as_deref(), Some("image/png"));

    let recorded = upstream.last();
    assert_eq!(
        recorded.path_segment,
        format!("{}:generateContent", DEFAULT_IMAGE_MODEL)
    );
    assert_eq!(recorded.headers["x-goog-api-key"], "test-key");

    let parts = recorded.body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0]["text"], "a neon city");
    assert_eq!(
        recorded.body["generationConfig"]["responseModalities"],
        json!(["TEXT", "IMAGE"])
    );
}

#[tokio::test]
async fn test_reference_image_sent_as_second_part() {
    let upstream = Upstream::new(StatusCode::OK, image_reply());
    let base_url = spawn(upstream.clone()).await;

    let reference = InlineImage::new(Some("image/jpeg"), "QUJD");
    client(&base_url)
        .generate_image("enhance this", Some(&reference))
        .await
        .unwrap();

    let parts = upstream.last().body["contents"][0]["parts"].clone();
    assert_eq!(parts[0]["text"], "enhance this");
    assert_eq!(
        parts[1],
        json!({ "inlineData": { "mimeType": "image/jpeg", "data": "QUJD" } })
    );
}

#[tokio::test]
async fn test_text_only_reply_is_no_image() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({ "candidates": [{ "content": { "parts": [{ "text": "I can't draw that" }] } }] }),
    );
    let base_url = spawn(upstream).await;

    let err = client(&base_url)
        .generate_image("a neon city", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NoImageGenerated));
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let upstream = Upstream::new(
        StatusCode::BAD_REQUEST,
        json!({ "error": { "message": "API key not valid" } }),
    );
    let base_url = spawn(upstream).await;

    match client(&base_url).generate_image("x", None).await {
        Err(ProviderError::Api { status, message, .. }) => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_completion_uses_chat_model_and_system_instruction() {
    let upstream = Upstream::new(
        StatusCode::OK,
        json!({ "candidates": [{ "content": { "parts": [
            { "text": "Use " },
            { "text": "contrast." }
        ] } }] }),
    );
    let base_url = spawn(upstream.clone()).await;

    let request = CompletionRequest::new("tips?")
        .with_system("You are Thumbnail AI")
        .with_max_tokens(200);
    let text = client(&base_url).complete(&request).await.unwrap();
    assert_eq!(text, "Use contrast.");

    let recorded = upstream.last();
    assert_eq!(
        recorded.path_segment,
        format!("{}:generateContent", DEFAULT_CHAT_MODEL)
    );
    assert_eq!(
        recorded.body["systemInstruction"]["parts"][0]["text"],
        "You are Thumbnail AI"
    );
    assert_eq!(recorded.body["generationConfig"]["maxOutputTokens"], 200);
    assert!(recorded.body["generationConfig"]
        .get("responseModalities")
        .is_none());
}

#[test]
fn test_response_parsing_only_reads_first_candidate() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "no image here" }] } },
            { "content": { "parts": [{ "inlineData": { "data": "LATER" } }] } }
        ]
    }))
    .unwrap();
    assert!(response.first_inline_image().is_none());
    assert_eq!(response.text(), "no image here");

    let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
    assert!(empty.first_inline_image().is_none());
    assert_eq!(empty.text(), "");
}
