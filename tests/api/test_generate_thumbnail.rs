// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/generate-thumbnail tests
//!
//! Provider calls go to in-process fakes; the rewrite fake tags its output
//! with the length of the user turn so each pass is distinguishable.

use axum::http::{Method, StatusCode};
use serde_json::json;

use super::support::{
    post_json, send, Fakes, ImageBehavior, TextBehavior, FAKE_IMAGE, VALID_TOKEN,
};

const ROUTE: &str = "/api/generate-thumbnail";

#[tokio::test]
async fn test_short_prompt_rejected() {
    let fakes = Fakes::happy();
    let (status, body) = post_json(fakes.app(), ROUTE, json!({ "prompt": "Hi" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Prompt must be at least 3 characters long" })
    );
    assert_eq!(fakes.rewriter.call_count(), 0);
    assert_eq!(fakes.image.call_count(), 0);
}

#[tokio::test]
async fn test_missing_prompt_rejected() {
    for body in [json!({}), json!({ "prompt": "   " }), json!({ "prompt": null })] {
        let (status, body) = post_json(Fakes::happy().app(), ROUTE, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Prompt is required and cannot be empty");
    }
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = send(
        Fakes::happy().app(),
        Method::POST,
        ROUTE,
        Some(VALID_TOKEN),
        Some("{\"prompt\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_successful_generation() {
    let fakes = Fakes::happy();
    let (status, body) = post_json(
        fakes.app(),
        ROUTE,
        json!({
            "prompt": "  a knight fighting a dragon  ",
            "config": {
                "videoTitle": "Boss Fight",
                "primaryColor": "#FF0000",
                "secondaryColor": "#00FF00",
                "niche": "gaming",
                "size": "16:9"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["imageData"], FAKE_IMAGE);
    assert_eq!(body["originalTitle"], "a knight fighting a dragon");

    let rewritten = body["rewrittenTitle"].as_str().unwrap();
    let enhanced = body["enhancedPrompt"].as_str().unwrap();
    assert!(rewritten.starts_with("brief: "));
    assert!(enhanced.starts_with("brief: "));

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains(enhanced));
    assert!(prompt.contains("\"Boss Fight\""));
    assert!(prompt.contains("#FF0000"));
    assert!(prompt.contains("#00FF00"));

    assert_eq!(fakes.rewriter.call_count(), 2);
    let (sent_prompt, reference) = fakes.image.last_call().unwrap();
    assert_eq!(sent_prompt, prompt);
    assert!(reference.is_none());
}

#[tokio::test]
async fn test_rewrite_failure_falls_back_to_raw_prompt() {
    let fakes = Fakes::new(
        ImageBehavior::Succeed,
        TextBehavior::Fail,
        TextBehavior::Fixed("unused"),
    );
    let (status, body) =
        post_json(fakes.app(), ROUTE, json!({ "prompt": "gaming thumbnail" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rewrittenTitle"], "gaming thumbnail");
    assert_eq!(body["enhancedPrompt"], "gaming thumbnail");
    assert!(body["prompt"]
        .as_str()
        .unwrap()
        .contains("ENHANCED CONTENT DESCRIPTION:\ngaming thumbnail\n"));
}

#[tokio::test]
async fn test_no_image_part_is_500() {
    let fakes = Fakes::new(
        ImageBehavior::NoImage,
        TextBehavior::Tag("brief"),
        TextBehavior::Fixed("unused"),
    );
    let (status, body) = post_json(fakes.app(), ROUTE, json!({ "prompt": "a red car" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No image generated" }));
}

#[tokio::test]
async fn test_provider_failure_is_500_with_details() {
    let fakes = Fakes::new(
        ImageBehavior::Fail,
        TextBehavior::Tag("brief"),
        TextBehavior::Fixed("unused"),
    );
    let (status, body) = post_json(fakes.app(), ROUTE, json!({ "prompt": "a red car" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate thumbnail");
    assert!(body["details"].as_str().unwrap().contains("overloaded"));
}

#[tokio::test]
async fn test_attached_image_becomes_reference() {
    let fakes = Fakes::happy();
    let (status, body) = post_json(
        fakes.app(),
        ROUTE,
        json!({
            "prompt": "make my photo pop",
            "imageData": "QUJD",
            "imageMimeType": "image/jpeg",
            "config": { "referenceImage": "data:image/png;base64,SUdOT1JFRA==" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["prompt"]
        .as_str()
        .unwrap()
        .starts_with("IMPORTANT INSTRUCTIONS"));

    let (_, reference) = fakes.image.last_call().unwrap();
    let reference = reference.unwrap();
    assert_eq!(reference.data, "QUJD");
    assert_eq!(reference.mime_type, "image/jpeg");
}

#[tokio::test]
async fn test_config_data_url_reference() {
    let fakes = Fakes::happy();
    let (status, _) = post_json(
        fakes.app(),
        ROUTE,
        json!({
            "prompt": "make my photo pop",
            "config": { "defaultImagePreview": "data:image/webp;base64,UklGRg==" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let (_, reference) = fakes.image.last_call().unwrap();
    let reference = reference.unwrap();
    assert_eq!(reference.mime_type, "image/webp");
    assert_eq!(reference.data, "UklGRg==");
}

#[tokio::test]
async fn test_unsupported_reference_is_400() {
    let fakes = Fakes::happy();
    let (status, body) = post_json(
        fakes.app(),
        ROUTE,
        json!({
            "prompt": "make my photo pop",
            "config": { "referenceImage": "ftp://example.com/me.png" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Unsupported reference image URL"));
    assert_eq!(fakes.image.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_niche_and_size_still_generate() {
    let fakes = Fakes::happy();
    let (status, body) = post_json(
        fakes.app(),
        ROUTE,
        json!({
            "prompt": "pasta night",
            "config": { "niche": "cooking", "size": "4:3" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("cooking content viewers"));
    assert!(prompt.contains("Optimized for 4:3 format viewing"));
    assert!(prompt.contains("16:9 landscape orientation"));
}
