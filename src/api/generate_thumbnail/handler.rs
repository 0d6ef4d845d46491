// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail generation endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info, warn};

use super::request::GenerateThumbnailRequest;
use super::response::GenerateThumbnailResponse;
use crate::api::auth::AuthenticatedUser;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::thumbnail::{compose_prompt_with_reference, ThumbnailRequestConfig};

/// Intermediate and final artifacts of one generation run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub image_data: String,
    pub rewritten: String,
    pub enhanced: String,
    pub final_prompt: String,
}

/// Rewrite, enhance, compose, then generate.
///
/// Shared by the thumbnail endpoint and the chat creation path. Rewrite and
/// enhance never fail; reference resolution and the image call can.
pub async fn run_pipeline(
    state: &AppState,
    raw: &str,
    config: &ThumbnailRequestConfig,
    image_data: Option<&str>,
    image_mime_type: Option<&str>,
) -> Result<PipelineOutput, ApiError> {
    let reference = state
        .references
        .resolve(image_data, image_mime_type, config.reference_image.as_deref())
        .await
        .map_err(|e| {
            warn!("Reference image resolution failed: {}", e);
            ApiError::from(e)
        })?;

    let rewritten = state.rewriter.rewrite(raw, config).await;
    debug!("Rewritten prompt: {} chars", rewritten.len());

    let enhanced = state.rewriter.enhance(&rewritten, config).await;
    debug!("Enhanced prompt: {} chars", enhanced.len());

    let final_prompt = compose_prompt_with_reference(&enhanced, config, reference.is_some());
    debug!(
        "Final prompt: {} chars, reference_image={}",
        final_prompt.len(),
        reference.is_some()
    );

    let image = state
        .image_generator
        .generate_image(&final_prompt, reference.as_ref())
        .await
        .map_err(|e| {
            warn!(
                "Image generation via {} failed: {}",
                state.image_generator.name(),
                e
            );
            ApiError::from(e)
        })?;

    info!(
        "Thumbnail generated via {}: {} base64 chars, {}ms",
        state.image_generator.name(),
        image.data.len(),
        image.processing_time_ms
    );

    Ok(PipelineOutput {
        image_data: image.data,
        rewritten,
        enhanced,
        final_prompt,
    })
}

/// POST /api/generate-thumbnail - Generate a thumbnail from a prompt and config
///
/// Pipeline:
/// 1. Authenticate (401 before the body is parsed)
/// 2. Validate request
/// 3. Resolve the reference image (attached wins over config)
/// 4. Rewrite and enhance the prompt (fail-open)
/// 5. Compose the final prompt and call the image model
pub async fn generate_thumbnail_handler(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    body: Result<Json<GenerateThumbnailRequest>, JsonRejection>,
) -> Result<Json<GenerateThumbnailResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!("Thumbnail request body rejected: {}", e.body_text());
        ApiError::from(e)
    })?;

    debug!(
        "Thumbnail request from {}: prompt_len={}, has_config={}, has_image_data={}",
        session.user_id,
        request.prompt.as_deref().map(str::len).unwrap_or(0),
        request.config.is_some(),
        request.image_data.is_some()
    );

    if let Err(e) = request.validate() {
        warn!("Thumbnail validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    let prompt = request.trimmed_prompt();
    let config = request.effective_config();

    let output = run_pipeline(
        &state,
        prompt,
        &config,
        request.image_data.as_deref(),
        request.image_mime_type.as_deref(),
    )
    .await?;

    Ok(Json(GenerateThumbnailResponse {
        success: true,
        image_data: output.image_data,
        prompt: output.final_prompt,
        original_title: prompt.to_string(),
        rewritten_title: output.rewritten,
        enhanced_prompt: output.enhanced,
    }))
}
