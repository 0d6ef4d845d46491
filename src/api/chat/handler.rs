// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info, warn};

use super::request::ChatRequest;
use super::response::ChatResponse;
use crate::api::auth::AuthenticatedUser;
use crate::api::errors::ApiError;
use crate::api::generate_thumbnail::run_pipeline;
use crate::api::http_server::AppState;
use crate::providers::{CompletionRequest, ProviderError};
use crate::thumbnail::replies;

/// POST /api/chat - Answer the latest user message
///
/// Pipeline:
/// 1. Authenticate (401 before the body is parsed)
/// 2. Validate the message history, pick the latest user message
/// 3. Out of scope -> fixed rejection (success: false)
/// 4. Creation intent -> run the thumbnail pipeline; guidance text on failure
/// 5. Otherwise -> conversational reply from the text model
pub async fn chat_handler(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!("Chat request body rejected: {}", e.body_text());
        ApiError::from(e)
    })?;

    let messages = request.validate().map_err(|e| {
        warn!("Chat validation failed: {}", e);
        ApiError::InvalidRequest(e)
    })?;
    let message = ChatRequest::latest_user_message(&messages);

    let classification = state.classifier.classify(message);
    debug!(
        "Chat message from {}: len={}, in_scope={}, creation={}",
        session.user_id,
        message.len(),
        classification.in_scope,
        classification.is_creation_intent
    );

    if !classification.in_scope {
        info!("Chat message rejected as out of scope");
        return Ok(Json(ChatResponse::reply(false, replies::SCOPE_REJECTION)));
    }

    if classification.is_creation_intent {
        return Ok(Json(create_thumbnail(&state, &request, message).await));
    }

    converse(&state, message).await.map(Json)
}

async fn create_thumbnail(state: &AppState, request: &ChatRequest, message: &str) -> ChatResponse {
    let config = request.config.clone().unwrap_or_default();

    match run_pipeline(
        state,
        message,
        &config,
        request.image_data.as_deref(),
        request.image_mime_type.as_deref(),
    )
    .await
    {
        Ok(output) => ChatResponse {
            success: true,
            message: replies::generation_success(message),
            thumbnail_data: Some(output.image_data),
            prompt: Some(output.final_prompt),
            original_request: Some(message.to_string()),
            rewritten_query: Some(output.rewritten),
        },
        Err(e) => {
            warn!("Chat thumbnail creation failed, sending guidance: {}", e);
            ChatResponse::reply(true, replies::generation_guidance(message))
        }
    }
}

async fn converse(state: &AppState, message: &str) -> Result<ChatResponse, ApiError> {
    let request = CompletionRequest::new(replies::conversation_prompt(message));

    match state.assistant.complete(&request).await {
        Ok(text) if text.trim().is_empty() => {
            warn!("Assistant {} returned no text", state.assistant.name());
            Err(ApiError::InternalError("No response generated".to_string()))
        }
        Ok(text) => Ok(ChatResponse::reply(true, text)),
        Err(ProviderError::EmptyResponse { provider }) => {
            warn!("Assistant {} returned an empty response", provider);
            Err(ApiError::InternalError("No response generated".to_string()))
        }
        Err(e) => {
            warn!(
                "Assistant {} failed, sending fallback reply: {}",
                state.assistant.name(),
                e
            );
            Ok(ChatResponse::reply(true, replies::FALLBACK_REPLY))
        }
    }
}
