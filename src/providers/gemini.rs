// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini `generateContent` client for image generation and chat replies

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::types::{CompletionRequest, GeneratedImage, ProviderError};
use super::{ImageGenerator, TextCompleter};
use crate::thumbnail::reference::InlineImage;

const PROVIDER: &str = "gemini";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini REST API
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    image_model: String,
    chat_model: String,
}

// --- Request types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

// --- Response types ---

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inlineData")]
    pub inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseInlineData {
    #[serde(default, alias = "mimeType")]
    pub mime_type: Option<String>,
    pub data: String,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// First part of the first candidate carrying inline image bytes
    pub fn first_inline_image(&self) -> Option<&ResponseInlineData> {
        self.first_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }

    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        image_model: &str,
        chat_model: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        info!(
            "Gemini client configured: base_url={}, image_model={}, chat_model={}, key_present={}",
            base_url,
            image_model,
            chat_model,
            api_key.is_some()
        );

        Ok(Self {
            client,
            base_url,
            api_key,
            image_model: image_model.to_string(),
            chat_model: chat_model.to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey {
                provider: PROVIDER.to_string(),
            })?;

        let url = self.endpoint(model);
        debug!("Gemini generateContent POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::network(PROVIDER, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Gemini returned {}: {}", status, text);
            return Err(ProviderError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: text,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ProviderError::malformed(PROVIDER, e))
    }
}

/// Build the image request body: text-only, or `[text, inline image]` for edits
pub fn build_image_request(prompt: &str, reference: Option<&InlineImage>) -> GenerateContentRequest {
    let mut parts = vec![RequestPart::Text {
        text: prompt.to_string(),
    }];
    if let Some(image) = reference {
        parts.push(RequestPart::InlineData {
            inline_data: InlineDataPayload {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        });
    }

    GenerateContentRequest {
        contents: vec![Content { parts }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            max_output_tokens: None,
            temperature: None,
        }),
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_image(
        &self,
        prompt: &str,
        reference: Option<&InlineImage>,
    ) -> Result<GeneratedImage, ProviderError> {
        let start = Instant::now();
        let body = build_image_request(prompt, reference);
        debug!(
            "Gemini image request: model={}, prompt_len={}, has_reference={}",
            self.image_model,
            prompt.len(),
            reference.is_some()
        );

        let response = self.generate_content(&self.image_model, &body).await?;
        debug!(
            "Gemini image response: candidates={}, finish_reason={:?}",
            response.candidates.len(),
            response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
        );

        let inline = response
            .first_inline_image()
            .ok_or(ProviderError::NoImageGenerated)?;

        Ok(GeneratedImage {
            data: inline.data.clone(),
            mime_type: inline.mime_type.clone(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[async_trait]
impl TextCompleter for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart::Text {
                    text: request.user.clone(),
                }],
            }],
            system_instruction: request.system.as_ref().map(|system| Content {
                parts: vec![RequestPart::Text {
                    text: system.clone(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                response_modalities: None,
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            }),
        };

        let response = self.generate_content(&self.chat_model, &body).await?;
        Ok(response.text())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
