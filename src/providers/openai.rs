// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI chat-completions client used for prompt rewriting

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::types::{CompletionRequest, ProviderError};
use super::TextCompleter;

const PROVIDER: &str = "openai";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_REWRITE_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Map a provider-neutral request onto the chat-completions body
pub fn build_chat_request(model: &str, request: &CompletionRequest) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &request.system {
        messages.push(ChatCompletionMessage {
            role: "system",
            content: system.clone(),
        });
    }
    messages.push(ChatCompletionMessage {
        role: "user",
        content: request.user.clone(),
    });

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    }
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        info!(
            "OpenAI client configured: base_url={}, model={}, key_present={}",
            base_url,
            model,
            api_key.is_some()
        );

        Ok(Self {
            client,
            base_url,
            api_key,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl TextCompleter for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey {
                provider: PROVIDER.to_string(),
            })?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(
            "OpenAI chat completion POST {} (model={}, user_len={})",
            url,
            self.model,
            request.user.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&build_chat_request(&self.model, request))
            .send()
            .await
            .map_err(|e| ProviderError::network(PROVIDER, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("OpenAI returned {}: {}", status, text);
            return Err(ProviderError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: text,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(PROVIDER, e))?;

        body.first_content()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::EmptyResponse {
                provider: PROVIDER.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
