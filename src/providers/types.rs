// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared provider request/response types and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Single-turn completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System instruction, if the provider supports one
    pub system: Option<String>,
    /// User turn
    pub user: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Image returned by an image provider
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes
    pub data: String,
    pub mime_type: Option<String>,
    pub processing_time_ms: u64,
}

/// Errors from calling an external AI provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key configured for the provider
    #[error("No API key configured for {provider}")]
    MissingApiKey {
        /// Provider missing the key
        provider: String,
    },

    /// Transport failure before a response arrived
    #[error("Request to {provider} failed: {message}")]
    Network { provider: String, message: String },

    /// Non-success HTTP status from the provider
    #[error("{provider} returned {status}: {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    /// Response carried no inline image part
    #[error("No image generated")]
    NoImageGenerated,

    /// Response carried no text
    #[error("Empty response from {provider}")]
    EmptyResponse { provider: String },
}

impl ProviderError {
    pub(crate) fn network(provider: &str, err: reqwest::Error) -> Self {
        ProviderError::Network {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn malformed(provider: &str, message: impl ToString) -> Self {
        ProviderError::MalformedResponse {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }
}
