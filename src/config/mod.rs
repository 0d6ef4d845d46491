// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration loaded from environment variables

use std::env;
use std::time::Duration;

use crate::providers::{gemini, openai};
use crate::thumbnail::DEFAULT_MAX_REFERENCE_BYTES;

/// Request body cap; inline reference images travel as base64 in the JSON body
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Gemini provider settings (image generation + chat)
    pub gemini: GeminiConfig,
    /// OpenAI provider settings (rewrite/enhance)
    pub openai: OpenAiConfig,
    /// Per-request timeout for upstream providers, in seconds
    pub provider_timeout_secs: u64,
    /// Session verification settings
    pub auth: AuthConfig,
    /// Allowed CORS origins; "*" allows any
    pub cors_allowed_origins: Vec<String>,
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
    /// Largest remote reference image fetched, in bytes
    pub max_reference_image_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_model: String,
    pub chat_model: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub rewrite_model: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// PEM public key for session JWTs
    pub jwt_public_key: Option<String>,
    /// Accepted `azp` claims; empty accepts any
    pub authorized_parties: Vec<String>,
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("API_HOST").unwrap_or(defaults.host),
            port: non_empty("API_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            gemini: GeminiConfig {
                api_key: non_empty("GEMINI_API_KEY"),
                base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.gemini.base_url),
                image_model: non_empty("GEMINI_IMAGE_MODEL")
                    .unwrap_or(defaults.gemini.image_model),
                chat_model: non_empty("GEMINI_CHAT_MODEL").unwrap_or(defaults.gemini.chat_model),
            },
            openai: OpenAiConfig {
                api_key: non_empty("OPENAI_API_KEY"),
                base_url: non_empty("OPENAI_BASE_URL").unwrap_or(defaults.openai.base_url),
                rewrite_model: non_empty("OPENAI_REWRITE_MODEL")
                    .unwrap_or(defaults.openai.rewrite_model),
            },
            provider_timeout_secs: non_empty("PROVIDER_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.provider_timeout_secs),
            auth: AuthConfig {
                jwt_public_key: non_empty("AUTH_JWT_PUBLIC_KEY"),
                authorized_parties: non_empty("AUTH_AUTHORIZED_PARTIES")
                    .map(|v| split_list(&v))
                    .unwrap_or_default(),
            },
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.cors_allowed_origins),
            max_body_bytes: non_empty("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            max_reference_image_bytes: non_empty("MAX_REFERENCE_IMAGE_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_reference_image_bytes),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("API port must be greater than 0".to_string());
        }
        if self.provider_timeout_secs == 0 {
            return Err("Provider timeout must be greater than 0".to_string());
        }
        if self.max_body_bytes == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }
        if self.max_reference_image_bytes == 0 {
            return Err("Max reference image size must be greater than 0".to_string());
        }
        if self.auth.jwt_public_key.is_none() {
            return Err(
                "AUTH_JWT_PUBLIC_KEY must be set to verify session tokens".to_string(),
            );
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            gemini: GeminiConfig {
                api_key: None,
                base_url: gemini::DEFAULT_BASE_URL.to_string(),
                image_model: gemini::DEFAULT_IMAGE_MODEL.to_string(),
                chat_model: gemini::DEFAULT_CHAT_MODEL.to_string(),
            },
            openai: OpenAiConfig {
                api_key: None,
                base_url: openai::DEFAULT_BASE_URL.to_string(),
                rewrite_model: openai::DEFAULT_REWRITE_MODEL.to_string(),
            },
            provider_timeout_secs: 120,
            auth: AuthConfig::default(),
            cors_allowed_origins: vec!["*".to_string()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_reference_image_bytes: DEFAULT_MAX_REFERENCE_BYTES,
        }
    }
}
