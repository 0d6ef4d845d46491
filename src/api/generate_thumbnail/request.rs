// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail generation request types and validation

use serde::{Deserialize, Serialize};

use crate::thumbnail::ThumbnailRequestConfig;

/// Minimum trimmed prompt length
pub const MIN_PROMPT_CHARS: usize = 3;

/// Request for thumbnail generation via POST /api/generate-thumbnail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThumbnailRequest {
    /// Free-text description of the desired thumbnail
    #[serde(default)]
    pub prompt: Option<String>,

    /// Structured thumbnail configuration (defaults when absent)
    #[serde(default)]
    pub config: Option<ThumbnailRequestConfig>,

    /// Attached reference image, raw base64
    #[serde(default)]
    pub image_data: Option<String>,

    /// MIME type of the attached image (defaults to image/png)
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

impl GenerateThumbnailRequest {
    /// Validate the thumbnail request
    pub fn validate(&self) -> Result<(), String> {
        let prompt = self.trimmed_prompt();
        if prompt.is_empty() {
            return Err("Prompt is required and cannot be empty".to_string());
        }

        if prompt.chars().count() < MIN_PROMPT_CHARS {
            return Err(format!(
                "Prompt must be at least {} characters long",
                MIN_PROMPT_CHARS
            ));
        }

        Ok(())
    }

    pub fn trimmed_prompt(&self) -> &str {
        self.prompt.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn effective_config(&self) -> ThumbnailRequestConfig {
        self.config.clone().unwrap_or_default()
    }
}
