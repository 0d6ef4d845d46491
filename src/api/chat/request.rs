// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat request types and validation

use serde::{Deserialize, Serialize};

use crate::thumbnail::ThumbnailRequestConfig;

/// One turn of the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for POST /api/chat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Conversation history; kept loose so a non-array is a validation error
    #[serde(default)]
    pub messages: Option<serde_json::Value>,

    #[serde(default)]
    pub config: Option<ThumbnailRequestConfig>,

    /// Attached reference image, raw base64
    #[serde(default)]
    pub image_data: Option<String>,

    #[serde(default)]
    pub image_mime_type: Option<String>,
}

impl ChatRequest {
    /// Validate and return the decoded message history
    pub fn validate(&self) -> Result<Vec<ChatMessage>, String> {
        let required = || "Messages array is required".to_string();
        match &self.messages {
            Some(value @ serde_json::Value::Array(_)) => {
                serde_json::from_value(value.clone()).map_err(|_| required())
            }
            _ => Err(required()),
        }
    }

    /// Content of the most recent `user` message, or "" when there is none
    pub fn latest_user_message(messages: &[ChatMessage]) -> &str {
        messages
            .iter()
            .rev()
            .find(|msg| msg.role == "user")
            .map(|msg| msg.content.as_str())
            .unwrap_or_default()
    }
}
