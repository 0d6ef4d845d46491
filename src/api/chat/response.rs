// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat response types

use serde::{Deserialize, Serialize};

/// Response from the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// False only when the message was rejected as out of scope
    pub success: bool,
    pub message: String,
    /// Base64-encoded thumbnail, when one was generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_data: Option<String>,
    /// Final prompt sent to the image model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten_query: Option<String>,
}

impl ChatResponse {
    /// Text-only reply
    pub fn reply(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            thumbnail_data: None,
            prompt: None,
            original_request: None,
            rewritten_query: None,
        }
    }
}
