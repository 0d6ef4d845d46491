// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail generation response types

use serde::{Deserialize, Serialize};

/// Response from thumbnail generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThumbnailResponse {
    pub success: bool,
    /// Base64-encoded generated image
    pub image_data: String,
    /// Final prompt sent to the image model
    pub prompt: String,
    /// Prompt as the user submitted it
    pub original_title: String,
    /// Output of the rewrite pass
    pub rewritten_title: String,
    /// Output of the enhance pass
    pub enhanced_prompt: String,
}
