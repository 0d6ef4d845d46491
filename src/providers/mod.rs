// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generative AI provider clients
//!
//! Handlers only see the `ImageGenerator` and `TextCompleter` traits. The
//! concrete clients are built once at startup and injected through
//! `AppState`, so tests substitute in-process fakes.

pub mod gemini;
pub mod openai;
pub mod types;

use async_trait::async_trait;

use crate::thumbnail::reference::InlineImage;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use types::{CompletionRequest, GeneratedImage, ProviderError};

/// Image model that turns a prompt (and optional reference image) into an image
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image. A reference image switches the call to an edit.
    async fn generate_image(
        &self,
        prompt: &str,
        reference: Option<&InlineImage>,
    ) -> Result<GeneratedImage, ProviderError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Text model used for rewriting and conversational replies
#[async_trait]
pub trait TextCompleter: Send + Sync {
    /// Return the completion text, untrimmed
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;

    fn name(&self) -> &'static str;
}
