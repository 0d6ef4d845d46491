// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM pre-pass that rewrites and enhances a free-text thumbnail request
//!
//! Both passes are fail-open: on any provider error, or an empty reply, the
//! input comes back unchanged and the error is only logged.

use std::sync::Arc;

use tracing::{debug, warn};

use super::config::ThumbnailRequestConfig;
use crate::providers::{CompletionRequest, TextCompleter};

const REWRITE_SYSTEM_PROMPT: &str = "You are an expert at understanding and rewriting thumbnail creation requests for professional AI image generation.

Your task is to take a user's thumbnail request and rewrite it into a clear, detailed, and professional prompt for AI image generation that will create compelling thumbnails.

Context Information:
- Video Title: This helps understand the overall theme
- Niche: Determines the style and approach (gaming, business, education, entertainment, technology, lifestyle)
- Platform Size: Affects composition and text placement

Focus on extracting and enhancing:
- Main subject/character (make it specific and descriptive)
- Background/setting (detailed environment description)
- Action or emotion being portrayed
- Key visual elements that would make it click-worthy
- Text elements to include (if any)
- Style/mood that matches the niche
- Specific details that make the thumbnail engaging

Guidelines:
1. Make descriptions vivid and specific
2. Include emotional triggers and psychological elements
3. Consider what would make someone want to click
4. Ensure the description matches the niche style
5. Add details that weren't explicitly mentioned but would improve the thumbnail
6. Focus on creating visual interest and engagement

Return only the rewritten prompt, nothing else. Make it detailed and comprehensive while keeping it focused.";

const ENHANCE_SYSTEM_PROMPT: &str = "You are an expert thumbnail designer and prompt engineer. Your task is to take a rewritten prompt and enhance it with specific details that will create the most engaging and professional thumbnail possible.

Consider the following aspects:
1. Visual composition that works for the platform size
2. Color psychology and brand integration
3. Niche-specific elements and aesthetics
4. Psychological triggers for clicks
5. Professional design principles
6. Platform optimization
7. Emotional engagement

Add specific details about:
- Facial expressions (if people are involved)
- Lighting that enhances the mood
- Background elements that support the story
- Visual effects that add impact
- Composition elements that guide the eye
- Cultural or contextual details (if relevant)
- Technical aspects for professional quality

Return an enhanced version that maintains the core concept but adds rich, specific details for optimal thumbnail generation.";

const REWRITE_MAX_TOKENS: u32 = 500;
const REWRITE_TEMPERATURE: f32 = 0.7;
const ENHANCE_MAX_TOKENS: u32 = 600;
const ENHANCE_TEMPERATURE: f32 = 0.6;

/// Rewrites raw user requests into detailed image briefs via a text model
#[derive(Clone)]
pub struct QueryRewriter {
    completer: Arc<dyn TextCompleter>,
}

impl QueryRewriter {
    pub fn new(completer: Arc<dyn TextCompleter>) -> Self {
        Self { completer }
    }

    /// User turn for the rewrite pass
    pub fn build_rewrite_prompt(raw: &str, config: &ThumbnailRequestConfig) -> String {
        let title = if config.video_title.is_empty() {
            raw
        } else {
            config.video_title.as_str()
        };
        format!(
            "Please rewrite this thumbnail request into a professional, detailed prompt:\n\n\
             Original Request: \"{raw}\"\n\
             Video Title: \"{title}\"\n\
             Niche: \"{niche}\"\n\
             Platform Size: \"{size}\"\n\
             Primary Color: \"{primary}\"\n\
             Secondary Color: \"{secondary}\"\n\n\
             Create a detailed, engaging description that would generate a compelling thumbnail.",
            niche = config.niche,
            size = config.size,
            primary = config.primary_color,
            secondary = config.secondary_color,
        )
    }

    /// User turn for the enhance pass
    pub fn build_enhance_prompt(rewritten: &str, config: &ThumbnailRequestConfig) -> String {
        format!(
            "Enhance this thumbnail prompt with rich details and professional specifications:\n\n\
             Base Prompt: \"{rewritten}\"\n\
             Niche: \"{niche}\"\n\
             Platform: \"{size}\"\n\
             Video Title: \"{title}\"\n\
             Brand Colors: Primary {primary}, Secondary {secondary}\n\n\
             Make it comprehensive and detailed for professional thumbnail generation.",
            niche = config.niche,
            size = config.size,
            title = config.video_title,
            primary = config.primary_color,
            secondary = config.secondary_color,
        )
    }

    /// Rewrite `raw` into a cleaner brief; returns `raw` on any failure
    pub async fn rewrite(&self, raw: &str, config: &ThumbnailRequestConfig) -> String {
        let request = CompletionRequest::new(Self::build_rewrite_prompt(raw, config))
            .with_system(REWRITE_SYSTEM_PROMPT)
            .with_max_tokens(REWRITE_MAX_TOKENS)
            .with_temperature(REWRITE_TEMPERATURE);
        self.complete_or(raw, &request, "rewrite").await
    }

    /// Add composition/lighting/color detail; returns `rewritten` on any failure
    pub async fn enhance(&self, rewritten: &str, config: &ThumbnailRequestConfig) -> String {
        let request = CompletionRequest::new(Self::build_enhance_prompt(rewritten, config))
            .with_system(ENHANCE_SYSTEM_PROMPT)
            .with_max_tokens(ENHANCE_MAX_TOKENS)
            .with_temperature(ENHANCE_TEMPERATURE);
        self.complete_or(rewritten, &request, "enhance").await
    }

    async fn complete_or(&self, fallback: &str, request: &CompletionRequest, pass: &str) -> String {
        match self.completer.complete(request).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(
                        "Query {} via {} returned empty text; keeping input",
                        pass,
                        self.completer.name()
                    );
                    fallback.to_string()
                } else {
                    debug!("Query {} produced {} chars", pass, text.len());
                    text.to_string()
                }
            }
            Err(e) => {
                warn!(
                    "Query {} via {} failed, keeping input: {}",
                    pass,
                    self.completer.name(),
                    e
                );
                fallback.to_string()
            }
        }
    }
}
