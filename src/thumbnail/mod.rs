// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail request classification and prompt composition

pub mod classifier;
pub mod config;
pub mod prompt;
pub mod reference;
pub mod replies;
pub mod rewrite;

pub use classifier::{is_creation_intent, ClassificationResult, RequestClassifier};
pub use config::{AspectRatio, Niche, ThumbnailRequestConfig};
pub use prompt::{
    compose_prompt, compose_prompt_with_reference, niche_style, size_format, LightingPreset,
    NicheStyle, SizeFormat,
};
pub use reference::{
    InlineImage, ReferenceImage, ReferenceImageError, ReferenceResolver,
    DEFAULT_MAX_REFERENCE_BYTES,
};
pub use rewrite::QueryRewriter;
