// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail generation API endpoint module
//!
//! Provides POST /api/generate-thumbnail for prompt-to-thumbnail generation.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{generate_thumbnail_handler, run_pipeline, PipelineOutput};
pub use request::GenerateThumbnailRequest;
pub use response::GenerateThumbnailResponse;
