// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Reference image resolution
//!
//! A reference image arrives either attached to the request as raw base64 or
//! in the config as a `data:` URL or an http(s) URL. All three resolve to an
//! `InlineImage` the image provider can consume.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Cap on remote reference image size before base64 encoding
pub const DEFAULT_MAX_REFERENCE_BYTES: usize = 10 * 1024 * 1024;

/// Base64 image payload with its MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded bytes, no data URL prefix
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: Option<&str>, data: impl Into<String>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME);
        Self {
            mime_type: mime_type.to_string(),
            data: data.into(),
        }
    }
}

/// Parsed form of a config reference image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImage {
    DataUrl(InlineImage),
    Remote(Url),
}

#[derive(Debug, Error)]
pub enum ReferenceImageError {
    #[error("Malformed data URL for reference image")]
    MalformedDataUrl,

    #[error("Unsupported reference image URL: {0}")]
    UnsupportedUrl(String),

    #[error("Reference image exceeds maximum size of {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Failed to fetch reference image: {0}")]
    Fetch(String),
}

impl ReferenceImageError {
    /// Whether the error is the caller's fault rather than the upstream host's
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, ReferenceImageError::Fetch(_))
    }
}

impl ReferenceImage {
    /// Parse a `data:<mime>;base64,<payload>` or http(s) URL
    pub fn parse(value: &str) -> Result<Self, ReferenceImageError> {
        let value = value.trim();
        if let Some(rest) = value.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or(ReferenceImageError::MalformedDataUrl)?;
            if payload.is_empty() {
                return Err(ReferenceImageError::MalformedDataUrl);
            }
            let mime = header.split(';').next().filter(|m| !m.is_empty());
            return Ok(ReferenceImage::DataUrl(InlineImage::new(mime, payload)));
        }

        let url = Url::parse(value)
            .map_err(|_| ReferenceImageError::UnsupportedUrl(value.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(ReferenceImage::Remote(url)),
            _ => Err(ReferenceImageError::UnsupportedUrl(value.to_string())),
        }
    }
}

/// Resolves reference images to inline payloads, fetching remote ones
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    client: Client,
    max_bytes: usize,
}

impl ReferenceResolver {
    pub fn new(timeout: Duration, max_bytes: usize) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, max_bytes })
    }

    pub fn with_client(client: Client, max_bytes: usize) -> Self {
        Self { client, max_bytes }
    }

    /// Pick the effective reference image for a request.
    ///
    /// An attached image wins over the config reference. Returns `None` when
    /// neither is present.
    pub async fn resolve(
        &self,
        attached_data: Option<&str>,
        attached_mime: Option<&str>,
        config_reference: Option<&str>,
    ) -> Result<Option<InlineImage>, ReferenceImageError> {
        if let Some(data) = attached_data.filter(|d| !d.trim().is_empty()) {
            debug!("Using attached reference image: {} chars", data.len());
            return Ok(Some(InlineImage::new(attached_mime, data)));
        }

        let Some(reference) = config_reference.filter(|r| !r.trim().is_empty()) else {
            return Ok(None);
        };

        match ReferenceImage::parse(reference)? {
            ReferenceImage::DataUrl(image) => {
                debug!(
                    "Using data URL reference image: mime={}, {} chars",
                    image.mime_type,
                    image.data.len()
                );
                Ok(Some(image))
            }
            ReferenceImage::Remote(url) => self.fetch(url).await.map(Some),
        }
    }

    async fn fetch(&self, url: Url) -> Result<InlineImage, ReferenceImageError> {
        info!("Fetching reference image from {}", url);
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReferenceImageError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReferenceImageError::Fetch(format!(
                "host returned {}",
                response.status()
            )));
        }

        let too_large = ReferenceImageError::TooLarge {
            limit: self.max_bytes,
        };
        if let Some(length) = response.content_length() {
            if length > self.max_bytes as u64 {
                warn!(
                    "Reference image declares {} bytes, limit {}",
                    length, self.max_bytes
                );
                return Err(too_large);
            }
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());

        // Chunked bodies carry no Content-Length
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ReferenceImageError::Fetch(e.to_string()))?
        {
            if bytes.len() + chunk.len() > self.max_bytes {
                warn!("Reference image stream exceeded {} bytes", self.max_bytes);
                return Err(too_large);
            }
            bytes.extend_from_slice(&chunk);
        }
        debug!("Fetched reference image: {} bytes", bytes.len());

        Ok(InlineImage::new(mime.as_deref(), BASE64.encode(&bytes)))
    }
}
