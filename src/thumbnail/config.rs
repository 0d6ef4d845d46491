// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Thumbnail request configuration types
//!
//! `Niche` and `AspectRatio` are closed sets with an explicit `Other` arm that
//! keeps the caller's raw value. Unknown values are never rejected; the
//! lookup tables in `prompt` map them to a default entry.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#DC2626";
pub const DEFAULT_SECONDARY_COLOR: &str = "#2563EB";

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_secondary_color() -> String {
    DEFAULT_SECONDARY_COLOR.to_string()
}

/// Content niche of the video the thumbnail is for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Niche {
    Gaming,
    Business,
    Education,
    Entertainment,
    Technology,
    Lifestyle,
    /// Unrecognized niche, kept verbatim
    Other(String),
}

impl Niche {
    pub fn as_str(&self) -> &str {
        match self {
            Niche::Gaming => "gaming",
            Niche::Business => "business",
            Niche::Education => "education",
            Niche::Entertainment => "entertainment",
            Niche::Technology => "technology",
            Niche::Lifestyle => "lifestyle",
            Niche::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for Niche {
    fn default() -> Self {
        Niche::Education
    }
}

impl From<String> for Niche {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gaming" => Niche::Gaming,
            "business" => Niche::Business,
            "education" => Niche::Education,
            "entertainment" => Niche::Entertainment,
            "technology" => Niche::Technology,
            "lifestyle" => Niche::Lifestyle,
            _ => Niche::Other(value),
        }
    }
}

impl From<&str> for Niche {
    fn from(value: &str) -> Self {
        Niche::from(value.to_string())
    }
}

impl From<Niche> for String {
    fn from(niche: Niche) -> Self {
        match niche {
            Niche::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target aspect ratio of the thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectRatio {
    /// "16:9", YouTube standard
    Landscape,
    /// "1:1"
    Square,
    /// "9:16", shorts and stories
    Portrait,
    Other(String),
}

impl AspectRatio {
    pub fn as_str(&self) -> &str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Landscape
    }
}

impl From<String> for AspectRatio {
    fn from(value: String) -> Self {
        match value.as_str() {
            "16:9" => AspectRatio::Landscape,
            "1:1" => AspectRatio::Square,
            "9:16" => AspectRatio::Portrait,
            _ => AspectRatio::Other(value),
        }
    }
}

impl From<&str> for AspectRatio {
    fn from(value: &str) -> Self {
        AspectRatio::from(value.to_string())
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        match ratio {
            AspectRatio::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured configuration collected by the client for one thumbnail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequestConfig {
    /// Video title rendered on the thumbnail
    #[serde(default)]
    pub video_title: String,

    /// Free-text description of the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Dominant brand color (e.g. "#DC2626")
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Accent brand color
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    #[serde(default)]
    pub niche: Niche,

    #[serde(default)]
    pub size: AspectRatio,

    /// Reference image as a data URL or http(s) URL
    #[serde(
        default,
        alias = "defaultImagePreview",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_image: Option<String>,
}

impl Default for ThumbnailRequestConfig {
    fn default() -> Self {
        Self {
            video_title: String::new(),
            description: None,
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            niche: Niche::default(),
            size: AspectRatio::default(),
            reference_image: None,
        }
    }
}

impl ThumbnailRequestConfig {
    /// Whether a non-blank reference image was supplied
    pub fn has_reference_image(&self) -> bool {
        self.reference_image
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}
