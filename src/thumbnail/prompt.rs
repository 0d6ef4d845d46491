// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt composition for the image model
//!
//! Expands a `ThumbnailRequestConfig` plus a free-text brief into the long
//! sectioned instruction string sent verbatim to the image provider. Every
//! lookup has a default arm, so composition cannot fail.

use std::fmt::Write as _;

use super::config::{AspectRatio, Niche, ThumbnailRequestConfig};

const FALLBACK_TITLE: &str = "Featured Content";

/// Niche-specific visual descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicheStyle {
    pub style: &'static str,
    pub lighting: &'static str,
    pub composition: &'static str,
    pub text_style: &'static str,
}

/// Size-specific layout descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFormat {
    pub dimensions: &'static str,
    pub aspect_ratio: &'static str,
    pub text_placement: &'static str,
    pub visual_focus: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingPreset {
    Dramatic,
    Professional,
    Cinematic,
    Natural,
    Neon,
    Golden,
}

impl LightingPreset {
    /// Preset used as primary lighting for a niche; unmapped niches get `Professional`
    pub fn for_niche(niche: &Niche) -> Self {
        match niche {
            Niche::Gaming => LightingPreset::Neon,
            Niche::Business => LightingPreset::Professional,
            Niche::Education => LightingPreset::Natural,
            Niche::Entertainment => LightingPreset::Dramatic,
            Niche::Technology => LightingPreset::Cinematic,
            Niche::Lifestyle => LightingPreset::Golden,
            Niche::Other(_) => LightingPreset::Professional,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LightingPreset::Dramatic => {
                "dramatic studio lighting with strong shadows, rim lighting effects, high contrast illumination"
            }
            LightingPreset::Professional => {
                "professional photography lighting with soft diffused light, minimal shadows"
            }
            LightingPreset::Cinematic => {
                "cinematic lighting with warm/cool color temperature contrast, film-grade illumination"
            }
            LightingPreset::Natural => {
                "natural daylight simulation with soft shadows and realistic color rendering"
            }
            LightingPreset::Neon => {
                "vibrant neon lighting with glowing effects, RGB color schemes, cyberpunk aesthetics"
            }
            LightingPreset::Golden => {
                "golden hour lighting with warm tones, soft shadows, and natural glow"
            }
        }
    }
}

const GAMING_STYLE: NicheStyle = NicheStyle {
    style: "dynamic, vibrant, with bold colors and gaming-inspired graphics, energetic typography",
    lighting: "dramatic neon lighting with RGB accents, glowing effects, cyberpunk-inspired illumination",
    composition: "action-packed, diagonal compositions, explosive visual elements",
    text_style: "bold, futuristic fonts with glowing effects and gaming aesthetics",
};

/// Style table lookup; unrecognized niches use the gaming entry
pub fn niche_style(niche: &Niche) -> NicheStyle {
    match niche {
        Niche::Gaming | Niche::Other(_) => GAMING_STYLE,
        Niche::Business => NicheStyle {
            style: "professional, clean, with sophisticated layout and corporate aesthetics",
            lighting: "professional studio lighting with soft shadows, clean white balance",
            composition: "balanced, symmetrical layout with clear focal points",
            text_style: "clean, modern sans-serif typography with high contrast",
        },
        Niche::Education => NicheStyle {
            style: "friendly, approachable, with clear typography and academic elements",
            lighting: "bright, natural lighting with even illumination, educational clarity",
            composition: "organized, grid-based layouts with clear information hierarchy",
            text_style: "readable, educational fonts with clear contrast and accessibility",
        },
        Niche::Entertainment => NicheStyle {
            style: "creative, eye-catching, with vibrant colors and dynamic composition",
            lighting: "colorful, dramatic lighting with creative shadows and highlights",
            composition: "dynamic, asymmetrical layouts with visual tension and excitement",
            text_style: "playful, bold typography with creative effects and animations",
        },
        Niche::Technology => NicheStyle {
            style: "modern, sleek, with futuristic elements and digital aesthetics",
            lighting: "cool-toned LED lighting with precise highlights, tech-inspired illumination",
            composition: "geometric, precise layouts with technological elements",
            text_style: "sleek, modern fonts with digital effects and tech aesthetics",
        },
        Niche::Lifestyle => NicheStyle {
            style: "warm, inviting, with natural lighting and comfortable settings",
            lighting: "warm, golden hour lighting with soft natural illumination",
            composition: "organic, comfortable layouts with natural flow and balance",
            text_style: "friendly, approachable fonts with warm, inviting aesthetics",
        },
    }
}

const LANDSCAPE_FORMAT: SizeFormat = SizeFormat {
    dimensions: "1920x1080 pixels (YouTube standard)",
    aspect_ratio: "16:9 landscape orientation",
    text_placement: "upper third or lower third rule positioning",
    visual_focus: "horizontal composition with left-right balance",
};

/// Size table lookup; unrecognized sizes use the 16:9 entry
pub fn size_format(size: &AspectRatio) -> SizeFormat {
    match size {
        AspectRatio::Landscape | AspectRatio::Other(_) => LANDSCAPE_FORMAT,
        AspectRatio::Square => SizeFormat {
            dimensions: "1080x1080 pixels (Instagram, Facebook)",
            aspect_ratio: "1:1 square format",
            text_placement: "centered or rule of thirds positioning",
            visual_focus: "centered composition with radial balance",
        },
        AspectRatio::Portrait => SizeFormat {
            dimensions: "1080x1920 pixels (TikTok, Stories)",
            aspect_ratio: "9:16 vertical orientation",
            text_placement: "upper and lower thirds for mobile viewing",
            visual_focus: "vertical composition with top-bottom flow",
        },
    }
}

const RULE_OF_THIRDS: &str = "position key elements along rule of thirds grid lines";
const COMPLEMENTARY_COLORS: &str =
    "use complementary colors for maximum contrast and visual impact";

const REFERENCE_INTRO: &str = "IMPORTANT INSTRUCTIONS: You have been provided with a reference image. \
Your task is to ENHANCE and MODIFY this existing image to create a professional thumbnail. \
DO NOT create a completely new image from scratch. Instead, use the reference image as your base \
and apply the following improvements:

1. Keep the main elements and composition from the reference image
2. Enhance the colors, lighting, and visual effects
3. Add or modify text elements as specified
4. Apply the styling and branding requirements below
5. Maintain the core visual identity of the original image

Reference Image Context: The user has provided an image that they want enhanced into a professional thumbnail.";

const SCRATCH_INTRO: &str =
    "Create a professional, high-impact thumbnail from scratch with the following detailed specifications:";

const REFERENCE_QUALITY_ITEM: &str = "- Reference Image Enhancement: The provided reference image should be the foundation of your work. Enhance it by:
  * Maintaining the core visual elements and composition
  * Improving colors, contrast, and lighting
  * Adding professional text overlays and branding
  * Applying the specified styling and effects
  * Ensuring the final result looks like an enhanced version of the original";

const REFERENCE_OUTRO: &str = "Generate an enhanced version of the reference image that incorporates all the above \
specifications while maintaining the original image's core identity and improving it for professional thumbnail use.";

const SCRATCH_OUTRO: &str = "Generate a thumbnail that combines all these elements into a cohesive, professional, \
and highly engaging design that will perform exceptionally well on social media platforms and drive maximum engagement.";

/// Compose the final image-model prompt from a brief and the request config
pub fn compose_prompt(brief: &str, config: &ThumbnailRequestConfig) -> String {
    compose_prompt_with_reference(brief, config, config.has_reference_image())
}

/// Like `compose_prompt`, but the caller decides whether a reference image
/// accompanies the prompt (e.g. one attached outside the config).
pub fn compose_prompt_with_reference(
    brief: &str,
    config: &ThumbnailRequestConfig,
    has_reference: bool,
) -> String {
    let style = niche_style(&config.niche);
    let format = size_format(&config.size);
    let lighting = LightingPreset::for_niche(&config.niche).description();
    let niche = config.niche.as_str();

    let title = if config.video_title.is_empty() {
        FALLBACK_TITLE
    } else {
        config.video_title.as_str()
    };

    let mut out = String::with_capacity(4096);
    out.push_str(if has_reference {
        REFERENCE_INTRO
    } else {
        SCRATCH_INTRO
    });

    // Writing into a String is infallible
    let _ = write!(
        out,
        "\n\nENHANCED CONTENT DESCRIPTION:\n{brief}\n\n\
         CORE SPECIFICATIONS:\n\
         - Title: \"{title}\"\n",
    );
    if let Some(description) = config
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        let _ = writeln!(out, "- Video Description: {description}");
    }
    let _ = write!(
        out,
        "- Niche Style: {niche_style}\n\
         - Target Audience: {niche} content viewers\n\n\
         TECHNICAL SPECIFICATIONS:\n\
         - Format: {dimensions}\n\
         - Aspect Ratio: {aspect_ratio}\n\
         - Resolution: Ultra-high resolution for crisp detail at all sizes\n\
         - File Format: Optimized for web delivery with maximum quality\n\n\
         LIGHTING & VISUAL EFFECTS:\n\
         - Primary Lighting: {lighting}\n\
         - Secondary Lighting: {niche_lighting}\n\
         - Depth: Create depth with foreground, midground, and background layers\n\
         - Contrast: High contrast for mobile visibility and platform optimization\n\
         - Shadows: Strategic shadow placement for dimension and visual interest\n\n\
         COMPOSITION & LAYOUT:\n\
         - Layout Style: {visual_focus}\n\
         - Text Placement: {text_placement}\n\
         - Composition Rule: {RULE_OF_THIRDS}\n\
         - Niche Composition: {niche_composition}\n\
         - Visual Hierarchy: Clear primary, secondary, and tertiary visual elements\n\
         - Focal Points: Strategic placement using golden ratio principles\n\n\
         COLOR PALETTE & BRANDING:\n\
         - Primary Brand Color: {primary} (dominant color, 40% usage)\n\
         - Secondary Brand Color: {secondary} (accent color, 30% usage)\n\
         - Supporting Colors: Complementary colors that enhance brand colors (30% usage)\n\
         - Color Strategy: {COMPLEMENTARY_COLORS}\n\
         - Color Psychology: Colors that evoke appropriate emotional response for {niche}\n\n\
         TYPOGRAPHY & TEXT DESIGN:\n\
         - Font Style: {text_style}\n\
         - Text Hierarchy: Maximum 5 words in primary text, clear size differentiation\n\
         - Readability: High contrast text-to-background ratio (minimum 4.5:1)\n\
         - Mobile Optimization: Text readable at 150x84 pixel thumbnail size\n\
         - Text Effects: Subtle shadows, outlines, or glow for clarity\n\n\
         ADVANCED VISUAL ELEMENTS:\n\
         - Background: Multi-layered background with depth and visual interest\n\
         - Textures: Subtle textures that enhance without overwhelming\n\
         - Visual Effects: Professional-grade effects (gradients, glows, highlights)\n\
         - Element Positioning: Strategic placement for maximum click-through appeal\n\
         - Negative Space: Effective use of whitespace for visual breathing room\n\n\
         EMOTIONAL & PSYCHOLOGICAL TRIGGERS:\n\
         - Emotional Hook: Design elements that create curiosity, excitement, or urgency\n\
         - Visual Psychology: Use of proven thumbnail psychology (faces, contrast, arrows)\n\
         - Attention Grabbing: Elements that make the thumbnail stand out in feed\n\
         - Target Audience: Designed specifically for {niche} audience preferences\n\n\
         PLATFORM OPTIMIZATION:\n\
         - Platform: Optimized for {size} format viewing\n\
         - Mobile-First: Ensure clarity and impact on mobile devices\n\
         - Competition: Stand out from typical {niche} thumbnails\n\
         - Algorithm-Friendly: Design elements that perform well with platform algorithms\n\n\
         QUALITY STANDARDS:\n\
         - Professional Grade: Studio-quality visual production\n\
         - Brand Consistency: Aligns with overall brand aesthetic\n\
         - Scalability: Looks great from large displays to small mobile screens\n\
         - Click-Worthy: Designed to maximize click-through rates\n",
        niche_style = style.style,
        dimensions = format.dimensions,
        aspect_ratio = format.aspect_ratio,
        niche_lighting = style.lighting,
        visual_focus = format.visual_focus,
        text_placement = format.text_placement,
        niche_composition = style.composition,
        primary = config.primary_color,
        secondary = config.secondary_color,
        text_style = style.text_style,
        size = config.size.as_str(),
    );

    if has_reference {
        out.push_str(REFERENCE_QUALITY_ITEM);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(if has_reference {
        REFERENCE_OUTRO
    } else {
        SCRATCH_OUTRO
    });
    out
}
