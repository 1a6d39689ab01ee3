//! Logo, icon, and tagline generation.
//!
//! Text variants are always rendered locally. AI variants, icons, and tagline
//! suggestions go through [`OpenAiClient`] when one is configured, and fall
//! back to locally rendered markup or fixed lists when it is not or when the
//! call fails.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::brand::non_blank;
use crate::models::{BrandSpec, LogoLayout, LogoStyle, LogoVariant};
use crate::openai::{ImageQuality, OpenAiClient};
use crate::prompts;
use crate::render;

/// Token budget for tagline suggestions.
const TAGLINE_MAX_TOKENS: u32 = 200;

/// Sampling temperature for tagline suggestions.
const TAGLINE_TEMPERATURE: f32 = 0.8;

/// Reasons a generation request is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The brand name is missing or blank.
    MissingName,
    /// The request needs the generative API but no key is configured.
    NotConfigured,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("Brand name is required"),
            Self::NotConfigured => f.write_str("OpenAI API key not configured"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Result of a generate request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Locally rendered variants.
    pub text_variants: Vec<LogoVariant>,
    /// AI variants, or local stand-ins where generation was unavailable.
    pub ai_variants: Vec<LogoVariant>,
    /// Same as `text_variants`, kept for older frontends.
    pub variants: Vec<LogoVariant>,
    /// Tagline ideas; empty when the request already had a tagline.
    pub suggested_taglines: Vec<String>,
    /// Echo of the request.
    pub brand_spec: BrandSpec,
}

/// A standalone icon request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconRequest {
    /// Brand the icon is for.
    pub brand_name: String,
    /// Vibe key.
    pub vibe: String,
    /// Optional industry hint from the studio. Not used in the prompt.
    pub industry: Option<String>,
    /// Crypto/meme flavored icon.
    pub meme_mode: bool,
}

/// Result of an icon request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconResponse {
    /// Generated image URL, `null` when generation failed.
    pub icon_url: Option<String>,
    /// Local stand-in icon, present when generation failed.
    #[serde(rename = "fallbackSVG", skip_serializing_if = "Option::is_none")]
    pub fallback_svg: Option<String>,
    /// Prompt sent to the image model.
    pub prompt: String,
    /// Echo of the brand name.
    pub brand_name: String,
    /// Echo of the vibe key.
    pub vibe: String,
    /// Explanation when the fallback was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Renders the three locally generated variants (`text-1` to `text-3`).
pub fn text_variants(spec: &BrandSpec) -> Vec<LogoVariant> {
    let name = spec.brand_name().unwrap_or_default();

    LogoLayout::ALL
        .into_iter()
        .map(|layout| LogoVariant {
            id: layout.text_variant_id(),
            name: layout.title().to_string(),
            svg: render::render_text_logo(name, spec.tagline(), &spec.vibe, layout),
            style: LogoStyle::for_variant(&spec.vibe, layout, &spec.palette),
        })
        .collect()
}

/// Generates logos, icons, and taglines for brand specs.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    client: Option<OpenAiClient>,
}

impl Generator {
    /// Creates a generator. Without a client every AI feature falls back.
    pub fn new(client: Option<OpenAiClient>) -> Self {
        Self { client }
    }

    /// Whether a generative API client is configured.
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Generates text variants, AI variants, and tagline suggestions.
    ///
    /// The three image calls and the tagline call run concurrently.
    pub async fn generate(&self, spec: BrandSpec) -> Result<GenerateResponse, GenerateError> {
        let name = spec.brand_name().ok_or(GenerateError::MissingName)?;

        info!(
            "Generating logos for '{}' (vibe: {}, ai: {})",
            name,
            spec.vibe(),
            self.has_client()
        );

        let text_variants = text_variants(&spec);

        let (suggested_taglines, horizontal, stacked, wordmark) = tokio::join!(
            self.suggest_taglines(&spec),
            self.ai_variant(&spec, LogoLayout::Horizontal),
            self.ai_variant(&spec, LogoLayout::Stacked),
            self.ai_variant(&spec, LogoLayout::Wordmark),
        );

        Ok(GenerateResponse {
            variants: text_variants.clone(),
            text_variants,
            ai_variants: vec![horizontal, stacked, wordmark],
            suggested_taglines,
            brand_spec: spec,
        })
    }

    /// Generates a standalone icon, falling back to a geometric glyph.
    pub async fn generate_icon(&self, request: IconRequest) -> Result<IconResponse, GenerateError> {
        let client = self.client.as_ref().ok_or(GenerateError::NotConfigured)?;
        if non_blank(&request.brand_name).is_none() {
            return Err(GenerateError::MissingName);
        }

        let prompt = prompts::icon_prompt(&request.vibe, request.meme_mode);

        match client.generate_image(&prompt, ImageQuality::Standard).await {
            Ok(url) => Ok(IconResponse {
                icon_url: Some(url),
                fallback_svg: None,
                prompt,
                brand_name: request.brand_name,
                vibe: request.vibe,
                error: None,
            }),
            Err(e) => {
                warn!("Icon generation failed: {e:#}");
                Ok(IconResponse {
                    icon_url: None,
                    fallback_svg: Some(
                        render::render_fallback_icon(&request.vibe, request.meme_mode).to_string(),
                    ),
                    prompt,
                    brand_name: request.brand_name,
                    vibe: request.vibe,
                    error: Some("AI icon generation failed, using fallback".to_string()),
                })
            }
        }
    }

    async fn ai_variant(&self, spec: &BrandSpec, layout: LogoLayout) -> LogoVariant {
        LogoVariant {
            id: layout.ai_variant_id(),
            name: format!("AI {}", layout.title()),
            svg: self.ai_logo_svg(spec, layout).await,
            style: LogoStyle::for_variant(&spec.vibe, layout, &spec.palette),
        }
    }

    async fn ai_logo_svg(&self, spec: &BrandSpec, layout: LogoLayout) -> String {
        let name = spec.brand_name().unwrap_or_default();
        let fallback = || render::render_text_logo(name, spec.tagline(), &spec.vibe, layout);

        let Some(client) = &self.client else {
            return fallback();
        };

        let prompt = prompts::logo_prompt(name, spec.tagline(), &spec.vibe, spec.meme_mode, layout);

        match client.generate_image(&prompt, ImageQuality::Hd).await {
            Ok(url) => render::wrap_image_url(&url),
            Err(e) => {
                warn!("AI logo generation failed ({}): {e:#}", layout.title());
                fallback()
            }
        }
    }

    async fn suggest_taglines(&self, spec: &BrandSpec) -> Vec<String> {
        if spec.tagline().is_some() {
            return Vec::new();
        }
        let Some(client) = &self.client else {
            return Vec::new();
        };

        let name = spec.brand_name().unwrap_or_default();
        let prompt = prompts::tagline_prompt(name, &spec.vibe, spec.meme_mode);

        match client
            .complete_chat(
                prompts::TAGLINE_SYSTEM_PROMPT,
                &prompt,
                TAGLINE_MAX_TOKENS,
                TAGLINE_TEMPERATURE,
            )
            .await
        {
            Ok(reply) => prompts::parse_taglines(&reply),
            Err(e) => {
                warn!("Tagline generation failed: {e:#}");
                prompts::fallback_taglines(spec.meme_mode)
            }
        }
    }
}
