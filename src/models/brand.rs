//! Request and logo types exchanged with the studio frontend.
//!
//! Field names follow the frontend's camelCase JSON.

use serde::{Deserialize, Serialize};

use super::{style_for, Palette, Vibe};

/// A brand generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandSpec {
    /// Brand name as typed by the user.
    pub name: String,
    /// Optional tagline. Blank strings count as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Vibe key; unknown keys render as minimalist.
    pub vibe: String,
    /// Brand palette.
    pub palette: Palette,
    /// Crypto/meme flavored prompts and taglines.
    pub meme_mode: bool,
    /// Whether the user asked for an icon as well.
    pub want_icon: bool,
}

impl BrandSpec {
    /// Creates a spec with the default palette and no flags.
    pub fn new(name: impl Into<String>, vibe: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vibe: vibe.into(),
            ..Self::default()
        }
    }

    /// Sets the tagline.
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Sets the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Trimmed brand name, `None` when blank.
    pub fn brand_name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    /// Tagline, `None` when missing or blank.
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref().and_then(non_blank)
    }

    /// Resolved vibe.
    pub fn vibe(&self) -> Vibe {
        Vibe::from_key_or_default(&self.vibe)
    }
}

/// Returns the trimmed string, or `None` if nothing is left.
pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Arrangement of a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoLayout {
    /// Name on a single line
    Horizontal,
    /// Name with the tagline below
    Stacked,
    /// Typography only
    Wordmark,
}

impl LogoLayout {
    /// All layouts in variant order.
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Stacked, Self::Wordmark];

    /// Parses a layout key (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "horizontal" => Some(Self::Horizontal),
            "stacked" => Some(Self::Stacked),
            "wordmark" => Some(Self::Wordmark),
            _ => None,
        }
    }

    /// Display name of the layout.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Stacked => "Stacked",
            Self::Wordmark => "Wordmark",
        }
    }

    /// 1-based position used in variant ids.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Horizontal => 1,
            Self::Stacked => 2,
            Self::Wordmark => 3,
        }
    }

    /// CSS font size the frontend uses for the variant preview.
    #[must_use]
    pub const fn font_size(self) -> &'static str {
        match self {
            Self::Stacked => "36px",
            Self::Horizontal | Self::Wordmark => "40px",
        }
    }

    /// Id of the locally rendered variant with this layout (e.g., "text-2").
    #[must_use]
    pub fn text_variant_id(self) -> String {
        format!("text-{}", self.ordinal())
    }

    /// Id of the AI variant with this layout (e.g., "ai-2").
    #[must_use]
    pub fn ai_variant_id(self) -> String {
        format!("ai-{}", self.ordinal())
    }

    /// Resolves a text or AI variant id back to its layout.
    #[must_use]
    pub fn from_variant_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.text_variant_id() == id || l.ai_variant_id() == id)
    }
}

/// CSS description of how a logo variant is styled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoStyle {
    /// CSS font stack.
    pub font_family: String,
    /// CSS font size.
    pub font_size: String,
    /// CSS font weight.
    pub font_weight: String,
    /// CSS letter-spacing.
    pub letter_spacing: String,
    /// CSS text-transform keyword.
    pub text_transform: String,
    /// Text color as hex.
    pub color: String,
}

impl LogoStyle {
    /// Style of a variant in `layout` for the given vibe and palette.
    ///
    /// Wordmarks use the accent color, everything else the primary.
    #[must_use]
    pub fn for_variant(vibe: &str, layout: LogoLayout, palette: &Palette) -> Self {
        let profile = style_for(vibe);
        let color = match layout {
            LogoLayout::Wordmark => &palette.accent,
            LogoLayout::Horizontal | LogoLayout::Stacked => &palette.primary,
        };

        Self {
            font_family: profile.font_family.to_string(),
            font_size: layout.font_size().to_string(),
            font_weight: profile.font_weight.to_string(),
            letter_spacing: profile.letter_spacing.to_string(),
            text_transform: profile.text_case.as_css().to_string(),
            color: color.clone(),
        }
    }
}

/// A generated logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoVariant {
    /// Variant id (e.g., "text-1", "ai-3").
    pub id: String,
    /// Display name.
    pub name: String,
    /// SVG markup.
    pub svg: String,
    /// CSS description of the variant.
    pub style: LogoStyle,
}
