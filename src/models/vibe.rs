//! Vibe selector and the static typography table behind it.
//!
//! A vibe is one of six named aesthetics. Each maps to a fixed
//! [`StyleProfile`]; unknown keys resolve to [`Vibe::Minimalist`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text transform applied to a brand name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    /// Leave text unchanged
    None,
    /// ALL CAPS
    Uppercase,
    /// all lowercase
    Lowercase,
    /// Capitalized words (left to CSS)
    Capitalize,
}

impl TextCase {
    /// CSS keyword for `text-transform`.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Capitalize => "capitalize",
        }
    }

    /// Applies the case to `text` as baked into SVG markup.
    ///
    /// `Capitalize` is not applied; renderers that honor CSS handle it.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::None | Self::Capitalize => text.to_string(),
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Typography parameters for a vibe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// CSS font stack
    pub font_family: &'static str,
    /// CSS font weight
    pub font_weight: &'static str,
    /// CSS letter-spacing length
    pub letter_spacing: &'static str,
    /// Text transform
    pub text_case: TextCase,
}

/// The six visual styles a brand can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    /// Clean, simple, modern
    #[default]
    Minimalist,
    /// Bold, tech, cutting-edge
    Futuristic,
    /// Sophisticated, premium
    Elegant,
    /// Friendly, approachable
    Rounded,
    /// Raw, powerful, statement
    Brutalist,
    /// Technical, developer-focused
    Monospace,
}

impl Vibe {
    /// All vibes in display order.
    pub const ALL: [Self; 6] = [
        Self::Minimalist,
        Self::Futuristic,
        Self::Elegant,
        Self::Rounded,
        Self::Brutalist,
        Self::Monospace,
    ];

    /// Parses a vibe key. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "minimalist" => Some(Self::Minimalist),
            "futuristic" => Some(Self::Futuristic),
            "elegant" => Some(Self::Elegant),
            "rounded" => Some(Self::Rounded),
            "brutalist" => Some(Self::Brutalist),
            "monospace" => Some(Self::Monospace),
            _ => None,
        }
    }

    /// Parses a vibe key, falling back to [`Vibe::Minimalist`].
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    /// Wire key of the vibe.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Futuristic => "futuristic",
            Self::Elegant => "elegant",
            Self::Rounded => "rounded",
            Self::Brutalist => "brutalist",
            Self::Monospace => "monospace",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::Futuristic => "Futuristic",
            Self::Elegant => "Elegant Serif",
            Self::Rounded => "Rounded Tech",
            Self::Brutalist => "Brutalist",
            Self::Monospace => "Monospace",
        }
    }

    /// One-line description shown next to the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimalist => "Clean, simple, modern",
            Self::Futuristic => "Bold, tech, cutting-edge",
            Self::Elegant => "Sophisticated, premium",
            Self::Rounded => "Friendly, approachable",
            Self::Brutalist => "Raw, powerful, statement",
            Self::Monospace => "Technical, developer-focused",
        }
    }

    /// Typography profile for the vibe.
    #[must_use]
    pub const fn profile(self) -> StyleProfile {
        match self {
            Self::Minimalist => StyleProfile {
                font_family: "Inter, sans-serif",
                font_weight: "300",
                letter_spacing: "0.05em",
                text_case: TextCase::Lowercase,
            },
            Self::Futuristic => StyleProfile {
                font_family: "Space Grotesk, sans-serif",
                font_weight: "700",
                letter_spacing: "0.1em",
                text_case: TextCase::Uppercase,
            },
            Self::Elegant => StyleProfile {
                font_family: "Playfair Display, serif",
                font_weight: "400",
                letter_spacing: "0.02em",
                text_case: TextCase::Capitalize,
            },
            Self::Rounded => StyleProfile {
                font_family: "Nunito, sans-serif",
                font_weight: "600",
                letter_spacing: "0.03em",
                text_case: TextCase::Lowercase,
            },
            Self::Brutalist => StyleProfile {
                font_family: "Arial Black, sans-serif",
                font_weight: "900",
                letter_spacing: "0.08em",
                text_case: TextCase::Uppercase,
            },
            Self::Monospace => StyleProfile {
                font_family: "JetBrains Mono, monospace",
                font_weight: "500",
                letter_spacing: "0.05em",
                text_case: TextCase::Lowercase,
            },
        }
    }

    /// Light, regular, and bold weights recommended for the kit.
    #[must_use]
    pub const fn weight_ladder(self) -> [&'static str; 3] {
        match self {
            Self::Minimalist => ["300", "400", "500"],
            Self::Futuristic => ["500", "700", "900"],
            Self::Elegant => ["300", "400", "600"],
            Self::Rounded => ["400", "600", "700"],
            Self::Brutalist => ["700", "800", "900"],
            Self::Monospace => ["400", "500", "600"],
        }
    }

    /// Weight used on the favicon and social card, which render in system-ui.
    #[must_use]
    pub const fn emblem_weight(self) -> &'static str {
        match self {
            Self::Brutalist => "900",
            Self::Elegant => "400",
            _ => "600",
        }
    }

    /// Text transform used on the social card headline.
    #[must_use]
    pub const fn headline_case(self) -> TextCase {
        match self {
            Self::Futuristic | Self::Brutalist => TextCase::Uppercase,
            _ => TextCase::None,
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Looks up the typography profile for a vibe key.
///
/// Total over all strings: unknown keys get the minimalist profile.
///
/// # Examples
///
/// ```
/// use brandkit::models::{style_for, TextCase};
///
/// let brutalist = style_for("brutalist");
/// assert_eq!(brutalist.font_family, "Arial Black, sans-serif");
/// assert_eq!(brutalist.text_case, TextCase::Uppercase);
///
/// assert_eq!(style_for("unknown"), style_for("minimalist"));
/// ```
#[must_use]
pub fn style_for(vibe: &str) -> StyleProfile {
    Vibe::from_key_or_default(vibe).profile()
}
