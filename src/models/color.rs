//! Hex color parsing and conversion to CSS `rgb()` / `hsl()` strings.
//!
//! The free functions [`hex_to_rgb`] and [`hex_to_hsl`] are total: input that
//! is not an optional `#` followed by exactly six hex digits is coerced to
//! black instead of raising an error.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS string returned by [`hex_to_rgb`] for malformed input.
pub const RGB_FALLBACK: &str = "rgb(0, 0, 0)";

/// CSS string returned by [`hex_to_hsl`] for malformed input.
pub const HSL_FALLBACK: &str = "hsl(0, 0%, 0%)";

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// HSL color rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in whole degrees, 0-359
    pub h: u16,
    /// Saturation in whole percent, 0-100
    pub s: u8,
    /// Lightness in whole percent, 0-100
    pub l: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color, returning `None` for anything but `#RRGGBB` / `RRGGBB`.
    ///
    /// Digits are case-insensitive. Whitespace is not trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse_hex("#FF0000"), Some(RgbColor::new(255, 0, 0)));
    /// assert_eq!(RgbColor::parse_hex("00ff00"), Some(RgbColor::new(0, 255, 0)));
    /// assert_eq!(RgbColor::parse_hex("#12345"), None);
    /// ```
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        // from_str_radix accepts a leading '+', so check the digits up front
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Parses a hex color, failing with a descriptive error.
    ///
    /// Used where a bad color is a user mistake worth reporting (CLI flags),
    /// as opposed to the lenient conversions used when rendering a kit.
    pub fn from_hex(hex: &str) -> Result<Self> {
        match Self::parse_hex(hex) {
            Some(color) => Ok(color),
            None => bail!("Invalid hex color '{hex}'. Expected 6 hex digits (#RRGGBB)"),
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// When several channels share the maximum the hue formula is chosen in
    /// the order red, green, blue.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::{HslColor, RgbColor};
    ///
    /// let green = RgbColor::new(0, 255, 0).to_hsl();
    /// assert_eq!(green, HslColor { h: 120, s: 100, l: 50 });
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0) // Achromatic
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                ((g - b) / d).rem_euclid(6.0)
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };

            (h / 6.0, s)
        };

        // A hue just below 360 rounds up to the full turn
        let hue = (h * 360.0).round() as u16 % 360;

        HslColor {
            h: hue,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Converts a hex color to a CSS `rgb(R, G, B)` string.
///
/// Malformed input yields [`RGB_FALLBACK`].
///
/// # Examples
///
/// ```
/// use brandkit::models::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#FF0000"), "rgb(255, 0, 0)");
/// assert_eq!(hex_to_rgb("notacolor"), "rgb(0, 0, 0)");
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> String {
    RgbColor::parse_hex(hex).map_or_else(|| RGB_FALLBACK.to_string(), |c| c.to_string())
}

/// Converts a hex color to a CSS `hsl(H, S%, L%)` string.
///
/// Malformed input yields [`HSL_FALLBACK`].
///
/// # Examples
///
/// ```
/// use brandkit::models::hex_to_hsl;
///
/// assert_eq!(hex_to_hsl("#ff0000"), "hsl(0, 100%, 50%)");
/// assert_eq!(hex_to_hsl("#12345"), "hsl(0, 0%, 0%)");
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> String {
    RgbColor::parse_hex(hex).map_or_else(|| HSL_FALLBACK.to_string(), |c| c.to_hsl().to_string())
}
