//! Data models for brands, colors, and typography.
//!
//! This module contains the core value types used throughout the application.
//! Models are independent of the HTTP and CLI layers.

pub mod brand;
pub mod color;
pub mod palette;
pub mod vibe;

// Re-export all model types
pub use brand::{BrandSpec, LogoLayout, LogoStyle, LogoVariant};
pub use color::{hex_to_hsl, hex_to_rgb, HslColor, RgbColor, HSL_FALLBACK, RGB_FALLBACK};
pub use palette::{Palette, PaletteSet};
pub use vibe::{style_for, StyleProfile, TextCase, Vibe};
