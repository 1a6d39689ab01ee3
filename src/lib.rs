//! BrandKit Library
//!
//! Core of the BrandKit brand and logo generator: color conversion, the vibe
//! typography table, SVG rendering, AI-backed generation with local
//! fallbacks, and brand kit export.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod generator;
pub mod kit;
pub mod models;
pub mod openai;
pub mod prompts;
pub mod render;

#[cfg(feature = "web")]
pub mod web;

// Re-export the conversion and lookup entry points
pub use models::{hex_to_hsl, hex_to_rgb, style_for};
