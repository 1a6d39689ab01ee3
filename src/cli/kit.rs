//! Brand kit export command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::logo::parse_vibe;
use crate::generator::text_variants;
use crate::kit::{self, BrandKit, ExportRequest};
use crate::models::{BrandSpec, Palette, PaletteSet, RgbColor, Vibe};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

/// Build a brand kit from the text logo variants
#[derive(Args, Debug)]
pub struct KitArgs {
    /// Brand name
    #[arg(short, long)]
    name: String,

    /// Tagline
    #[arg(short, long)]
    tagline: Option<String>,

    /// Vibe key
    #[arg(short, long, default_value = "minimalist", value_parser = parse_vibe)]
    vibe: Vibe,

    /// Preset palette name (Monochrome, Ocean, Forest, Sunset, Royal, Rose)
    #[arg(short, long, conflicts_with_all = ["primary", "accent"])]
    palette: Option<String>,

    /// Custom primary color (requires --accent)
    #[arg(long, value_name = "HEX", requires = "accent")]
    primary: Option<String>,

    /// Custom accent color (requires --primary)
    #[arg(long, value_name = "HEX", requires = "primary")]
    accent: Option<String>,

    /// Write a zip archive instead of printing JSON
    #[arg(long, value_name = "FILE")]
    zip: Option<PathBuf>,
}

impl KitArgs {
    /// Execute the kit command
    pub fn execute(&self) -> CliResult<()> {
        let palette = self.resolve_palette()?;

        let mut spec = BrandSpec::new(self.name.clone(), self.vibe.key()).with_palette(palette.clone());
        if let Some(tagline) = &self.tagline {
            spec = spec.with_tagline(tagline.clone());
        }

        let request = ExportRequest {
            brand_name: self.name.clone(),
            variants: text_variants(&spec),
            palette,
            vibe: self.vibe.key().to_string(),
            tagline: self.tagline.clone(),
        };

        let brand_kit = BrandKit::assemble(&request, Utc::now())
            .map_err(|e| CliError::validation(e.to_string()))?;

        match &self.zip {
            Some(path) => {
                let info = kit::write_archive(&brand_kit, path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("Wrote {} ({} bytes)", path.display(), info.size);
                println!("sha256: {}", info.sha256);
                for entry in &info.entries {
                    println!("  {entry}");
                }
            }
            None => print_json(&brand_kit)?,
        }

        Ok(())
    }

    fn resolve_palette(&self) -> CliResult<Palette> {
        if let (Some(primary), Some(accent)) = (&self.primary, &self.accent) {
            for hex in [primary, accent] {
                if RgbColor::parse_hex(hex).is_none() {
                    return Err(CliError::validation(format!("Invalid hex color: '{hex}'")));
                }
            }
            return Ok(Palette::new("Custom", primary.clone(), accent.clone()));
        }

        let Some(name) = &self.palette else {
            return Ok(Palette::default());
        };

        let presets = PaletteSet::load()
            .map_err(|e| CliError::io(format!("Failed to load palettes: {e}")))?;
        presets.find(name).cloned().ok_or_else(|| {
            CliError::validation(format!(
                "Unknown palette: '{name}'. Valid palettes: {}",
                presets.names().join(", ")
            ))
        })
    }
}
