//! Text logo rendering command.

use crate::cli::common::{CliError, CliResult};
use crate::models::brand::non_blank;
use crate::models::{LogoLayout, Vibe};
use crate::render;
use clap::Args;
use std::path::PathBuf;

/// Render a text logo as SVG
#[derive(Args, Debug)]
pub struct LogoArgs {
    /// Brand name
    #[arg(short, long)]
    name: String,

    /// Tagline (shown by the stacked layout)
    #[arg(short, long)]
    tagline: Option<String>,

    /// Vibe key
    #[arg(short, long, default_value = "minimalist", value_parser = parse_vibe)]
    vibe: Vibe,

    /// Layout (horizontal, stacked, wordmark)
    #[arg(short, long, default_value = "horizontal", value_parser = parse_layout)]
    layout: LogoLayout,

    /// Output file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Parses a vibe key for clap.
pub(crate) fn parse_vibe(key: &str) -> Result<Vibe, String> {
    Vibe::from_key(key).ok_or_else(|| {
        format!(
            "unknown vibe '{key}' (expected one of: {})",
            Vibe::ALL.map(Vibe::key).join(", ")
        )
    })
}

fn parse_layout(key: &str) -> Result<LogoLayout, String> {
    LogoLayout::from_key(key)
        .ok_or_else(|| format!("unknown layout '{key}' (expected horizontal, stacked, or wordmark)"))
}

impl LogoArgs {
    /// Execute the logo command
    pub fn execute(&self) -> CliResult<()> {
        let name = non_blank(&self.name).ok_or_else(|| CliError::validation("Brand name is required"))?;
        let tagline = self.tagline.as_deref().and_then(non_blank);

        let svg = render::render_text_logo(name, tagline, self.vibe.key(), self.layout);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &svg).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("Wrote {} logo to {}", self.layout.title(), path.display());
            }
            None => println!("{svg}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vibe() {
        assert_eq!(parse_vibe("elegant"), Ok(Vibe::Elegant));
        assert!(parse_vibe("Elegant").is_err());
        assert!(parse_vibe("grunge").unwrap_err().contains("monospace"));
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(parse_layout("stacked"), Ok(LogoLayout::Stacked));
        assert!(parse_layout("diagonal").is_err());
    }
}
