//! Color conversion command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::kit::ColorSpec;
use crate::models::RgbColor;
use clap::Args;

/// Convert a hex color to rgb() and hsl() notation
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Hex color, with or without '#' (e.g., "#f97316")
    #[arg(value_name = "HEX")]
    hex: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Convert malformed input to black instead of failing
    #[arg(long)]
    lenient: bool,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        if !self.lenient && RgbColor::parse_hex(&self.hex).is_none() {
            return Err(CliError::validation(format!(
                "Invalid hex color: '{}' (expected 6 hex digits, e.g. #1a2b3c)",
                self.hex
            )));
        }

        let spec = ColorSpec::from_hex(&self.hex);

        if self.json {
            print_json(&spec)?;
        } else {
            println!("hex: {}", spec.hex);
            println!("rgb: {}", spec.rgb);
            println!("hsl: {}", spec.hsl);
        }

        Ok(())
    }
}
