//! Vibe style lookup command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::Vibe;
use clap::Args;
use serde::Serialize;

/// Show the typography profile for a vibe
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Vibe key (minimalist, futuristic, elegant, rounded, brutalist, monospace)
    #[arg(value_name = "VIBE", required_unless_present = "list")]
    vibe: Option<String>,

    /// List all vibes
    #[arg(long)]
    list: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Fall back to minimalist for unknown vibes instead of failing
    #[arg(long)]
    lenient: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StyleOutput {
    vibe: &'static str,
    label: &'static str,
    font_family: &'static str,
    font_weight: &'static str,
    letter_spacing: &'static str,
    text_case: &'static str,
}

impl From<Vibe> for StyleOutput {
    fn from(vibe: Vibe) -> Self {
        let profile = vibe.profile();
        Self {
            vibe: vibe.key(),
            label: vibe.label(),
            font_family: profile.font_family,
            font_weight: profile.font_weight,
            letter_spacing: profile.letter_spacing,
            text_case: profile.text_case.as_css(),
        }
    }
}

impl StyleArgs {
    /// Execute the style command
    pub fn execute(&self) -> CliResult<()> {
        if self.list {
            let all: Vec<StyleOutput> = Vibe::ALL.into_iter().map(StyleOutput::from).collect();
            if self.json {
                return print_json(&all);
            }
            for style in &all {
                println!("{:<12} {}", style.vibe, style.label);
            }
            return Ok(());
        }

        let key = self.vibe.as_deref().unwrap_or_default();
        let vibe = match Vibe::from_key(key) {
            Some(vibe) => vibe,
            None if self.lenient => Vibe::default(),
            None => {
                return Err(CliError::validation(format!(
                    "Unknown vibe: '{key}'. Valid vibes: {}",
                    Vibe::ALL.map(Vibe::key).join(", ")
                )))
            }
        };

        let output = StyleOutput::from(vibe);

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} ({})", output.label, output.vibe);
            println!("  Font family:    {}", output.font_family);
            println!("  Font weight:    {}", output.font_weight);
            println!("  Letter spacing: {}", output.letter_spacing);
            println!("  Text case:      {}", output.text_case);
        }

        Ok(())
    }
}
