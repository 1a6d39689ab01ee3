//! Preset brand palettes offered by the studio.

use serde::{Deserialize, Serialize};

/// A two-color brand palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Display name (e.g., "Ocean").
    pub name: String,
    /// Primary color as hex (e.g., "#0ea5e9").
    pub primary: String,
    /// Accent color as hex.
    pub accent: String,
}

impl Palette {
    /// Creates a palette from its parts.
    pub fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            accent: accent.into(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("Monochrome", "#000000", "#666666")
    }
}

/// The preset palette collection.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteSet {
    /// Presets in display order.
    pub palettes: Vec<Palette>,
}

impl PaletteSet {
    /// Load the presets from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/palettes.json");
        let set: Self = serde_json::from_str(json_data)?;
        Ok(set)
    }

    /// Find a preset by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Names of all presets.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name.as_str()).collect()
    }
}
