//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::APP_DATA_DIR;

/// Environment variable that overrides `openai.api_key`.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "BRANDKIT_CONFIG_DIR";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Settings for the OpenAI-compatible generative API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API key. Without one, every AI feature falls back to local rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API base URL including the version segment (e.g., "https://api.openai.com/v1")
    pub base_url: String,
    /// Model used for logo and icon images
    pub image_model: String,
    /// Model used for tagline suggestions
    pub chat_model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            image_model: "dall-e-3".to_string(),
            chat_model: "gpt-4".to_string(),
            timeout_secs: 90,
        }
    }
}

impl OpenAiConfig {
    /// Returns the API key if one is set and non-blank.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/BrandKit/config.toml`
/// - macOS: `~/Library/Application Support/BrandKit/config.toml`
/// - Windows: `%APPDATA%\BrandKit\config.toml`
///
/// # Validation
///
/// - `server.port` must be non-zero
/// - `openai.base_url` must be an http(s) URL
/// - `openai.timeout_secs` must be positive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Generative API settings
    pub openai: OpenAiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `BRANDKIT_CONFIG_DIR` wins when set; otherwise the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file and the environment.
    ///
    /// If the file doesn't exist, defaults are used. `OPENAI_API_KEY`, when
    /// set, replaces the key from the file.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file_path()?)?;
        config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a config file without validating it, so a bad value can be
    /// repaired in place. A missing file gives defaults.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Replaces the API key with `key` when it is non-blank.
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.openai.api_key = Some(key);
        }
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path`.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be between 1 and 65535");
        }

        let base_url = url::Url::parse(&self.openai.base_url)
            .context(format!("openai.base_url is not a URL: {}", self.openai.base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "openai.base_url must use http or https: {}",
                self.openai.base_url
            );
        }

        if self.openai.timeout_secs == 0 {
            anyhow::bail!("openai.timeout_secs must be greater than zero");
        }

        Ok(())
    }

    /// Returns a copy safe to display, with the API key masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.openai.api_key().is_some() {
            copy.openai.api_key = Some("********".to_string());
        }
        copy
    }
}
