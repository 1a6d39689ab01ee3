//! Client for an OpenAI-compatible generative API.
//!
//! Each call is a single attempt. Callers decide what to fall back to when a
//! call fails; this module only reports the failure.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::OpenAiConfig;

/// Rendering quality requested from the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    /// Default quality, used for icons
    Standard,
    /// Higher detail, used for logos
    Hd,
}

/// HTTP client for image and chat completions.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    image_model: String,
    chat_model: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Omits the API key
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("image_model", &self.image_model)
            .field("chat_model", &self.chat_model)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Builds a client from config, or `None` when no API key is configured.
    pub fn from_config(config: &OpenAiConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Some(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            image_model: config.image_model.clone(),
            chat_model: config.chat_model.clone(),
        }))
    }

    /// Generates one 1024x1024 image and returns its URL.
    pub async fn generate_image(&self, prompt: &str, quality: ImageQuality) -> Result<String> {
        let url = format!("{}/images/generations", self.base_url);

        debug!(
            "Requesting image from {} ({} chars of prompt)",
            self.image_model,
            prompt.len()
        );

        let body = json!({
            "model": self.image_model,
            "prompt": prompt,
            "n": 1,
            "size": "1024x1024",
            "quality": quality,
            "style": "natural",
        });

        let response = self.post_json(&url, &body).await?;

        response["data"][0]["url"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow!("No image generated"))
    }

    /// Runs a two-message chat completion and returns the reply text.
    pub async fn complete_chat(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": self.chat_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self.post_json(&url, &body).await?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow!("Chat completion returned no content"))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .context(format!("Request to {url} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({status}): {error_body}");
        }

        response
            .json()
            .await
            .context("Failed to parse API response")
    }
}
