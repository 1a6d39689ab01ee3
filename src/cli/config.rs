//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration (API key masked)
    Show(ConfigShowArgs),
    /// Print the config file path
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Host the server binds to
    #[arg(long)]
    host: Option<String>,

    /// Port the server listens on
    #[arg(long)]
    port: Option<u16>,

    /// OpenAI API key
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Image model
    #[arg(long, value_name = "MODEL")]
    image_model: Option<String>,

    /// Chat model
    #[arg(long, value_name = "MODEL")]
    chat_model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?
            .redacted();

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.api_key.is_none()
            && self.base_url.is_none()
            && self.image_model.is_none()
            && self.chat_model.is_none()
            && self.timeout.is_none()
    }

    /// Applies the given options to `config`.
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(key) = &self.api_key {
            config.openai.api_key = Some(key.clone()).filter(|k| !k.trim().is_empty());
        }
        if let Some(url) = &self.base_url {
            config.openai.base_url.clone_from(url);
        }
        if let Some(model) = &self.image_model {
            config.openai.image_model.clone_from(model);
        }
        if let Some(model) = &self.chat_model {
            config.openai.chat_model.clone_from(model);
        }
        if let Some(timeout) = self.timeout {
            config.openai.timeout_secs = timeout;
        }
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --host, --port, --api-key, --base-url, --image-model, --chat-model, or --timeout",
            ));
        }

        // Read the file directly so an env API key is never persisted. Skip
        // validation here; the result is validated after the update.
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        let mut config = Config::read_from(&path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        self.apply(&mut config);

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("BrandKit Configuration");
    println!("======================");
    println!();

    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!();

    println!("OpenAI:");
    match &config.openai.api_key {
        Some(key) => println!("  API Key:     {key}"),
        None => println!("  API Key:     (not configured, AI features use fallbacks)"),
    }
    println!("  Base URL:    {}", config.openai.base_url);
    println!("  Image Model: {}", config.openai.image_model);
    println!("  Chat Model:  {}", config.openai.chat_model);
    println!("  Timeout:     {}s", config.openai.timeout_secs);
    println!();
}
