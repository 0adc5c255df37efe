//! # Server Configuration
//!
//! Loaded once at startup from the environment (with `.env` support in
//! `main`). The OpenRouter credential is deliberately optional: without it
//! the server runs in KB-only mode and never attempts a model call.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

/// The server configuration, resolved from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// The port to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The OpenRouter credential. Loaded from `OPENROUTER_API_KEY`; absence
    /// (or an empty value) switches the server to KB-only mode.
    #[serde(default)]
    pub openrouter_api_key: Option<String>,
    /// The versioned API root. Loaded from `OPENROUTER_API_BASE`.
    #[serde(default = "default_api_base")]
    pub openrouter_api_base: String,
    /// The model identifier. Loaded from `OPENROUTER_MODEL`.
    #[serde(default = "default_model")]
    pub openrouter_model: String,
}

fn default_port() -> u16 {
    8080
}

fn default_api_base() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "openrouter/auto".to_string()
}

/// Loads the configuration from environment variables.
pub fn get_config() -> Result<Config, config::ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;
    settings.try_deserialize()
}
