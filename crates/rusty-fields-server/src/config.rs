// File: src/config.rs
// Purpose: Configuration parsing from rusty-fields.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "rusty-fields.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "RUSTY_FIELDS_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "RUSTY_FIELDS_PORT";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Longest note accepted, in characters
    #[serde(default = "default_note_max_length")]
    pub note_max_length: usize,

    /// Show the character counter under the note
    #[serde(default = "default_true")]
    pub show_note_char_count: bool,

    /// Hint shown under the note while it has no error; empty hides it
    #[serde(default = "default_note_support_text")]
    pub note_support_text: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_note_max_length() -> usize {
    500
}

fn default_note_support_text() -> String {
    "Tell us anything we should know.".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            note_max_length: default_note_max_length(),
            show_note_char_count: true,
            note_support_text: default_note_support_text(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `$RUSTY_FIELDS_CONFIG` or `./rusty-fields.toml`, then apply
    /// `$RUSTY_FIELDS_PORT`.
    pub fn load_default() -> Result<Self> {
        Self::load_with(std::env::var(CONFIG_PATH_ENV).ok(), std::env::var(PORT_ENV).ok())
    }

    /// Load from `path` (or `./rusty-fields.toml`), then apply a port override
    pub fn load_with(path: Option<String>, port: Option<String>) -> Result<Self> {
        let path = path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(&path)?;

        if let Some(port) = port {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", PORT_ENV, port))?;
        }

        Ok(config)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
