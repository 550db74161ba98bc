// File: src/config.rs
// Purpose: Configuration parsing from contact.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the development stub endpoint is mounted
pub const MOCK_ENDPOINT_PATH: &str = "/api/contact";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub dev: DevConfig,
}

/// Page server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Where submissions are POSTed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoint_path")]
    pub path: String,

    /// Request timeout; a hung endpoint counts as a failed submission
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Form rendering behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Path the form posts back to
    #[serde(default = "default_action")]
    pub action: String,

    /// Show an alert when delivery fails; `false` keeps failures silent
    #[serde(default = "default_true")]
    pub show_submission_errors: bool,
}

/// Development configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DevConfig {
    /// Mount a stub `POST /api/contact` that always answers 200
    #[serde(default)]
    pub mock_endpoint: bool,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_endpoint_path() -> String {
    "/api/contact".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_action() -> String {
    "/contact".to_string()
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

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_endpoint_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: default_action(),
            show_submission_errors: true,
        }
    }
}

impl EndpointConfig {
    /// Full URL submissions are POSTed to
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
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

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// Reject settings the page server cannot route
    pub fn validate(&self) -> Result<()> {
        if !self.form.action.starts_with('/') {
            bail!("form.action must start with '/', got {:?}", self.form.action);
        }

        if self.dev.mock_endpoint && self.form.action == MOCK_ENDPOINT_PATH {
            bail!(
                "form.action {:?} collides with the mock endpoint; change it or disable dev.mock_endpoint",
                self.form.action
            );
        }

        Ok(())
    }

    /// Load configuration from default path (./contact.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact.toml")
    }
}
