//! Configuration file handling

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Target server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Response printer settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Test runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Target server address
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    8000
}

/// Timeout settings in seconds
#[derive(Debug, Clone, Deserialize)]
pub struct Timeouts {
    /// Timeout for health, queue-size and results-list calls
    #[serde(default = "default_health")]
    pub health_secs: u64,

    /// Timeout for translation calls
    #[serde(default = "default_translate")]
    pub translate_secs: u64,
}

impl Timeouts {
    /// Reject zero timeouts, which would fail every call immediately
    pub fn validate(&self) -> Result<()> {
        if self.health_secs == 0 {
            return Err(super::Error::Config(
                "timeouts.health_secs must be at least 1".to_string(),
            ));
        }
        if self.translate_secs == 0 {
            return Err(super::Error::Config(
                "timeouts.translate_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn health(&self) -> Duration {
        Duration::from_secs(self.health_secs)
    }

    pub fn translate(&self) -> Duration {
        Duration::from_secs(self.translate_secs)
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            health_secs: default_health(),
            translate_secs: default_translate(),
        }
    }
}

fn default_health() -> u64 {
    5
}
fn default_translate() -> u64 {
    300
}

/// Response printer configuration
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Maximum number of characters of a response body to print
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
        }
    }
}

fn default_max_text_length() -> usize {
    500
}

/// Test runner configuration
#[derive(Debug, Deserialize)]
pub struct RunnerConfig {
    /// Pause between test steps in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            pause_ms: default_pause_ms(),
        }
    }
}

fn default_pause_ms() -> u64 {
    1000
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.timeouts.validate()?;
        Ok(config)
    }
}
