//! Application configuration.
//!
//! Configuration is stored in `<profile root>/config.yaml` and includes the
//! address of the profile API and the request timeout.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::paths::profile_root;

/// Environment variable overriding the configured API address
pub const API_URL_ENV: &str = "BUYER_PROFILE_API_URL";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["api.url", "api.timeout"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Profile API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Profile API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (default: http://localhost:8000)
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_api_timeout")]
    pub timeout: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout: default_api_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        profile_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ProfileError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ProfileError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            ProfileError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Get the API base URL from environment variable or config
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.api.url.clone()
    }

    /// Get the request timeout duration
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    /// Read a single value by its dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.url" => Ok(self.api.url.clone()),
            "api.timeout" => Ok(self.api.timeout.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single value by its dotted key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                let parsed = url::Url::parse(value)?;
                if parsed.cannot_be_a_base() {
                    return Err(ProfileError::Config(format!(
                        "'{value}' cannot be used as an API base URL"
                    )));
                }
                self.api.url = value.to_string();
            }
            "api.timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    ProfileError::Config(format!(
                        "invalid timeout '{value}', expected a number of seconds"
                    ))
                })?;
                if seconds == 0 {
                    return Err(ProfileError::Config(
                        "timeout must be at least 1 second".to_string(),
                    ));
                }
                self.api.timeout = seconds;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ProfileError {
    ProfileError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
