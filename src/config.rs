//! Top-level application configuration.
//!
//! Configuration is stored in `<root>/config.yaml` and includes:
//! - The product listing endpoint and fetch size
//! - The HTTP request timeout
//! - The like window duration

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, StorefrontError};
use crate::fs::{read_file, write_file_atomic};
use crate::paths;

/// Default product listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";

/// Default number of products requested from the endpoint
pub const DEFAULT_LIMIT: u32 = 194;

/// Upper bound for `timeout`, in seconds (one hour)
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60 * 60;

/// Upper bound for `like_window`, in seconds (one day)
pub const MAX_LIKE_WINDOW_SECS: u64 = 24 * 60 * 60;

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &["endpoint", "limit", "timeout", "like_window"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Product listing endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum number of products to fetch
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// How long an item stays liked, in seconds (default: 3)
    #[serde(default = "default_like_window")]
    pub like_window: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_request_timeout() -> u64 {
    30
}

fn default_like_window() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            request_timeout: default_request_timeout(),
            like_window: default_like_window(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = read_file(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        write_file_atomic(path, &content)
    }

    /// Get the endpoint from the environment or the config file
    pub fn endpoint(&self) -> String {
        if let Ok(endpoint) = env::var("STOREFRONT_ENDPOINT")
            && !endpoint.is_empty()
        {
            return endpoint;
        }

        self.endpoint.clone()
    }

    /// Request timeout, clamped to [`MAX_REQUEST_TIMEOUT_SECS`] for hand-edited files
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout.min(MAX_REQUEST_TIMEOUT_SECS))
    }

    /// Like window, clamped to [`MAX_LIKE_WINDOW_SECS`] for hand-edited files
    pub fn like_window(&self) -> Duration {
        Duration::from_secs(self.like_window.min(MAX_LIKE_WINDOW_SECS))
    }

    /// Set the endpoint after validating it parses as an http(s) URL
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        validate_endpoint(endpoint)?;
        self.endpoint = endpoint.to_string();
        Ok(())
    }

    /// Get a config value by key, formatted for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint()),
            "limit" => Ok(self.limit.to_string()),
            "timeout" => Ok(self.request_timeout.to_string()),
            "like_window" => Ok(self.like_window.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value by key, parsing the value for the key's type
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.set_endpoint(value),
            "limit" => {
                self.limit = parse_positive(key, value)? as u32;
                Ok(())
            }
            "timeout" => {
                self.request_timeout = parse_positive(key, value)?;
                Ok(())
            }
            "like_window" => {
                self.like_window = parse_positive(key, value)?;
                Ok(())
            }
            _ => Err(unknown_key(key)),
        }
    }
}

/// Check that an endpoint is an absolute http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| StorefrontError::InvalidUrl(endpoint.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(StorefrontError::InvalidUrl(
            endpoint.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    let max = match key {
        "limit" => u64::from(u32::MAX),
        "timeout" => MAX_REQUEST_TIMEOUT_SECS,
        "like_window" => MAX_LIKE_WINDOW_SECS,
        _ => u64::MAX,
    };
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => Err(StorefrontError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive integer up to {max}"
        ))),
    }
}

fn unknown_key(key: &str) -> StorefrontError {
    StorefrontError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
