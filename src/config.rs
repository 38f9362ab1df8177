//! Configuration loading.
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags. Every key is optional:
//!
//! ```yaml
//! endpoint: http://localhost:8000/news
//! page_title: "🔥 Hottest Tech News"
//! source_label: Hacker News
//! ```

use crate::render::{DEFAULT_SOURCE_LABEL, DEFAULT_TITLE, Presentation};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/news";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid feed endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the feed endpoint.
    pub endpoint: String,
    /// Heading shown on every rendered page.
    pub page_title: String,
    /// Attribution used when the server omits `source`.
    pub source_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_title: DEFAULT_TITLE.to_string(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from a YAML file. Missing keys take their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as YAML null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Parse and check the endpoint: it must be an absolute http(s) URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            message,
        };

        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn presentation(&self) -> Presentation {
        Presentation {
            title: self.page_title.clone(),
            source_label: self.source_label.clone(),
        }
    }
}
