use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Catalog served when nothing overrides it
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

pub const ENDPOINT_ENV: &str = "CATALOG_ENDPOINT";
pub const LOG_LEVEL_ENV: &str = "CATALOG_LOG";

/// Runtime settings.
///
/// Layered as defaults, then the optional settings file, then environment
/// variables.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog endpoint returning the product array
    pub endpoint: String,
    /// Default tracing filter (`RUST_LOG` still wins)
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse settings file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("catalog endpoint must not be empty")]
    EmptyEndpoint,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the user's settings file (if any) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Where the settings file lives:
    /// - Linux: ~/.config/product-catalog/settings.json
    /// - macOS: ~/Library/Application Support/product-catalog/settings.json
    /// - Windows: %APPDATA%\product-catalog\settings.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("product-catalog");
        path.push("settings.json");
        Some(path)
    }

    /// Load from an explicit file and environment lookup.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };

        settings.apply_env(env);
        settings.validate()?;

        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = env(ENDPOINT_ENV) {
            self.endpoint = endpoint;
        }
        if let Some(level) = env(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        Ok(())
    }
}
