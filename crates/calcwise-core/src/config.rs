//! Application configuration
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path (e.g. `--config`), if it exists
//! 2. The per-user override (~/.local/share/calcwise/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Environment variables are applied last:
//! - `CALCWISE_ALLOWED_ORIGINS` - comma-separated CORS origins
//! - `CALCWISE_API_KEYS` - comma-separated bearer keys (enables auth)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/calcwise.toml");

pub const ALLOWED_ORIGINS_ENV: &str = "CALCWISE_ALLOWED_ORIGINS";
pub const API_KEYS_ENV: &str = "CALCWISE_API_KEYS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub analysis: AnalysisSettings,
    /// Bearer keys; only ever read from the environment
    #[serde(skip)]
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Sort recommendations high → low priority
    pub sort_by_priority: bool,
    /// Cap on recommendations per response; 0 means unlimited
    pub max_recommendations: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            sort_by_priority: true,
            max_recommendations: 10,
        }
    }
}

impl AppConfig {
    /// Load config from the first available layer, then apply env overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match resolve_path(explicit) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                let content = fs::read_to_string(&path)?;
                Self::from_toml(&content)?
            }
            None => Self::from_toml(DEFAULT_CONFIG)?,
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))
    }

    /// Render as TOML (api keys are never written out)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }

    fn apply_env(&mut self) {
        if let Ok(origins) = std::env::var(ALLOWED_ORIGINS_ENV) {
            let parsed = split_list(&origins);
            if !parsed.is_empty() {
                self.server.allowed_origins = parsed;
            }
        }
        if let Ok(keys) = std::env::var(API_KEYS_ENV) {
            self.api_keys = split_list(&keys);
        }
    }
}

/// Per-user override location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("calcwise").join("config.toml"))
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
    }
    default_config_path().filter(|p| p.exists())
}

/// Split a comma-separated list, dropping empty entries
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
