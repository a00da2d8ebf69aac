use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;
use crate::Result;

/// On-disk configuration (`config.toml` under the platform config dir).
///
/// ```toml
/// [api]
/// base_url = "https://challenge.example.com/api/movies"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file is not an error: it yields
    /// the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::ApiError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("razzie").join("config.toml"))
    }
}

/// Resolve the API base URL, once, at process start:
/// 1. Explicit value (CLI flag)
/// 2. RAZZIE_API_URL environment variable
/// 3. `base_url` from the config file
/// 4. Compiled-in default
pub fn resolve_base_url(explicit: Option<&str>, config: &Config) -> String {
    let env_url = std::env::var("RAZZIE_API_URL").ok();
    resolve_from(explicit, env_url.as_deref(), config)
}

fn resolve_from(explicit: Option<&str>, env_url: Option<&str>, config: &Config) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Some(url) = env_url
        && !url.is_empty()
    {
        return url.to_string();
    }

    if let Some(url) = &config.api.base_url {
        return url.clone();
    }

    DEFAULT_BASE_URL.to_string()
}
