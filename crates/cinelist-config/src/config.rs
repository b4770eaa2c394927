use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::paths::PathManager;

pub const DEFAULT_OMDB_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/150x220?text=No+Image";
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

const API_KEY_TEMPLATE: &str = "YOUR_API_KEY";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Image shown on cards whose poster is "N/A"
    #[serde(default = "default_placeholder_poster")]
    pub placeholder_poster: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the watchlist; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_OMDB_URL.to_string()
}

fn default_placeholder_poster() -> String {
    DEFAULT_PLACEHOLDER_POSTER.to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_poster: default_placeholder_poster(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, otherwise start from defaults.
    /// The `OMDB_API_KEY` environment variable wins over the file.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.omdb.api_key = key;
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.is_api_key_configured() {
            return Err(anyhow::anyhow!(
                "OMDb api_key is not configured (run `cinelist config set-key` or set {})",
                API_KEY_ENV
            ));
        }
        if self.omdb.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("omdb.base_url cannot be empty"));
        }
        Ok(())
    }

    pub fn is_api_key_configured(&self) -> bool {
        let key = self.omdb.api_key.trim();
        !key.is_empty() && key != API_KEY_TEMPLATE
    }

    /// Directory holding persisted storage keys
    pub fn data_dir(&self, paths: &PathManager) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| paths.data_dir().to_path_buf())
    }
}
