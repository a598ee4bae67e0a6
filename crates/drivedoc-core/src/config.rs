use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::{DEFAULT_DOCUMENT_NAME, DEFAULT_DOCUMENT_TYPE};

/// Environment variable overriding `base_url` from the config file.
pub const BASE_URL_ENV: &str = "DRIVEDOC_BASE_URL";

/// Global configuration loaded from `~/.config/drivedoc/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the backend proxy (scheme, host, optional path prefix).
    pub base_url: String,
    /// User-Agent sent with every request; None = `drivedoc/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Upper bound applied by the CLI around each proxy call. The client
    /// itself never times out. `0` disables it.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,
    /// `document_type` sent with emails when none is given.
    #[serde(default = "default_document_type")]
    pub default_document_type: String,
    /// `document_name` sent with emails when none is given.
    #[serde(default = "default_document_name")]
    pub default_document_name: String,
    /// Where `download` and `view` put files when no output path is given
    /// (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Command that receives the saved file path for printing.
    #[serde(default = "default_print_command")]
    pub print_command: String,
    /// Command that opens the saved file for viewing.
    #[serde(default = "default_view_command")]
    pub view_command: String,
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(120)
}

fn default_document_type() -> String {
    DEFAULT_DOCUMENT_TYPE.to_string()
}

fn default_document_name() -> String {
    DEFAULT_DOCUMENT_NAME.to_string()
}

fn default_print_command() -> String {
    "lp".to_string()
}

fn default_view_command() -> String {
    "xdg-open".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            user_agent: None,
            request_timeout_secs: default_request_timeout_secs(),
            default_document_type: default_document_type(),
            default_document_name: default_document_name(),
            download_dir: None,
            print_command: default_print_command(),
            view_command: default_view_command(),
        }
    }
}

impl Config {
    /// Applies `DRIVEDOC_BASE_URL` when set and non-empty.
    pub fn apply_env(&mut self) {
        if let Some(url) = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            tracing::debug!(base_url = %url, "base URL from environment");
            self.base_url = url;
        }
    }

    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_secs
            .filter(|s| *s > 0)
            .map(std::time::Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("drivedoc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Config> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        let default_cfg = Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
