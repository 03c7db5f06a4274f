//! Shared configuration for the roster CLI and TUI.
//!
//! One TOML file merged over built-in defaults and overridden by
//! `ROSTER_`-prefixed environment variables, then translated into a
//! `roster_core::ViewerConfig`. Command-line flags are applied by the
//! binaries on top of the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use roster_core::config::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use roster_core::layout::DEFAULT_MIN_WIDTH;
use roster_core::{TlsVerification, ViewerConfig};

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `ROSTER_API__PAGE_SIZE=25`.
pub const ENV_PREFIX: &str = "ROSTER_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub table: TableSection,
}

/// `[api]`: where to fetch from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSection {
    /// API root; `/users` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

/// `[table]`: layout tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableSection {
    /// Narrowest a column may be dragged, in terminal cells.
    #[serde(default = "default_min_column_width")]
    pub min_column_width: u16,
}

impl Default for TableSection {
    fn default() -> Self {
        Self {
            min_column_width: default_min_column_width(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_timeout() -> u64 {
    30
}
fn default_min_column_width() -> u16 {
    DEFAULT_MIN_WIDTH
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "roster", "roster").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("roster");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Defaults, then the TOML file at `path` (if present), then environment.
pub fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Extract a `Config` from any figment.
pub fn from_figment(figment: &Figment) -> Result<Config, ConfigError> {
    Ok(figment.extract()?)
}

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    from_figment(&figment_for(path))
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(&path, cfg)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the runtime `ViewerConfig`, validating as we go.
    pub fn to_viewer_config(&self) -> Result<ViewerConfig, ConfigError> {
        let base_url: Url = self
            .api
            .base_url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("invalid URL: {}", self.api.base_url),
            })?;

        if self.api.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "api.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.table.min_column_width == 0 {
            return Err(ConfigError::Validation {
                field: "table.min_column_width".into(),
                reason: "must be at least 1".into(),
            });
        }

        let tls = if self.api.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.api.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(ViewerConfig {
            base_url,
            page_size: self.api.page_size,
            tls,
            timeout: Duration::from_secs(self.api.timeout),
            min_column_width: self.table.min_column_width,
        })
    }
}
