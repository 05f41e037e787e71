//! Viewer configuration
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`~/.config/portfolio-viewer/config.toml` if present,
//!    or an explicit path that must exist)
//! 3. The `PORTFOLIO_BACKEND_URL` environment variable
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_viewer::config::AppConfig;
//!
//! let config = AppConfig::load(None)?;
//! println!("Talking to {}", config.api_base());
//! # Ok::<(), portfolio_viewer::config::ConfigError>(())
//! ```
//!
//! # File format
//!
//! ```toml
//! backend_url = "https://portfolio.example.com"
//! timeout_secs = 10
//! resume_url = "https://portfolio.example.com/resume.pdf"
//!
//! [retry]
//! max_attempts = 1
//! backoff_ms = []
//!
//! [hero]
//! name = "Jane Doe"
//! headline = "Solution Developer"
//! tagline = "Middleware, APIs and system integration"
//! ```

pub mod error;
pub mod retry;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub use error::ConfigError;
pub use retry::RetryPolicy;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";
/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
/// Client-side request deadline
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/portfolio-viewer/config.toml";

/// Static text for the hero banner
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    pub headline: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            headline: "Solution Developer".to_string(),
            tagline: "Projects, skills and achievements at a glance.".to_string(),
        }
    }
}

/// Complete viewer configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin; the API lives under `<backend_url>/api`
    pub backend_url: String,
    /// Per-request deadline in seconds
    pub timeout_secs: u64,
    /// Direct link to the resume asset (never fetched by the client)
    pub resume_url: Option<String>,
    pub retry: RetryPolicy,
    pub hero: HeroConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            resume_url: None,
            retry: RetryPolicy::default(),
            hero: HeroConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment
    ///
    /// # Arguments
    ///
    /// * `explicit_path` - Config file that must exist. When `None`, the
    ///   default location is used if a file is there.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file,
    /// `ConfigError::Parse` for malformed TOML, and a validation error if
    /// the merged settings are unusable.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit_path {
            Some(path) => {
                let path = expand_path(path);
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => {
                let path = expand_path(Path::new(DEFAULT_CONFIG_PATH));
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config
            .with_env_overrides(|key| std::env::var(key).ok())
            .validate()
    }

    /// Reads and parses a TOML config file (no env overrides, no validation)
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content, path)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses TOML content; `origin` is only used in error messages
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Applies environment overrides using `lookup` to read variables
    ///
    /// Empty values are ignored.
    pub fn with_env_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => self.with_backend_url(url),
            None => self,
        }
    }

    /// Replaces the backend URL
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Checks the merged settings and normalises the backend URL
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let url = self.backend_url.trim().trim_end_matches('/').to_string();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url
            .split_once("://")
            .map(|(_, rest)| !rest.is_empty())
            .unwrap_or(false);
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidBackendUrl(self.backend_url));
        }
        self.backend_url = url;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        self.retry.validate()?;
        Ok(self)
    }

    /// Per-request deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base of every API path, e.g. `http://localhost:8001/api`
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

/// Expands `~` in a config path
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

#[cfg(test)]
mod tests;
