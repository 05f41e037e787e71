use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading viewer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Configuration file is not valid TOML or has wrong value types.
    #[error("Failed to parse config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// Backend URL is empty or not http(s).
    #[error("Invalid backend URL '{0}': expected http:// or https://")]
    InvalidBackendUrl(String),
    /// Request timeout must be at least one second.
    #[error("Invalid timeout: must be greater than zero")]
    InvalidTimeout,
    /// Retry policy cannot be satisfied.
    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
