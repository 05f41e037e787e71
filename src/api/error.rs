use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a portfolio data source.
///
/// Every failure of a fetch operation is reported through this single
/// channel. Variants carry owned strings rather than the underlying
/// transport error so the value can be cloned into the view state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response (`status` present) or connection failure (`status` absent).
    #[error("{}", network_message(.status, .message))]
    Network {
        status: Option<u16>,
        message: String,
    },
    /// The request did not complete within the configured deadline.
    #[error("Request to {url} timed out after {}s", .after.as_secs_f32())]
    Timeout { url: String, after: Duration },
    /// The response body was not the expected JSON shape.
    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

fn network_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => format!("Network error: {}", message),
    }
}

impl ApiError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true for deadline failures
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }
}
