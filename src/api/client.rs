//! Live backend client
//!
//! Thin wrapper over `reqwest` that issues unauthenticated JSON GETs below
//! a configured API base and folds every failure into [`ApiError`].
//! One log record is emitted per request and one per outcome.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::api::{ApiError, PortfolioSource, Resource, HEALTH_PATH};
use crate::core::types::{
    Achievement, Certification, HealthStatus, Profile, Project, SkillCategory,
};

/// HTTP client for the portfolio backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    /// e.g. `http://localhost:8001/api` (no trailing slash)
    api_base: String,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a client for `api_base` with a per-request deadline
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portfolio_viewer::api::{ApiClient, PortfolioSource};
    /// use std::time::Duration;
    ///
    /// # async fn example() -> Result<(), portfolio_viewer::api::ApiError> {
    /// let client = ApiClient::new("http://localhost:8001/api", Duration::from_secs(10))?;
    /// let projects = client.fetch_projects().await?;
    /// println!("{} projects", projects.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network {
                status: None,
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// GETs `path` and decodes the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let started = Instant::now();
        info!(method = "GET", url = %url, "api request");

        let result = self.send_and_decode(&url).await;
        if let Err(e) = &result {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            error!(method = "GET", url = %url, elapsed_ms, error = %e, "api request failed");
        }
        result
    }

    async fn send_and_decode<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        info!(
            status = status.as_u16(),
            url = %url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api response"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string()
            } else {
                body
            };
            return Err(ApiError::Network {
                status: Some(status.as_u16()),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }
        } else {
            ApiError::Network {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl PortfolioSource for ApiClient {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get_json(Resource::Profile.path()).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json(Resource::Projects.path()).await
    }

    async fn fetch_skills(&self) -> Result<Vec<SkillCategory>, ApiError> {
        self.get_json(Resource::Skills.path()).await
    }

    async fn fetch_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        self.get_json(Resource::Achievements.path()).await
    }

    async fn fetch_certifications(&self) -> Result<Vec<Certification>, ApiError> {
        self.get_json(Resource::Certifications.path()).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(HEALTH_PATH).await
    }
}
