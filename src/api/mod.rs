// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Portfolio data access
//!
//! # Architecture
//!
//! ```text
//! PortfolioSource (trait)
//!   ├─ ApiClient   - live backend over HTTP (reqwest)
//!   └─ MockSource  - in-memory dataset with failure injection
//!
//! fetch_all          - five concurrent fetches, all-or-nothing
//! fetch_with_policy  - fetch_all under a bounded RetryPolicy
//! ```
//!
//! Sources never retry on their own. Whether to try again is decided by
//! the caller, either through a [`RetryPolicy`] or a user action.

pub mod client;
pub mod error;
pub mod mock;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AppConfig, RetryPolicy};
use crate::core::types::{
    Achievement, Certification, HealthStatus, Portfolio, Profile, Project, SkillCategory,
};

pub use client::ApiClient;
pub use error::ApiError;
pub use mock::MockSource;

/// The five portfolio resources
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    Profile,
    Projects,
    Skills,
    Achievements,
    Certifications,
}

impl Resource {
    /// All resources, in the order their errors take precedence
    pub const ALL: [Resource; 5] = [
        Resource::Profile,
        Resource::Projects,
        Resource::Skills,
        Resource::Achievements,
        Resource::Certifications,
    ];

    /// Path below the API base
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Profile => "/portfolio/profile",
            Resource::Projects => "/portfolio/projects",
            Resource::Skills => "/portfolio/skills",
            Resource::Achievements => "/portfolio/achievements",
            Resource::Certifications => "/portfolio/certifications",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Profile => write!(f, "profile"),
            Resource::Projects => write!(f, "projects"),
            Resource::Skills => write!(f, "skills"),
            Resource::Achievements => write!(f, "achievements"),
            Resource::Certifications => write!(f, "certifications"),
        }
    }
}

/// Path of the backend liveness endpoint below the API base
pub const HEALTH_PATH: &str = "/health";

/// Read-only access to the portfolio resources
///
/// This is the seam that lets the controller run against the live backend
/// or an in-memory dataset without code changes.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile, ApiError>;
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn fetch_skills(&self) -> Result<Vec<SkillCategory>, ApiError>;
    async fn fetch_achievements(&self) -> Result<Vec<Achievement>, ApiError>;
    async fn fetch_certifications(&self) -> Result<Vec<Certification>, ApiError>;
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;
}

/// Fetches all five resources concurrently
///
/// Waits for every fetch to settle. On success the combined record is
/// returned; otherwise the first error in [`Resource::ALL`] order is
/// returned and every successful payload is dropped.
pub async fn fetch_all(source: &dyn PortfolioSource) -> Result<Portfolio, ApiError> {
    let (profile, projects, skills, achievements, certifications) = tokio::join!(
        source.fetch_profile(),
        source.fetch_projects(),
        source.fetch_skills(),
        source.fetch_achievements(),
        source.fetch_certifications(),
    );

    Ok(Portfolio {
        profile: profile?,
        projects: projects?,
        skills: skills?,
        achievements: achievements?,
        certifications: certifications?,
    })
}

/// Runs [`fetch_all`] up to `policy.max_attempts` times
///
/// Each attempt re-issues all five fetches. The error of the last attempt
/// is returned when every attempt fails.
pub async fn fetch_with_policy(
    source: &dyn PortfolioSource,
    policy: &RetryPolicy,
) -> Result<Portfolio, ApiError> {
    let mut attempt = 1;
    loop {
        match fetch_all(source).await {
            Ok(portfolio) => {
                info!(
                    attempt,
                    projects = portfolio.projects.len(),
                    skills = portfolio.skills.len(),
                    achievements = portfolio.achievements.len(),
                    certifications = portfolio.certifications.len(),
                    "portfolio loaded"
                );
                return Ok(portfolio);
            }
            Err(error) if policy.allows_another(attempt) => {
                let delay = policy.delay_after(attempt);
                warn!(attempt, delay_ms = delay.as_millis() as u64, %error, "portfolio load failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => {
                warn!(attempt, %error, "portfolio load failed");
                return Err(error);
            }
        }
    }
}

/// Builds the data source selected by configuration
///
/// `use_mock` swaps the live client for the built-in sample dataset.
pub fn source_from_config(
    config: &AppConfig,
    use_mock: bool,
) -> Result<Arc<dyn PortfolioSource>, ApiError> {
    if use_mock {
        info!("using built-in sample portfolio");
        return Ok(Arc::new(MockSource::sample()));
    }

    let client = ApiClient::new(config.api_base(), config.timeout())?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests;
