//! In-memory portfolio source
//!
//! Serves a fixed dataset through the same [`PortfolioSource`] trait as the
//! live client. Individual resources can be made to fail, and every fetch
//! is counted, which is what the controller tests lean on.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

use crate::api::{ApiError, PortfolioSource, Resource};
use crate::core::types::{
    Achievement, Certification, Contact, Education, HealthStatus, Portfolio, Profile, Project,
    SkillCategory,
};

/// An injected failure; `remaining: None` fails forever
#[derive(Debug)]
struct Failure {
    error: ApiError,
    remaining: Option<usize>,
}

/// Portfolio source backed by an in-memory dataset
#[derive(Debug, Default)]
pub struct MockSource {
    portfolio: Portfolio,
    failures: Mutex<HashMap<Resource, Failure>>,
    delay: Option<Duration>,
    requests: AtomicUsize,
}

impl MockSource {
    /// Serves `portfolio` with no failures and no delay
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            ..Self::default()
        }
    }

    /// Serves the built-in sample dataset
    pub fn sample() -> Self {
        Self::new(sample_portfolio())
    }

    /// Makes every fetch of `resource` fail with `error`
    pub fn failing(self, resource: Resource, error: ApiError) -> Self {
        self.set_failure(resource, error);
        self
    }

    /// Makes only the next `times` fetches of `resource` fail, then serves again
    pub fn failing_times(self, resource: Resource, error: ApiError, times: usize) -> Self {
        self.failures().insert(
            resource,
            Failure {
                error,
                remaining: Some(times),
            },
        );
        self
    }

    /// Delays every fetch, to make the loading state observable
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Injects a failure after construction (e.g., between two loads)
    pub fn set_failure(&self, resource: Resource, error: ApiError) {
        self.failures().insert(
            resource,
            Failure {
                error,
                remaining: None,
            },
        );
    }

    /// Removes all injected failures
    pub fn clear_failures(&self) {
        self.failures().clear();
    }

    /// Total number of fetch calls served (health checks excluded)
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn failures(&self) -> MutexGuard<'_, HashMap<Resource, Failure>> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the error for this fetch, if any, counting down limited failures
    fn take_failure(&self, resource: Resource) -> Option<ApiError> {
        let mut failures = self.failures();
        let (error, exhausted) = match failures.get_mut(&resource)? {
            Failure {
                error,
                remaining: None,
            } => (error.clone(), false),
            Failure {
                error,
                remaining: Some(remaining),
            } => {
                if *remaining == 0 {
                    failures.remove(&resource);
                    return None;
                }
                *remaining -= 1;
                (error.clone(), *remaining == 0)
            }
        };

        if exhausted {
            failures.remove(&resource);
        }
        Some(error)
    }

    async fn serve<T: Clone + Sync>(&self, resource: Resource, value: &T) -> Result<T, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.take_failure(resource);
        match failure {
            Some(error) => {
                debug!(%resource, %error, "mock source failing");
                Err(error)
            }
            None => {
                debug!(%resource, "mock source serving");
                Ok(value.clone())
            }
        }
    }
}

#[async_trait]
impl PortfolioSource for MockSource {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.serve(Resource::Profile, &self.portfolio.profile).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.serve(Resource::Projects, &self.portfolio.projects).await
    }

    async fn fetch_skills(&self) -> Result<Vec<SkillCategory>, ApiError> {
        self.serve(Resource::Skills, &self.portfolio.skills).await
    }

    async fn fetch_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        self.serve(Resource::Achievements, &self.portfolio.achievements)
            .await
    }

    async fn fetch_certifications(&self) -> Result<Vec<Certification>, ApiError> {
        self.serve(Resource::Certifications, &self.portfolio.certifications)
            .await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: Some("In-memory sample data".to_string()),
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in sample dataset
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            id: None,
            about: "Solution developer focused on Java middleware, API development and \
                    system integration, delivering scalable and secure microservices for \
                    enterprise workflows."
                .to_string(),
            education: Education {
                degree: "B.E. in Computer Science and Engineering".to_string(),
                university: "Example University".to_string(),
                period: "2019 – 2023".to_string(),
            },
            contact: Contact {
                email: "hello@example.com".to_string(),
                phone: "+00 0000 000000".to_string(),
                linkedin: "linkedin.com/in/example".to_string(),
            },
        },
        projects: vec![
            Project {
                id: None,
                title: "Middleware API Suite for Manufacturing Platform".to_string(),
                description: "Standalone middleware services for internal business systems, \
                              focused on integration and workflow automation."
                    .to_string(),
                highlights: strings(&[
                    "Automated workflow schedulers using Camel DSL",
                    "Optimized database interactions for high performance",
                    "Implemented secure authentication and authorization",
                ]),
                technologies: strings(&["Apache Camel", "Java 17", "REST/SOAP", "Spring Boot"]),
            },
            Project {
                id: None,
                title: "Microservices with Spring Boot".to_string(),
                description: "High-performance microservices with caching and secured \
                              authentication APIs."
                    .to_string(),
                highlights: strings(&[
                    "Distributed caching with Infinispan",
                    "Authentication APIs secured with Keycloak",
                ]),
                technologies: strings(&["Spring Boot", "Infinispan", "Keycloak", "Java"]),
            },
            Project {
                id: None,
                title: "Platform Migration: FUSE to Camel".to_string(),
                description: "Migrated enterprise services from Red Hat FUSE to Apache Camel \
                              without downtime."
                    .to_string(),
                highlights: strings(&[
                    "Maintained system stability during migration",
                    "Improved overall throughput",
                ]),
                technologies: strings(&["Red Hat FUSE", "Apache Camel", "Java"]),
            },
        ],
        skills: vec![
            SkillCategory {
                id: None,
                category: "Programming Languages".to_string(),
                items: strings(&["Java", "JavaScript", "SQL", "Python"]),
            },
            SkillCategory {
                id: None,
                category: "Frameworks & Technologies".to_string(),
                items: strings(&["Spring Boot", "Apache Camel", "Hibernate", "React"]),
            },
            SkillCategory {
                id: None,
                category: "Tools & Platforms".to_string(),
                items: strings(&["Git", "Jenkins", "Docker", "Kubernetes", "Maven"]),
            },
            SkillCategory {
                id: None,
                category: "Databases".to_string(),
                items: strings(&["MySQL", "PostgreSQL", "MongoDB", "Redis"]),
            },
        ],
        achievements: vec![
            Achievement {
                id: None,
                title: "Champion of the Month".to_string(),
                description: "Recognized for outstanding project contributions".to_string(),
            },
            Achievement {
                id: None,
                title: "Enterprise Integration Lead".to_string(),
                description: "Led critical middleware integrations with zero downtime"
                    .to_string(),
            },
        ],
        certifications: vec![
            Certification {
                id: None,
                name: "SQL Essential Training".to_string(),
                issuer: "LinkedIn Learning".to_string(),
            },
            Certification {
                id: None,
                name: "Introduction to Cybersecurity".to_string(),
                issuer: "Cisco".to_string(),
            },
        ],
    }
}
