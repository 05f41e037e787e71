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

//! HTTP client tests
//!
//! Each test spins up a throwaway axum backend on a random local port.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;

use crate::api::{fetch_all, ApiClient, ApiError, PortfolioSource};

/// Helper: Serves `router` on 127.0.0.1 and returns its address
async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> ApiClient {
    ApiClient::new(format!("http://{}/api", addr), timeout).unwrap()
}

fn profile_json() -> serde_json::Value {
    json!({
        "id": "64f0",
        "about": "X",
        "education": {"degree": "B.E.", "university": "Chitkara University", "period": "2019-2023"},
        "contact": {"email": "a@b.com", "phone": "123", "linkedin": "li/x"},
        "created_at": "2024-01-01T00:00:00"
    })
}

/// Helper: Backend answering every resource successfully
fn full_backend() -> Router {
    Router::new()
        .route("/api/portfolio/profile", get(|| async { Json(profile_json()) }))
        .route(
            "/api/portfolio/projects",
            get(|| async {
                Json(json!([{
                    "title": "Gateway",
                    "description": "API gateway",
                    "highlights": ["fast"],
                    "technologies": ["Rust"]
                }]))
            }),
        )
        .route(
            "/api/portfolio/skills",
            get(|| async { Json(json!([{"category": "Languages", "items": ["Java"]}])) }),
        )
        .route(
            "/api/portfolio/achievements",
            get(|| async { Json(json!([{"title": "Champion", "description": "Of the month"}])) }),
        )
        .route(
            "/api/portfolio/certifications",
            get(|| async { Json(json!([{"name": "SQL Essentials", "issuer": "LinkedIn Learning"}])) }),
        )
        .route(
            "/api/health",
            get(|| async { Json(json!({"status": "healthy", "message": "Portfolio API is running"})) }),
        )
}

#[tokio::test]
async fn test_fetch_profile_decodes_payload() {
    let addr = spawn_backend(full_backend()).await;
    let client = client_for(addr, Duration::from_secs(5));

    let profile = client.fetch_profile().await.unwrap();
    assert_eq!(profile.id.as_deref(), Some("64f0"));
    assert_eq!(profile.contact.email, "a@b.com");
    assert_eq!(profile.education.university, "Chitkara University");
}

#[tokio::test]
async fn test_fetch_all_against_backend() {
    let addr = spawn_backend(full_backend()).await;
    let client = client_for(addr, Duration::from_secs(5));

    let portfolio = fetch_all(&client).await.unwrap();
    assert_eq!(portfolio.projects.len(), 1);
    assert_eq!(portfolio.skills[0].items, vec!["Java"]);
    assert_eq!(portfolio.achievements[0].title, "Champion");
    assert_eq!(portfolio.certifications[0].issuer, "LinkedIn Learning");
}

#[tokio::test]
async fn test_trailing_slash_in_base_is_ignored() {
    let addr = spawn_backend(full_backend()).await;
    let client = ApiClient::new(format!("http://{}/api/", addr), Duration::from_secs(5)).unwrap();

    assert_eq!(client.api_base(), format!("http://{}/api", addr));
    assert!(client.fetch_skills().await.is_ok());
}

#[tokio::test]
async fn test_server_error_maps_to_network_with_status() {
    let router = Router::new().route(
        "/api/portfolio/projects",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let addr = spawn_backend(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.fetch_projects().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Network {
            status: Some(500),
            message: "database unavailable".to_string()
        }
    );
    assert_eq!(err.to_string(), "HTTP 500: database unavailable");
}

#[tokio::test]
async fn test_empty_error_body_uses_reason_phrase() {
    let addr = spawn_backend(Router::new()).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.fetch_certifications().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
}

#[tokio::test]
async fn test_malformed_json_maps_to_decode() {
    let router = Router::new().route(
        "/api/portfolio/skills",
        get(|| async {
            ([(header::CONTENT_TYPE, "application/json")], "{\"category\": ").into_response()
        }),
    );
    let addr = spawn_backend(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.fetch_skills().await.unwrap_err();
    match err {
        ApiError::Decode { url, .. } => assert!(url.ends_with("/api/portfolio/skills")),
        other => panic!("Expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_shape_maps_to_decode() {
    let router = Router::new().route(
        "/api/portfolio/achievements",
        get(|| async { Json(json!({"title": "not a list"})) }),
    );
    let addr = spawn_backend(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.fetch_achievements().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_missing_list_field_maps_to_decode() {
    let router = Router::new().route(
        "/api/portfolio/projects",
        get(|| async { Json(json!([{"title": "Gateway", "description": "API gateway"}])) }),
    );
    let addr = spawn_backend(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let err = client.fetch_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "Got {:?}", err);
}

#[tokio::test]
async fn test_slow_backend_maps_to_timeout() {
    let router = Router::new().route(
        "/api/portfolio/profile",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(profile_json())
        }),
    );
    let addr = spawn_backend(router).await;
    let client = client_for(addr, Duration::from_millis(200));

    let err = client.fetch_profile().await.unwrap_err();
    assert!(err.is_timeout(), "Expected timeout, got {:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_refused_connection_maps_to_network_without_status() {
    // Reserve a port, then free it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, Duration::from_secs(2));
    let err = client.fetch_profile().await.unwrap_err();

    assert!(
        matches!(err, ApiError::Network { status: None, .. }),
        "Expected connection failure, got {:?}",
        err
    );
    assert!(err.to_string().starts_with("Network error:"));
}

#[tokio::test]
async fn test_health_check() {
    let addr = spawn_backend(full_backend()).await;
    let client = client_for(addr, Duration::from_secs(5));

    let health = client.health_check().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.message.as_deref(), Some("Portfolio API is running"));
}
