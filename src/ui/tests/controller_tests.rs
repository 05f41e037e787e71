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

//! Controller tests
//!
//! Test for the MVC Controller logic

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiError, MockSource, Resource};
use crate::config::RetryPolicy;
use crate::core::{
    Contact, Education, LoadStatus, Portfolio, Profile, Section, ViewState, LOAD_FAILED_MESSAGE,
};
use crate::ui::controller::{Controller, LoadKind};

/// Helper: Portfolio with the fixed profile payload and empty collections
fn create_test_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            id: None,
            about: "X".to_string(),
            education: Education {
                degree: "B.E.".to_string(),
                university: "Chitkara University".to_string(),
                period: "2019-2023".to_string(),
            },
            contact: Contact {
                email: "a@b.com".to_string(),
                phone: "123".to_string(),
                linkedin: "li/x".to_string(),
            },
        },
        ..Portfolio::default()
    }
}

fn server_error() -> ApiError {
    ApiError::Network {
        status: Some(500),
        message: "Internal Server Error".to_string(),
    }
}

/// Helper: Controller over a shared mock so tests can inspect it
fn create_test_controller(source: MockSource) -> (Arc<MockSource>, Controller) {
    let source = Arc::new(source);
    let controller = Controller::new(source.clone());
    (source, controller)
}

#[test]
fn test_controller_starts_idle() {
    let (source, controller) = create_test_controller(MockSource::sample());

    assert_eq!(controller.status(), LoadStatus::Idle);
    assert_eq!(controller.view_state(), ViewState::Idle);
    assert!(controller.portfolio().is_none());
    assert_eq!(source.request_count(), 0, "Construction must not fetch");
}

#[tokio::test]
async fn test_load_success() {
    let (source, controller) = create_test_controller(MockSource::sample());

    let status = controller.load().await.unwrap();

    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(controller.active_section(), Some(Section::About));
    assert!(controller.portfolio().is_some());
    assert!(controller.error().is_none());
    assert_eq!(controller.user_message(), None);
    assert_eq!(source.request_count(), 5, "One request per resource");
}

#[tokio::test]
async fn test_every_section_renders_when_loaded() {
    let (_source, controller) = create_test_controller(MockSource::sample());
    controller.load().await.unwrap();

    for section in Section::ALL {
        let view = controller.section_view(section);
        assert!(view.is_some(), "{} should render", section);
    }
}

#[tokio::test]
async fn test_any_single_failure_fails_whole_load() {
    for resource in Resource::ALL {
        let source = MockSource::sample().failing(resource, server_error());
        let (_source, controller) = create_test_controller(source);

        let status = controller.load().await.unwrap();

        assert_eq!(status, LoadStatus::Failed, "{} failure must fail the load", resource);
        assert!(controller.portfolio().is_none(), "No partial data after {} failed", resource);
        assert!(controller.current_section_view().is_none());
        assert_eq!(controller.active_section(), None);
        assert_eq!(controller.error(), Some(server_error()));
    }
}

#[tokio::test]
async fn test_failed_shows_generic_message() {
    let source = MockSource::sample().failing(
        Resource::Skills,
        ApiError::Timeout {
            url: "http://localhost:8001/api/portfolio/skills".to_string(),
            after: Duration::from_secs(10),
        },
    );
    let (_source, controller) = create_test_controller(source);
    controller.load().await.unwrap();

    assert_eq!(controller.user_message(), Some(LOAD_FAILED_MESSAGE));
    assert!(controller.error().is_some_and(|e| e.is_timeout()));
}

#[tokio::test]
async fn test_retry_after_recovery() {
    let source = MockSource::sample().failing(Resource::Achievements, server_error());
    let (source, controller) = create_test_controller(source);
    assert_eq!(controller.load().await.unwrap(), LoadStatus::Failed);

    source.clear_failures();
    let status = controller.retry_load().await.unwrap();

    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(controller.active_section(), Some(Section::About));
    assert_eq!(source.request_count(), 10, "Retry re-issues all five fetches");
}

#[tokio::test]
async fn test_retry_that_fails_again_stays_failed() {
    let source = MockSource::sample().failing(Resource::Profile, server_error());
    let (source, controller) = create_test_controller(source);
    controller.load().await.unwrap();

    assert_eq!(controller.retry_load().await.unwrap(), LoadStatus::Failed);
    assert_eq!(source.request_count(), 10);
}

#[tokio::test]
async fn test_retry_rejected_unless_failed() {
    let (source, controller) = create_test_controller(MockSource::sample());
    assert!(controller.retry_load().await.is_err(), "Nothing to retry while idle");

    controller.load().await.unwrap();
    assert!(controller.retry_load().await.is_err(), "Nothing to retry while loaded");
    assert_eq!(controller.status(), LoadStatus::Loaded);
    assert_eq!(source.request_count(), 5, "Rejected retries must not fetch");
}

#[tokio::test]
async fn test_load_only_once() {
    let (source, controller) = create_test_controller(MockSource::sample());
    controller.load().await.unwrap();

    assert!(controller.load().await.is_err());
    assert_eq!(source.request_count(), 5);
}

#[tokio::test]
async fn test_select_section_performs_no_requests() {
    let (source, controller) = create_test_controller(MockSource::sample());
    controller.load().await.unwrap();
    let before = controller.portfolio();

    for section in Section::ALL {
        assert!(controller.select_section(section));
        assert_eq!(controller.active_section(), Some(section));
    }

    assert_eq!(source.request_count(), 5);
    assert_eq!(controller.portfolio(), before, "Loaded data must not change");
}

#[tokio::test]
async fn test_select_section_idempotent() {
    let (_source, controller) = create_test_controller(MockSource::sample());
    controller.load().await.unwrap();

    controller.select_section(Section::Projects);
    let once = controller.view_state();
    controller.select_section(Section::Projects);

    assert_eq!(controller.view_state(), once);
}

#[test]
fn test_select_section_before_load_is_ignored() {
    let (_source, controller) = create_test_controller(MockSource::sample());

    assert!(!controller.select_section(Section::Contact));
    assert_eq!(controller.status(), LoadStatus::Idle);
    assert_eq!(controller.active_section(), None);
}

#[tokio::test]
async fn test_contact_fields_match_payload() {
    let (_source, controller) =
        create_test_controller(MockSource::new(create_test_portfolio()));
    controller.load().await.unwrap();
    controller.select_section(Section::Contact);

    let view = controller.current_section_view().unwrap();
    let values: Vec<Option<&str>> = view.entries().map(|e| e.body.as_deref()).collect();
    assert_eq!(values, vec![Some("a@b.com"), Some("123"), Some("li/x")]);

    let profile = controller.portfolio().unwrap().profile;
    assert_eq!(profile.about, "X");
    assert_eq!(profile.education.degree, "B.E.");
    assert_eq!(profile.education.university, "Chitkara University");
    assert_eq!(profile.education.period, "2019-2023");
}

#[tokio::test]
async fn test_empty_projects_render_zero_entries() {
    let (_source, controller) =
        create_test_controller(MockSource::new(create_test_portfolio()));
    controller.load().await.unwrap();

    assert_eq!(controller.status(), LoadStatus::Loaded, "Empty lists are not a failure");
    let view = controller.section_view(Section::Projects).unwrap();
    assert_eq!(view.entry_count(), 0);
}

#[tokio::test]
async fn test_retry_policy_gives_up_after_max_attempts() {
    let source = Arc::new(MockSource::sample().failing(Resource::Projects, server_error()));
    let controller = Controller::new(source.clone())
        .with_retry_policy(RetryPolicy::new(2, &[Duration::from_millis(1)]));

    assert_eq!(controller.load().await.unwrap(), LoadStatus::Failed);
    assert_eq!(source.request_count(), 10, "Two attempts of five fetches");
}

#[tokio::test]
async fn test_retry_policy_recovers_without_user_action() {
    let source = Arc::new(MockSource::sample().failing_times(
        Resource::Projects,
        server_error(),
        1,
    ));
    let controller = Controller::new(source.clone())
        .with_retry_policy(RetryPolicy::new(2, &[Duration::from_millis(1)]));

    let status = controller.load().await.unwrap();

    assert_eq!(status, LoadStatus::Loaded, "Second attempt should succeed");
    assert_eq!(controller.active_section(), Some(Section::About));
    assert!(controller.error().is_none());
    assert_eq!(source.request_count(), 10, "Both attempts re-issue all five fetches");
}

#[tokio::test]
async fn test_start_load_rejected_once_loaded() {
    let (source, controller) = create_test_controller(MockSource::sample());
    controller.load().await.unwrap();

    // A second window asking for the initial load must see the loaded data
    assert!(controller.start_load(LoadKind::Initial).is_err());
    assert_eq!(controller.status(), LoadStatus::Loaded);
    assert!(controller.current_section_view().is_some());
    assert!(controller.start_load(LoadKind::Retry).is_err());
    assert_eq!(source.request_count(), 5);
}

#[tokio::test]
async fn test_start_load_follows_kind() {
    let (_source, controller) = create_test_controller(MockSource::sample());
    assert!(controller.start_load(LoadKind::Retry).is_err(), "Retry needs a failure first");

    controller.start_load(LoadKind::Initial).unwrap();
    assert_eq!(controller.status(), LoadStatus::Loading);
}

#[tokio::test]
async fn test_split_transitions_match_load() {
    let (_source, controller) = create_test_controller(MockSource::sample());

    controller.begin_load().unwrap();
    assert_eq!(controller.status(), LoadStatus::Loading);
    assert!(controller.portfolio().is_none());

    let outcome = controller.fetch_task().await;
    controller.finish_load(outcome).unwrap();
    assert_eq!(controller.status(), LoadStatus::Loaded);
}

#[tokio::test]
async fn test_fetch_task_runs_on_spawned_task() {
    let (_source, controller) = create_test_controller(MockSource::sample());
    controller.begin_load().unwrap();

    let outcome = tokio::spawn(controller.fetch_task()).await.unwrap();
    controller.finish_load(outcome).unwrap();

    assert_eq!(controller.status(), LoadStatus::Loaded);
}

#[tokio::test]
async fn test_health_check_delegates_to_source() {
    let (source, controller) = create_test_controller(MockSource::sample());

    assert!(controller.health_check().await.unwrap().is_healthy());
    assert_eq!(source.request_count(), 0);
}
