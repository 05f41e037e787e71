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

//! View state machine tests

use crate::api::ApiError;
use crate::core::state::{LoadStatus, TransitionError, ViewState};
use crate::core::types::{Portfolio, Section};

fn network_error() -> ApiError {
    ApiError::Network {
        status: Some(500),
        message: "Internal server error".to_string(),
    }
}

/// Helper: Drives a fresh state to Loaded
fn loaded_state() -> ViewState {
    let mut state = ViewState::default();
    state.begin_load().unwrap();
    state.finish_load(Ok(Portfolio::default())).unwrap();
    state
}

/// Helper: Drives a fresh state to Failed
fn failed_state() -> ViewState {
    let mut state = ViewState::default();
    state.begin_load().unwrap();
    state.finish_load(Err(network_error())).unwrap();
    state
}

#[test]
fn test_starts_idle() {
    let state = ViewState::default();
    assert_eq!(state.status(), LoadStatus::Idle);
    assert!(state.portfolio().is_none());
    assert!(state.active_section().is_none());
}

#[test]
fn test_begin_load_from_idle() {
    let mut state = ViewState::default();
    assert!(state.begin_load().is_ok());
    assert_eq!(state.status(), LoadStatus::Loading);
}

#[test]
fn test_success_enters_loaded_on_about() {
    let state = loaded_state();
    assert_eq!(state.status(), LoadStatus::Loaded);
    assert_eq!(state.active_section(), Some(Section::About));
    assert!(state.error().is_none());
}

#[test]
fn test_failure_enters_failed_without_data() {
    let state = failed_state();
    assert_eq!(state.status(), LoadStatus::Failed);
    assert!(state.portfolio().is_none(), "Failed state must not hold data");
    assert_eq!(state.error(), Some(&network_error()));
}

#[test]
fn test_retry_only_from_failed() {
    let mut idle = ViewState::default();
    assert_eq!(
        idle.retry(),
        Err(TransitionError {
            action: "retry",
            from: LoadStatus::Idle
        })
    );

    let mut loaded = loaded_state();
    assert!(loaded.retry().is_err());
    assert_eq!(loaded.status(), LoadStatus::Loaded, "Rejected retry must not change state");

    let mut failed = failed_state();
    assert!(failed.retry().is_ok());
    assert_eq!(failed.status(), LoadStatus::Loading);
    assert!(failed.error().is_none(), "Retry clears the previous error");
}

#[test]
fn test_begin_load_rejected_when_not_idle() {
    let mut loading = ViewState::Loading;
    assert!(loading.begin_load().is_err());

    let mut failed = failed_state();
    assert!(failed.begin_load().is_err(), "Failed must go through retry");
    assert_eq!(failed.status(), LoadStatus::Failed);
}

#[test]
fn test_finish_load_requires_loading() {
    let mut idle = ViewState::default();
    let result = idle.finish_load(Ok(Portfolio::default()));
    assert!(result.is_err());
    assert_eq!(idle.status(), LoadStatus::Idle);

    let mut loaded = loaded_state();
    assert!(loaded.finish_load(Err(network_error())).is_err());
    assert_eq!(loaded.status(), LoadStatus::Loaded, "Late failure must not clobber data");
}

#[test]
fn test_select_section_while_loaded() {
    let mut state = loaded_state();

    assert!(state.select_section(Section::Skills));
    assert_eq!(state.active_section(), Some(Section::Skills));
    assert_eq!(state.status(), LoadStatus::Loaded);
}

#[test]
fn test_select_section_is_idempotent() {
    let mut once = loaded_state();
    once.select_section(Section::Contact);

    let mut twice = loaded_state();
    twice.select_section(Section::Contact);
    twice.select_section(Section::Contact);

    assert_eq!(once, twice);
}

#[test]
fn test_select_section_ignored_unless_loaded() {
    let mut idle = ViewState::default();
    assert!(!idle.select_section(Section::Projects));
    assert_eq!(idle, ViewState::Idle);

    let mut failed = failed_state();
    assert!(!failed.select_section(Section::Projects));
    assert_eq!(failed.status(), LoadStatus::Failed);
}

#[test]
fn test_reload_after_retry_resets_section() {
    let mut state = failed_state();
    state.retry().unwrap();
    state.finish_load(Ok(Portfolio::default())).unwrap();
    assert_eq!(state.active_section(), Some(Section::About));
}

#[test]
fn test_transition_error_message() {
    let mut state = ViewState::Loading;
    let err = state.retry().unwrap_err();
    assert_eq!(err.to_string(), "Cannot retry while loading");
}
