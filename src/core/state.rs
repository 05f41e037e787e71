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

//! View state machine
//!
//! ```text
//!          begin_load              finish_load(Ok)
//!   Idle ────────────▶ Loading ──────────────────▶ Loaded { active_section }
//!                        ▲   │
//!                  retry │   │ finish_load(Err)
//!                        │   ▼
//!                       Failed
//! ```
//!
//! The machine is pure: it performs no I/O and knows nothing about where
//! the data comes from. The controller drives it from the UI thread.

use std::fmt;
use thiserror::Error;

use crate::api::ApiError;
use crate::core::types::{Portfolio, Section};

/// Generic message shown to the user whenever a load fails.
///
/// Which of the five resources failed is deliberately not surfaced here;
/// the captured error is kept for logs and tooltips.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load portfolio data.";

/// Load status without payload, for cheap comparisons
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Idle => write!(f, "idle"),
            LoadStatus::Loading => write!(f, "loading"),
            LoadStatus::Loaded => write!(f, "loaded"),
            LoadStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Attempted a transition the machine does not allow
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Cannot {action} while {from}")]
pub struct TransitionError {
    pub action: &'static str,
    pub from: LoadStatus,
}

/// The in-memory view state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded {
        portfolio: Box<Portfolio>,
        active_section: Section,
    },
    Failed {
        error: ApiError,
    },
}

impl ViewState {
    /// Returns the payload-free status
    pub fn status(&self) -> LoadStatus {
        match self {
            ViewState::Idle => LoadStatus::Idle,
            ViewState::Loading => LoadStatus::Loading,
            ViewState::Loaded { .. } => LoadStatus::Loaded,
            ViewState::Failed { .. } => LoadStatus::Failed,
        }
    }

    /// `Idle → Loading` (initial mount)
    pub fn begin_load(&mut self) -> Result<(), TransitionError> {
        self.transition("begin loading", LoadStatus::Idle)
    }

    /// `Failed → Loading` (user-initiated retry)
    pub fn retry(&mut self) -> Result<(), TransitionError> {
        self.transition("retry", LoadStatus::Failed)
    }

    fn transition(
        &mut self,
        action: &'static str,
        required: LoadStatus,
    ) -> Result<(), TransitionError> {
        let from = self.status();
        if from != required {
            return Err(TransitionError { action, from });
        }
        *self = ViewState::Loading;
        Ok(())
    }

    /// `Loading → Loaded | Failed`
    ///
    /// A successful outcome always lands on the default section. A failed
    /// outcome keeps only the error.
    pub fn finish_load(
        &mut self,
        outcome: Result<Portfolio, ApiError>,
    ) -> Result<(), TransitionError> {
        let from = self.status();
        if from != LoadStatus::Loading {
            return Err(TransitionError {
                action: "finish loading",
                from,
            });
        }

        *self = match outcome {
            Ok(portfolio) => ViewState::Loaded {
                portfolio: Box::new(portfolio),
                active_section: Section::default(),
            },
            Err(error) => ViewState::Failed { error },
        };
        Ok(())
    }

    /// Switches the visible section
    ///
    /// Only meaningful while loaded; returns false (and does nothing)
    /// otherwise. Selecting the current section is a no-op that still
    /// returns true.
    pub fn select_section(&mut self, section: Section) -> bool {
        match self {
            ViewState::Loaded { active_section, .. } => {
                *active_section = section;
                true
            }
            _ => false,
        }
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        match self {
            ViewState::Loaded { portfolio, .. } => Some(portfolio),
            _ => None,
        }
    }

    pub fn active_section(&self) -> Option<Section> {
        match self {
            ViewState::Loaded { active_section, .. } => Some(*active_section),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ViewState::Failed { error } => Some(error),
            _ => None,
        }
    }
}
