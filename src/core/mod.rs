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

//! src/core/mod.rs
//!
//! Core portfolio logic
//!
//! This module contains the data model and the pure logic built on it:
//! - Record types for the five portfolio resources
//! - The view state machine (idle, loading, loaded, failed)
//! - Section rendering into a toolkit-neutral display model
//!
//! Nothing here performs I/O or touches GTK, so all of it is unit tested
//! without a display server or a backend.

pub mod render;
pub mod state;
pub mod types;

pub use render::{render_section, SectionView};
pub use state::{LoadStatus, TransitionError, ViewState, LOAD_FAILED_MESSAGE};
pub use types::*;

#[cfg(test)]
mod tests;
