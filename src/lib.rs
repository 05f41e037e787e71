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

//! Portfolio Viewer
//!
//! A desktop and terminal viewer for a personal portfolio served by a small
//! REST backend: profile, projects, skills, achievements and certifications.
//!
//! # Features
//!
//! - **All-or-nothing loading:** The five resources are fetched concurrently
//!   and shown only when every one of them arrived
//! - **Manual retry:** A failed load shows a generic message and a Retry button
//! - **Injectable data:** Live HTTP client or in-memory sample dataset
//! - **GTK4 Interface:** Hero banner plus tabbed sections
//! - **CLI:** Print sections or check backend health from the terminal
//!
//! # Architecture
//!
//! - **`core`:** Data model, view state machine, section rendering
//! - **`api`:** Data sources (HTTP client, mock) and concurrent fetching
//! - **`config`:** Settings from file, environment and flags
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Loading with a mock source
//!
//! ```no_run
//! use portfolio_viewer::api::MockSource;
//! use portfolio_viewer::core::{LoadStatus, Section};
//! use portfolio_viewer::ui::Controller;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Controller::new(Arc::new(MockSource::sample()));
//! assert_eq!(controller.load().await?, LoadStatus::Loaded);
//!
//! controller.select_section(Section::Projects);
//! if let Some(view) = controller.current_section_view() {
//!     println!("{}: {} entries", view.title, view.entry_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Talking to the backend
//!
//! ```no_run
//! use portfolio_viewer::api::{fetch_all, ApiClient};
//! use portfolio_viewer::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load(None)?;
//! let client = ApiClient::new(config.api_base(), config.timeout())?;
//! let portfolio = fetch_all(&client).await?;
//! println!("Found {} projects", portfolio.projects.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{LoadStatus, Portfolio, Section, ViewState};
