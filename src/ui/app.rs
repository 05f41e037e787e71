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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to load and display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (with injected PortfolioSource)
//!   ├─ Builds main window
//!   ├─ Connects components to Controller
//!   └─ Starts the initial load
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, glib, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::api::PortfolioSource;
use crate::config::AppConfig;
use crate::ui::actions::{setup_quit_action, setup_retry_action};
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers, Loader};
use crate::ui::controller::{Controller, LoadKind};

/// GTK4 Application showing the portfolio
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Viewer settings (hero text, resume link)
    config: Rc<AppConfig>,
    /// Runtime that executes the network fetches
    runtime: Handle,
}

impl App {
    /// Creates a new App reading from `source`
    ///
    /// # Arguments
    ///
    /// * `config` - Viewer configuration
    /// * `source` - Live client or mock dataset
    /// * `runtime` - Handle of a running tokio runtime for the fetches
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portfolio_viewer::api::MockSource;
    /// use portfolio_viewer::config::AppConfig;
    /// use portfolio_viewer::ui::App;
    /// use std::sync::Arc;
    ///
    /// let runtime = tokio::runtime::Runtime::new()?;
    /// let app = App::new(AppConfig::default(), Arc::new(MockSource::sample()), runtime.handle().clone());
    /// app.run(); // Blocks until window closes
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(config: AppConfig, source: Arc<dyn PortfolioSource>, runtime: Handle) -> Self {
        // Create GTK4 Application
        let app = Application::builder()
            .application_id("com.tidynest.portfolio-viewer")
            .build();

        let controller = Controller::new(source).with_retry_policy(config.retry.clone());

        Self {
            app,
            controller: Rc::new(controller),
            config: Rc::new(config),
            runtime,
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. The function blocks until the
    /// application exits.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let config = self.config.clone();
        let runtime = self.runtime.clone();

        // Connect activate signal (called when app starts, and again on
        // every later launch while this instance is running)
        self.app.connect_activate(move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }
            Self::build_ui(app, controller.clone(), &config, runtime.clone());
        });

        // GTK must not see our CLI arguments
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("no display available, skipping custom CSS"),
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates the
    /// window and all components, then kicks off the initial load.
    fn build_ui(app: &Application, controller: Rc<Controller>, config: &AppConfig, runtime: Handle) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(format!("{} · Portfolio", config.hero.name))
            .default_width(1000)
            .default_height(800)
            .build();

        let header_bar = build_header_bar(config.resume_url.as_deref());
        window.set_titlebar(Some(&header_bar));

        let view = Rc::new(build_main_layout(&config.hero));
        window.set_child(Some(&view.root));

        let loader = Loader::new(controller, view, runtime);
        wire_up_handlers(&loader);

        setup_quit_action(app);
        setup_retry_action(app, loader.clone());

        window.present();

        info!("window ready, starting initial load");
        loader.start(LoadKind::Initial);
    }
}
