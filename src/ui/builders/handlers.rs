//! Event handler wiring
//!
//! Connects widget signals to the Controller and runs portfolio loads.
//!
//! Loads follow one pattern: the state transition happens synchronously on
//! the GTK main thread, the fetch future runs on the tokio runtime, and its
//! outcome is handed back to the main thread where the controller finishes
//! the transition and the view re-renders.

use gtk4::glib;
use gtk4::prelude::*;
use std::rc::Rc;
use tokio::runtime::Handle;
use tracing::{error, warn};

use crate::api::ApiError;
use crate::core::Section;
use crate::ui::builders::layout::MainView;
use crate::ui::controller::{Controller, LoadKind};

/// Starts portfolio loads and applies their outcome to the view
#[derive(Clone)]
pub struct Loader {
    controller: Rc<Controller>,
    view: Rc<MainView>,
    runtime: Handle,
}

impl Loader {
    pub fn new(controller: Rc<Controller>, view: Rc<MainView>, runtime: Handle) -> Self {
        Self {
            controller,
            view,
            runtime,
        }
    }

    /// Transitions to loading and fetches in the background
    ///
    /// An illegal transition (e.g., Retry while already loading) is logged
    /// and ignored. The view is rendered either way, so a window built
    /// after the data arrived shows the current state.
    pub fn start(&self, kind: LoadKind) {
        let started = self.controller.start_load(kind);
        self.view.render(&self.controller);

        if let Err(e) = started {
            warn!(?kind, error = %e, "load request ignored");
            return;
        }

        let fetch = self.runtime.spawn(self.controller.fetch_task());
        let controller = self.controller.clone();
        let view = self.view.clone();

        glib::spawn_future_local(async move {
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(ApiError::Network {
                    status: None,
                    message: format!("Background fetch aborted: {}", join_error),
                }),
            };

            if let Err(e) = controller.finish_load(outcome) {
                error!(error = %e, "could not apply load outcome");
            }
            view.render(&controller);
        });
    }
}

/// Wires up retry, section tabs and hero shortcuts
pub fn wire_up_handlers(loader: &Loader) {
    let view = loader.view.clone();

    // Retry button in the status panel
    let loader_for_retry = loader.clone();
    view.status_panel.retry_button().connect_clicked(move |_| {
        loader_for_retry.start(LoadKind::Retry);
    });

    // Tab switches go to the controller; the Stack already shows the page
    let controller_for_tabs = loader.controller.clone();
    view.stack.connect_visible_child_name_notify(move |stack| {
        if let Some(section) = stack
            .visible_child_name()
            .and_then(|name| name.parse::<Section>().ok())
        {
            controller_for_tabs.select_section(section);
        }
    });

    // Hero shortcuts
    let controller_for_projects = loader.controller.clone();
    let view_for_projects = view.clone();
    view.hero.projects_button().connect_clicked(move |_| {
        if controller_for_projects.select_section(Section::Projects) {
            view_for_projects.show_section(Section::Projects);
        }
    });

    let controller_for_contact = loader.controller.clone();
    let view_for_contact = view.clone();
    view.hero.contact_button().connect_clicked(move |_| {
        if controller_for_contact.select_section(Section::Contact) {
            view_for_contact.show_section(Section::Contact);
        }
    });
}
