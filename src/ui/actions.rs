//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, retry)
//! and their setup functions

use gtk4::{gio, prelude::*, Application};

use crate::ui::builders::Loader;
use crate::ui::controller::LoadKind;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}

/// Sets up the retry action
///
/// Same behaviour as the Retry button: only has an effect after a failed
/// load, otherwise the request is logged and ignored by the loader.
pub fn setup_retry_action(app: &Application, loader: Loader) {
    let retry_action = gio::SimpleAction::new("retry", None);

    retry_action.connect_activate(move |_, _| {
        loader.start(LoadKind::Retry);
    });

    app.add_action(&retry_action);
    app.set_accels_for_action("app.retry", &["<Ctrl>r", "F5"]);
}
