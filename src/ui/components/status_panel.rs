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

//! Load status panel component
//!
//! Shown instead of the section content while the portfolio is loading or
//! after a load failed.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            ◌  Loading portfolio...   │   (loading)
//! └──────────────────────────────────────┘
//! ┌──────────────────────────────────────┐
//! │   Could not load portfolio data.     │   (failed)
//! │   HTTP 500: Internal server error    │
//! │              [ Retry ]               │
//! └──────────────────────────────────────┘
//! ```

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Label, Orientation, Spinner};

/// Loading spinner / error message with a Retry button
pub struct StatusPanel {
    /// Root widget
    widget: GtkBox,
    spinner: Spinner,
    /// Main message ("Loading portfolio..." or the generic failure text)
    message_label: Label,
    /// Technical detail of the captured error (dimmed)
    detail_label: Label,
    retry_button: Button,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPanel {
    /// Creates the panel in its loading appearance
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_top(40)
            .margin_bottom(40)
            .halign(Align::Center)
            .valign(Align::Center)
            .vexpand(true)
            .build();
        widget.add_css_class("status-panel");

        let spinner = Spinner::new();
        spinner.set_size_request(32, 32);

        let message_label = Label::new(None);
        message_label.add_css_class("status-message");

        let detail_label = Label::builder().wrap(true).max_width_chars(60).build();
        detail_label.add_css_class("dim-label");

        let retry_button = Button::builder()
            .label("Retry")
            .halign(Align::Center)
            .build();
        retry_button.add_css_class("suggested-action");

        widget.append(&spinner);
        widget.append(&message_label);
        widget.append(&detail_label);
        widget.append(&retry_button);

        let panel = Self {
            widget,
            spinner,
            message_label,
            detail_label,
            retry_button,
        };
        panel.show_loading();
        panel
    }

    /// Spinner plus loading text, no retry
    pub fn show_loading(&self) {
        self.spinner.set_visible(true);
        self.spinner.set_spinning(true);
        self.message_label.set_text("Loading portfolio...");
        self.detail_label.set_visible(false);
        self.retry_button.set_visible(false);
        self.widget.set_visible(true);
    }

    /// Failure text, optional detail and the Retry button
    pub fn show_error(&self, message: &str, detail: Option<&str>) {
        self.spinner.set_spinning(false);
        self.spinner.set_visible(false);
        self.message_label.set_text(message);

        match detail {
            Some(detail) => {
                self.detail_label.set_text(detail);
                self.detail_label.set_visible(true);
            }
            None => self.detail_label.set_visible(false),
        }

        self.retry_button.set_visible(true);
        self.widget.set_visible(true);
    }

    /// Hides the whole panel (data is loaded)
    pub fn hide(&self) {
        self.spinner.set_spinning(false);
        self.widget.set_visible(false);
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Retry button, for the parent to wire up
    pub fn retry_button(&self) -> &Button {
        &self.retry_button
    }
}
