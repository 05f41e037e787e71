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

//! Header bar builder
//!
//! Creates the application header bar with menu and resume link

use gtk4::{gio::Menu, prelude::WidgetExt, HeaderBar, LinkButton, MenuButton};

/// Builds the application header bar
///
/// Creates a HeaderBar containing:
/// - Resume link (left side, only when a resume URL is configured)
/// - Menu button with Retry (app.retry) and Quit (app.quit)
///
/// # Returns
///
/// The configured HeaderBar widget
pub fn build_header_bar(resume_url: Option<&str>) -> HeaderBar {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Retry Loading"), Some("app.retry"));
    menu.append(Some("Quit"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    // Resume is a plain hyperlink; the data client never fetches it
    if let Some(url) = resume_url {
        let resume_button = LinkButton::with_label(url, "Resume");
        resume_button.set_tooltip_text(Some(url));
        resume_button.add_css_class("suggested-action");
        header_bar.pack_start(&resume_button);
    }

    header_bar.pack_end(&menu_button);

    header_bar
}
