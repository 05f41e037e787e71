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

//! Layout builder
//!
//! Creates the main application layout structure and knows how to bring it
//! in line with the controller's view state.

use gtk4::{prelude::*, Align, Box as GtkBox, Orientation, Separator, Stack, StackSwitcher};
use std::rc::Rc;

use crate::config::HeroConfig;
use crate::core::{LoadStatus, Section};
use crate::ui::components::{HeroBanner, SectionPage, StatusPanel};
use crate::ui::Controller;

/// Handles to every widget the handlers need after construction
pub struct MainView {
    /// Root container, set as the window child
    pub root: GtkBox,
    pub hero: Rc<HeroBanner>,
    pub status_panel: Rc<StatusPanel>,
    /// Switcher + stack, hidden until loaded
    pub content: GtkBox,
    pub stack: Stack,
    /// One page per section, in tab order
    pub pages: Vec<(Section, Rc<SectionPage>)>,
}

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Hero banner at top
/// - Status panel (loading / failed)
/// - Content: a StackSwitcher over a Stack with one page per section
pub fn build_main_layout(hero: &HeroConfig) -> MainView {
    let root = GtkBox::new(Orientation::Vertical, 0);

    let hero = Rc::new(HeroBanner::new(hero));
    root.append(hero.widget());
    root.append(&Separator::new(Orientation::Horizontal));

    let status_panel = Rc::new(StatusPanel::new());
    root.append(status_panel.widget());

    let content = GtkBox::new(Orientation::Vertical, 0);
    content.set_vexpand(true);

    let stack = Stack::builder()
        .transition_type(gtk4::StackTransitionType::Crossfade)
        .vexpand(true)
        .hexpand(true)
        .build();

    let mut pages = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let page = Rc::new(SectionPage::new());
        stack.add_titled(page.widget(), Some(section.key()), section.label());
        pages.push((section, page));
    }

    let switcher = StackSwitcher::builder()
        .stack(&stack)
        .halign(Align::Center)
        .margin_top(10)
        .margin_bottom(6)
        .build();

    content.append(&switcher);
    content.append(&stack);
    root.append(&content);

    MainView {
        root,
        hero,
        status_panel,
        content,
        stack,
        pages,
    }
}

impl MainView {
    /// Shows whatever the controller's current state calls for
    ///
    /// Pages are repopulated only on entering the loaded state; plain
    /// section switches never come through here.
    pub fn render(&self, controller: &Controller) {
        match controller.status() {
            LoadStatus::Idle | LoadStatus::Loading => {
                self.status_panel.show_loading();
                self.content.set_visible(false);
                self.hero.set_shortcuts_sensitive(false);
            }
            LoadStatus::Failed => {
                let detail = controller.error().map(|e| e.to_string());
                let message = controller.user_message().unwrap_or_default();
                self.status_panel.show_error(message, detail.as_deref());
                self.content.set_visible(false);
                self.hero.set_shortcuts_sensitive(false);
            }
            LoadStatus::Loaded => {
                for (section, page) in &self.pages {
                    if let Some(view) = controller.section_view(*section) {
                        page.update(&view);
                    }
                }
                if let Some(active) = controller.active_section() {
                    self.show_section(active);
                }
                self.status_panel.hide();
                self.content.set_visible(true);
                self.hero.set_shortcuts_sensitive(true);
            }
        }
    }

    /// Brings `section`'s page to the front
    pub fn show_section(&self, section: Section) {
        self.stack.set_visible_child_name(section.key());
    }
}
