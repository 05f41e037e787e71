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

//! Section page component
//!
//! Displays one rendered [`SectionView`] in a scrollable column. Each entry
//! becomes a card with heading, optional subheading and body, bullet points
//! and a wrap-around row of tags.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, FlowBox, Frame, Label,
    Orientation, ScrolledWindow, SelectionMode,
};

use crate::core::render::{Entry, SectionView};

/// Scrollable page for a single section
pub struct SectionPage {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// Column holding title, block titles and entry cards
    column: GtkBox,
}

impl Default for SectionPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionPage {
    /// Creates an empty page
    pub fn new() -> Self {
        let widget = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let column = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(24)
            .margin_end(24)
            .margin_top(16)
            .margin_bottom(24)
            .build();

        widget.set_child(Some(&column));

        Self { widget, column }
    }

    /// Replaces the page content with `view`
    pub fn update(&self, view: &SectionView) {
        // Clear existing content
        while let Some(child) = self.column.first_child() {
            self.column.remove(&child);
        }

        let title = Label::builder()
            .label(&view.title)
            .xalign(0.0)
            .build();
        title.add_css_class("section-title");
        self.column.append(&title);

        for block in &view.blocks {
            if let Some(block_title) = &block.title {
                let label = Label::builder().label(block_title).xalign(0.0).build();
                label.add_css_class("block-title");
                self.column.append(&label);
            }

            for entry in &block.entries {
                self.column.append(&Self::create_card(entry));
            }
        }

        if view.entry_count() == 0 {
            let empty = Label::builder()
                .label("Nothing to show yet.")
                .xalign(0.0)
                .build();
            empty.add_css_class("dim-label");
            self.column.append(&empty);
        }
    }

    /// Builds the card widget for one entry
    fn create_card(entry: &Entry) -> Frame {
        let card = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .margin_start(12)
            .margin_end(12)
            .margin_top(10)
            .margin_bottom(10)
            .build();

        let heading = Label::builder()
            .label(&entry.heading)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        heading.add_css_class("entry-heading");
        card.append(&heading);

        if let Some(subheading) = &entry.subheading {
            let label = Label::builder().label(subheading).xalign(0.0).build();
            label.add_css_class("dim-label");
            card.append(&label);
        }

        if let Some(body) = &entry.body {
            let label = Label::builder()
                .label(body)
                .xalign(0.0)
                .wrap(true)
                .wrap_mode(WordChar)
                .selectable(true)
                .build();
            card.append(&label);
        }

        for bullet in &entry.bullets {
            let label = Label::builder()
                .label(format!("•  {}", bullet))
                .xalign(0.0)
                .wrap(true)
                .margin_start(8)
                .build();
            card.append(&label);
        }

        if !entry.tags.is_empty() {
            let tags = FlowBox::builder()
                .selection_mode(SelectionMode::None)
                .halign(Align::Start)
                .column_spacing(6)
                .row_spacing(6)
                .max_children_per_line(8)
                .build();

            for tag in &entry.tags {
                let label = Label::new(Some(tag.as_str()));
                label.add_css_class("tag");
                tags.insert(&label, -1);
            }
            card.append(&tags);
        }

        let frame = Frame::builder().child(&card).build();
        frame.add_css_class("entry-card");
        frame
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
