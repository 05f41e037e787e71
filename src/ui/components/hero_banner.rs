//! Hero banner component
//!
//! Name, headline and tagline at the top of the window, plus two shortcut
//! buttons that jump straight to the projects and contact sections.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Label, Orientation};

use crate::config::HeroConfig;

/// Static hero section
pub struct HeroBanner {
    /// Root widget
    widget: GtkBox,
    projects_button: Button,
    contact_button: Button,
}

impl HeroBanner {
    /// Creates the banner from configured text
    pub fn new(hero: &HeroConfig) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .margin_top(24)
            .margin_bottom(16)
            .halign(Align::Center)
            .build();
        widget.add_css_class("hero");

        let name_label = Label::new(Some(hero.name.as_str()));
        name_label.add_css_class("hero-name");

        let headline_label = Label::new(Some(hero.headline.as_str()));
        headline_label.add_css_class("hero-headline");

        let tagline_label = Label::builder()
            .label(&hero.tagline)
            .wrap(true)
            .max_width_chars(70)
            .justify(gtk4::Justification::Center)
            .build();
        tagline_label.add_css_class("dim-label");

        let buttons = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(Align::Center)
            .margin_top(8)
            .build();

        let projects_button = Button::builder().label("View Projects").build();
        projects_button.add_css_class("suggested-action");
        let contact_button = Button::builder().label("Contact Me").build();

        buttons.append(&projects_button);
        buttons.append(&contact_button);

        widget.append(&name_label);
        widget.append(&headline_label);
        widget.append(&tagline_label);
        widget.append(&buttons);

        Self {
            widget,
            projects_button,
            contact_button,
        }
    }

    /// Enables the shortcuts only when there is content to jump to
    pub fn set_shortcuts_sensitive(&self, sensitive: bool) {
        self.projects_button.set_sensitive(sensitive);
        self.contact_button.set_sensitive(sensitive);
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn projects_button(&self) -> &Button {
        &self.projects_button
    }

    pub fn contact_button(&self) -> &Button {
        &self.contact_button
    }
}
