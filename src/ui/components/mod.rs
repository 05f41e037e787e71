//! UI Components
//!
//! Reusable GTK4 widgets for the portfolio viewer.
//!
//! # Components
//!
//! - `hero_banner.rs` - Name, headline and section shortcuts
//! - `status_panel.rs` - Loading spinner / error message with Retry
//! - `section_page.rs` - Scrollable page for one rendered section

mod hero_banner;
mod section_page;
mod status_panel;

pub use hero_banner::HeroBanner;
pub use section_page::SectionPage;
pub use status_panel::StatusPanel;
