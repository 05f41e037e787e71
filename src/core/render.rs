//! Section rendering
//!
//! Turns a loaded [`Portfolio`] into a toolkit-neutral [`SectionView`].
//! Both the GTK pages and the CLI printer consume the same view, so what
//! each front-end shows for a section is decided here and only here.

use crate::core::types::{Portfolio, Section};

/// One displayable item (a project, a skill group, a contact line, ...)
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Entry {
    pub heading: String,
    pub subheading: Option<String>,
    pub body: Option<String>,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
}

impl Entry {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Self::default()
        }
    }

    fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }

    fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A titled group of entries within a section
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    pub title: Option<String>,
    pub entries: Vec<Entry>,
}

/// Everything a front-end needs to draw one section
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SectionView {
    pub section: Section,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl SectionView {
    /// Total number of entries across all blocks
    pub fn entry_count(&self) -> usize {
        self.blocks.iter().map(|block| block.entries.len()).sum()
    }

    /// Iterates over every entry in display order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().flat_map(|block| block.entries.iter())
    }
}

/// Builds the view for `section` from loaded data
///
/// Collections keep the order the server sent them in. Empty collections
/// produce empty blocks rather than placeholder entries.
pub fn render_section(portfolio: &Portfolio, section: Section) -> SectionView {
    let (title, blocks) = match section {
        Section::About => ("About Me", about_blocks(portfolio)),
        Section::Projects => ("Featured Projects", projects_blocks(portfolio)),
        Section::Skills => ("Technical Skills", skills_blocks(portfolio)),
        Section::Achievements => ("Achievements", achievements_blocks(portfolio)),
        Section::Contact => ("Get In Touch", contact_blocks(portfolio)),
    };

    SectionView {
        section,
        title: title.to_string(),
        blocks,
    }
}

fn about_blocks(portfolio: &Portfolio) -> Vec<Block> {
    let profile = &portfolio.profile;
    let education = &profile.education;

    vec![
        Block {
            title: None,
            entries: vec![Entry::new("About").with_body(profile.about.clone())],
        },
        Block {
            title: Some("Education".to_string()),
            entries: vec![Entry::new(education.degree.clone())
                .with_subheading(education.university.clone())
                .with_body(education.period.clone())],
        },
    ]
}

fn projects_blocks(portfolio: &Portfolio) -> Vec<Block> {
    let entries = portfolio
        .projects
        .iter()
        .map(|project| Entry {
            heading: project.title.clone(),
            subheading: None,
            body: Some(project.description.clone()),
            bullets: project.highlights.clone(),
            tags: project.technologies.clone(),
        })
        .collect();

    vec![Block {
        title: None,
        entries,
    }]
}

fn skills_blocks(portfolio: &Portfolio) -> Vec<Block> {
    let entries = portfolio
        .skills
        .iter()
        .map(|category| Entry {
            tags: category.items.clone(),
            ..Entry::new(category.category.clone())
        })
        .collect();

    vec![Block {
        title: None,
        entries,
    }]
}

fn achievements_blocks(portfolio: &Portfolio) -> Vec<Block> {
    let achievements = portfolio
        .achievements
        .iter()
        .map(|achievement| {
            Entry::new(achievement.title.clone()).with_body(achievement.description.clone())
        })
        .collect();

    let certifications = portfolio
        .certifications
        .iter()
        .map(|cert| Entry::new(cert.name.clone()).with_subheading(cert.issuer.clone()))
        .collect();

    vec![
        Block {
            title: Some("Key Achievements".to_string()),
            entries: achievements,
        },
        Block {
            title: Some("Certifications".to_string()),
            entries: certifications,
        },
    ]
}

fn contact_blocks(portfolio: &Portfolio) -> Vec<Block> {
    let contact = &portfolio.profile.contact;

    vec![Block {
        title: None,
        entries: vec![
            Entry::new("Email").with_body(contact.email.clone()),
            Entry::new("Phone").with_body(contact.phone.clone()),
            Entry::new("LinkedIn").with_body(contact.linkedin.clone()),
        ],
    }]
}
