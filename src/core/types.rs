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

//! Portfolio records and the section selector
//!
//! All records are read-only views of what the backend returns. The backend
//! attaches bookkeeping fields (`created_at`, `updated_at`) that the viewer
//! has no use for, so unknown fields are ignored during decoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Education details shown in the about section
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Education {
    /// Degree title (e.g., "B.E. in Computer Science")
    pub degree: String,
    /// Awarding institution
    pub university: String,
    /// Free-form period (e.g., "2019 – 2023")
    pub period: String,
}

/// Contact channels shown in the contact section
///
/// Values are displayed exactly as received; no normalisation is applied.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// The singleton profile record
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Profile {
    /// Server-assigned identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form biography
    pub about: String,
    pub education: Education,
    pub contact: Contact,
}

/// A portfolio project
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Bullet points, in server order
    pub highlights: Vec<String>,
    /// Technology tags, in server order
    pub technologies: Vec<String>,
}

/// A named group of skills
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SkillCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Achievement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Certification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub issuer: String,
}

/// Payload of the backend liveness endpoint
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Returns true when the backend reports itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// The combined record of all five resources
///
/// A `Portfolio` only ever exists when every resource was fetched
/// successfully; there is no partially populated form of it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

/// One of the five content tabs
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl Section {
    /// All sections in tab order
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Achievements,
        Section::Contact,
    ];

    /// Stable lowercase identifier (used for stack page names and CLI args)
    pub fn key(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.key() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown section '{}' (expected one of: about, projects, skills, achievements, contact)",
                    s
                )
            })
    }
}
