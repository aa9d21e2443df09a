//! Résumé content: the static records the page renders.
//!
//! Everything here is fixed at build time. Links are opaque strings handed
//! to the platform; nothing parses them.

pub mod resume;

pub use resume::portfolio;

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub location: String,
    pub headline: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// Sandboxed live preview for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewFrame {
    pub src: String,
    pub title: String,
    pub sandbox: String,
}

/// Sandbox tokens applied to every live preview
pub const PREVIEW_SANDBOX: &str = "allow-scripts allow-same-origin";

impl PreviewFrame {
    pub fn new(src: &str, title: &str) -> Self {
        Self {
            src: src.to_string(),
            title: title.to_string(),
            sandbox: PREVIEW_SANDBOX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub stats: String,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    pub preview: Option<PreviewFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    /// First skill renders as the primary badge
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub summary: String,
}

/// Whole page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub contacts: Vec<ContactLink>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<Achievement>,
    pub footer: String,
}

impl Portfolio {
    pub fn contact(&self, kind: LinkKind) -> Option<&ContactLink> {
        self.contacts.iter().find(|c| c.kind == kind)
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }
}
