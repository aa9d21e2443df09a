//! The fixed, ordered set of page sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    Experience,
    Projects,
    Skills,
    Education,
    Achievements,
}

impl SectionId {
    /// Page order, top to bottom
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Achievements,
    ];

    /// DOM anchor id
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Achievements => "achievements",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Achievements => "Achievements",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_anchor(s).ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip_covers_all() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>().unwrap(), section);
        }
    }

    #[test]
    fn test_order_and_index() {
        assert_eq!(SectionId::ALL[0], SectionId::Hero);
        assert_eq!(SectionId::Achievements.index(), 5);
        assert!(SectionId::Experience < SectionId::Projects);
    }

    #[test]
    fn test_unknown_anchor() {
        assert_eq!(SectionId::from_anchor("footer"), None);
        assert_eq!(
            "Skills".parse::<SectionId>().unwrap_err(),
            PortfolioError::UnknownSection("Skills".into())
        );
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
    }
}
