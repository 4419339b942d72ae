//! Page sections and navigation targets.
//!
//! The page is a fixed vertical sequence of sections. Five of them carry an
//! anchor and can be reached from the navigation bar or the menu.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A section of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    Stats,
    Testimonials,
    Work,
    Highlights,
    Approach,
    Philosophy,
    About,
    Writing,
    Contact,
    Footer,
}

impl SectionId {
    /// All sections in the order they appear on the page
    pub const PAGE_ORDER: [SectionId; 11] = [
        SectionId::Hero,
        SectionId::Stats,
        SectionId::Testimonials,
        SectionId::Work,
        SectionId::Highlights,
        SectionId::Approach,
        SectionId::Philosophy,
        SectionId::About,
        SectionId::Writing,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections reachable from the menu
    pub const NAV_TARGETS: [SectionId; 5] = [
        SectionId::Work,
        SectionId::Approach,
        SectionId::About,
        SectionId::Writing,
        SectionId::Contact,
    ];

    /// Sections shown inline in the wide navigation bar (contact is reached
    /// through the call-to-action instead)
    pub fn desktop_nav() -> &'static [SectionId] {
        &Self::NAV_TARGETS[..4]
    }

    /// Anchor name used for navigation, if the section has one
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            SectionId::Work => Some("work"),
            SectionId::Approach => Some("approach"),
            SectionId::About => Some("about"),
            SectionId::Writing => Some("writing"),
            SectionId::Contact => Some("contact"),
            _ => None,
        }
    }

    /// Label shown in the navigation bar and menu
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Stats => "Stats",
            SectionId::Testimonials => "Testimonials",
            SectionId::Work => "Work",
            SectionId::Highlights => "Speaking & Writing",
            SectionId::Approach => "Approach",
            SectionId::Philosophy => "Philosophy",
            SectionId::About => "About",
            SectionId::Writing => "Writing",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }

    pub fn is_nav_target(&self) -> bool {
        self.anchor().is_some()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectionId {
    type Err = DomainError;

    /// Parse a navigation anchor (`"work"`, `"#about"`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim().trim_start_matches('#').to_ascii_lowercase();
        SectionId::NAV_TARGETS
            .iter()
            .copied()
            .find(|section| section.anchor() == Some(anchor.as_str()))
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}
