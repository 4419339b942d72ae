//! Portfolio content model.
//!
//! [`PortfolioContent`] is the whole page as data. The presentation layer
//! walks it section by section; the view-state controller only needs the
//! lengths of its selectable lists.

pub mod entities;

use crate::selection::ExpandableList;
use entities::{
    AboutSection, ApproachSection, ContactSection, Hero, Highlight, PhilosophySection, Profile,
    Stat, Testimonial, WorkSection, WritingSection,
};
use serde::{Deserialize, Serialize};

/// All static content of the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub work: WorkSection,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub approach: ApproachSection,
    #[serde(default)]
    pub philosophy: PhilosophySection,
    #[serde(default)]
    pub about: AboutSection,
    #[serde(default)]
    pub writing: WritingSection,
    #[serde(default)]
    pub contact: ContactSection,
}

impl PortfolioContent {
    /// Number of items in an expandable list
    pub fn list_len(&self, list: ExpandableList) -> usize {
        match list {
            ExpandableList::Work => self.work.items.len(),
            ExpandableList::Modules => self.approach.modules.len(),
        }
    }

    /// Lengths of every selectable list, in the shape the controller needs
    pub fn list_sizes(&self) -> ListSizes {
        ListSizes {
            testimonials: self.testimonials.len(),
            work: self.work.items.len(),
            modules: self.approach.modules.len(),
        }
    }
}

/// Sizes of the fixed lists backing each selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSizes {
    pub testimonials: usize,
    pub work: usize,
    pub modules: usize,
}

impl ListSizes {
    pub fn of(&self, list: ExpandableList) -> usize {
        match list {
            ExpandableList::Work => self.work,
            ExpandableList::Modules => self.modules,
        }
    }
}
