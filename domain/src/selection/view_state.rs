//! Page-level UI selectors

use super::{ExpandableList, ExpansionSelector, RotationSelector};
use crate::content::ListSizes;
use crate::core::error::DomainError;
use crate::core::section::SectionId;

/// Independent selectors the page renders from.
///
/// Each list owns its own selector; mutating one never touches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mobile_menu_open: bool,
    work: ExpansionSelector,
    modules: ExpansionSelector,
    testimonial: RotationSelector,
}

impl ViewState {
    pub fn new(sizes: ListSizes) -> Self {
        Self {
            mobile_menu_open: false,
            work: ExpansionSelector::new(sizes.work),
            modules: ExpansionSelector::new(sizes.modules),
            testimonial: RotationSelector::new(sizes.testimonials),
        }
    }

    // -- Menu --

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Close the menu and hand back the section to scroll to
    pub fn navigate(&mut self, target: SectionId) -> SectionId {
        self.mobile_menu_open = false;
        target
    }

    // -- Expansion --

    pub fn expansion(&self, list: ExpandableList) -> &ExpansionSelector {
        match list {
            ExpandableList::Work => &self.work,
            ExpandableList::Modules => &self.modules,
        }
    }

    pub fn expanded(&self, list: ExpandableList) -> Option<usize> {
        self.expansion(list).expanded()
    }

    pub fn toggle_expanded(
        &mut self,
        list: ExpandableList,
        index: usize,
    ) -> Result<Option<usize>, DomainError> {
        let selector = match list {
            ExpandableList::Work => &mut self.work,
            ExpandableList::Modules => &mut self.modules,
        };
        selector.toggle(index)
    }

    // -- Testimonials --

    pub fn testimonial(&self) -> &RotationSelector {
        &self.testimonial
    }

    pub fn active_testimonial(&self) -> usize {
        self.testimonial.active()
    }

    pub fn set_active_testimonial(&mut self, index: usize) -> Result<(), DomainError> {
        self.testimonial.set(index)
    }

    pub fn advance_testimonial(&mut self) -> usize {
        self.testimonial.advance()
    }

    pub fn retreat_testimonial(&mut self) -> usize {
        self.testimonial.retreat()
    }
}
