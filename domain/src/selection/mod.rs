//! Selectors: which item of a list is active or expanded.
//!
//! - [`ExpansionSelector`]: at most one expanded card per list
//! - [`RotationSelector`]: wrapping active index (testimonials)
//! - [`ViewState`]: the page's independent selectors plus the menu flag

pub mod expansion;
pub mod rotation;
pub mod view_state;

pub use expansion::ExpansionSelector;
pub use rotation::RotationSelector;
pub use view_state::ViewState;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A card list whose items can be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandableList {
    /// "Selected Work" project cards
    Work,
    /// "Approach" framework modules
    Modules,
}

impl fmt::Display for ExpandableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandableList::Work => write!(f, "work"),
            ExpandableList::Modules => write!(f, "modules"),
        }
    }
}
