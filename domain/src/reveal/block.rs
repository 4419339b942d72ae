//! Content block identity

use crate::core::section::SectionId;
use std::fmt;

/// Stable identity of a renderable block: its section plus a slot within it.
///
/// Slots are assigned by the page builder in render order, so the same
/// content always yields the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId {
    pub section: SectionId,
    pub slot: u16,
}

impl BlockId {
    pub fn new(section: SectionId, slot: u16) -> Self {
        Self { section, slot }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.section, self.slot)
    }
}
