//! Terminal viewport observer
//!
//! Measures how much of each observed block sits inside the scrolled page
//! viewport. Rows stand in for pixels: a block ten rows tall with two rows on
//! screen is 20% visible.

use crate::tui::page::PageLayout;
use folio_application::{Intersection, ObserverError, ViewportObserver};
use folio_domain::{BlockId, visible_fraction};
use std::collections::BTreeSet;

/// Viewport observer for the scrolling page
#[derive(Debug, Default)]
pub struct TerminalViewport {
    observed: BTreeSet<BlockId>,
}

impl TerminalViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self, block: BlockId) -> bool {
        self.observed.contains(&block)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Intersections of every observed block present in `layout`, for a
    /// viewport of `view_height` rows scrolled to `scroll`
    pub fn measure(
        &self,
        layout: &PageLayout,
        scroll: usize,
        view_height: usize,
    ) -> Vec<Intersection> {
        layout
            .blocks()
            .iter()
            .filter(|block| self.observed.contains(&block.id))
            .map(|block| {
                let fraction = visible_fraction(block.top, block.height, scroll, view_height);
                Intersection::new(block.id, fraction)
            })
            .collect()
    }
}

impl ViewportObserver for TerminalViewport {
    fn observe(&mut self, block: BlockId) -> Result<(), ObserverError> {
        self.observed.insert(block);
        Ok(())
    }

    fn unobserve(&mut self, block: BlockId) {
        self.observed.remove(&block);
    }
}
