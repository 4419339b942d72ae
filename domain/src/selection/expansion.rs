//! At-most-one expansion selector for a single card list

use crate::core::error::DomainError;

/// Which card of a fixed-size list is expanded, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionSelector {
    len: usize,
    expanded: Option<usize>,
}

impl ExpansionSelector {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is the expanded card, otherwise expand it
    /// (collapsing whichever card was open). Returns the new selection.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, DomainError> {
        if index >= self.len {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let selector = ExpansionSelector::new(4);
        assert_eq!(selector.expanded(), None);
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut selector = ExpansionSelector::new(4);
        assert_eq!(selector.toggle(1).unwrap(), Some(1));
        assert_eq!(selector.toggle(1).unwrap(), None);
    }

    #[test]
    fn test_toggle_other_replaces() {
        let mut selector = ExpansionSelector::new(4);
        selector.toggle(1).unwrap();
        selector.toggle(3).unwrap();
        assert!(selector.is_expanded(3));
        assert!(!selector.is_expanded(1));
    }

    #[test]
    fn test_work_list_scenario() {
        let mut selector = ExpansionSelector::new(4);
        selector.toggle(2).unwrap();
        selector.toggle(2).unwrap();
        assert_eq!(selector.expanded(), None);
        selector.toggle(0).unwrap();
        assert_eq!(selector.expanded(), Some(0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut selector = ExpansionSelector::new(2);
        selector.toggle(1).unwrap();
        let err = selector.toggle(2).unwrap_err();
        assert_eq!(err, DomainError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(selector.expanded(), Some(1));
    }
}
