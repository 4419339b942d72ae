//! Wrapping selector for the rotating testimonial

use crate::core::error::DomainError;

/// Active index into a fixed-size list that wraps on advance.
///
/// States are `0..len`, the initial state is 0 and there is no terminal
/// state. An empty list keeps index 0 and ignores every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSelector {
    len: usize,
    active: usize,
}

impl RotationSelector {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.active == index
    }

    /// Jump directly to `index`. Out-of-range indices leave the state as-is.
    pub fn set(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.len {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }

    /// `active = (active + 1) mod len`
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    /// `active = (active + len - 1) mod len`
    pub fn retreat(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_items_three_ticks() {
        let mut rotation = RotationSelector::new(2);
        let mut seen = vec![rotation.active()];
        for _ in 0..3 {
            seen.push(rotation.advance());
        }
        assert_eq!(seen, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_k_ticks_is_k_mod_n() {
        for n in 1..6 {
            let mut rotation = RotationSelector::new(n);
            for k in 1..20 {
                rotation.advance();
                assert_eq!(rotation.active(), k % n);
            }
        }
    }

    #[test]
    fn test_set_valid_and_invalid() {
        let mut rotation = RotationSelector::new(3);
        rotation.set(2).unwrap();
        assert_eq!(rotation.active(), 2);

        assert!(rotation.set(3).is_err());
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn test_retreat_wraps() {
        let mut rotation = RotationSelector::new(3);
        assert_eq!(rotation.retreat(), 2);
        assert_eq!(rotation.retreat(), 1);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut rotation = RotationSelector::new(0);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(rotation.retreat(), 0);
        assert!(rotation.set(0).is_err());
        assert!(!rotation.is_active(0));
    }
}
