//! Visibility threshold and visible-fraction geometry

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Fraction of a block that must be inside the viewport before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    pub const DEFAULT: VisibilityThreshold = VisibilityThreshold(0.1);

    pub fn new(value: f32) -> Result<Self, DomainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Whether a visible fraction satisfies the threshold.
    ///
    /// A zero threshold still requires some overlap: a block entirely
    /// outside the viewport has fraction 0 and never qualifies.
    pub fn is_met(&self, fraction: f32) -> bool {
        if self.0 == 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.0
        }
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for VisibilityThreshold {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VisibilityThreshold> for f32 {
    fn from(threshold: VisibilityThreshold) -> Self {
        threshold.0
    }
}

/// Fraction of a vertical span `[start, start + len)` that lies inside the
/// viewport `[view_start, view_start + view_len)`.
///
/// Zero-length spans count as fully visible when they sit inside the viewport.
pub fn visible_fraction(start: usize, len: usize, view_start: usize, view_len: usize) -> f32 {
    let view_end = view_start.saturating_add(view_len);
    if len == 0 {
        return if start >= view_start && start < view_end {
            1.0
        } else {
            0.0
        };
    }

    let end = start.saturating_add(len);
    let overlap = end.min(view_end).saturating_sub(start.max(view_start));
    overlap as f32 / len as f32
}
