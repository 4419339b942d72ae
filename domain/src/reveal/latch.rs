//! One-way reveal latch

use super::threshold::VisibilityThreshold;

/// Hidden → shown flag owned by a single content block.
///
/// Once revealed the latch never returns to hidden; there is no API that
/// clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A latch that starts revealed, for blocks that cannot be observed
    pub fn already_revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection measurement. Returns `true` only on the
    /// hidden → shown transition.
    pub fn observe(&mut self, fraction: f32, threshold: VisibilityThreshold) -> bool {
        if self.revealed || !threshold.is_met(fraction) {
            return false;
        }
        self.revealed = true;
        true
    }
}
