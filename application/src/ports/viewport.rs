//! Viewport observation port
//!
//! Defines the capability the visibility tracker needs from the host:
//! start watching a block, stop watching it. Intersection measurements are
//! delivered back to the tracker by the host's event loop as [`Intersection`]
//! values.

use folio_domain::BlockId;
use thiserror::Error;

/// Errors from a viewport observer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Viewport observation is not available")]
    Unavailable,
}

/// One intersection measurement for an observed block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub block: BlockId,
    /// Fraction of the block inside the viewport, 0.0 ..= 1.0
    pub fraction: f32,
}

impl Intersection {
    pub fn new(block: BlockId, fraction: f32) -> Self {
        Self {
            block,
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

/// Host capability for watching blocks enter the viewport.
///
/// Implementations live in the presentation layer. Every successful
/// `observe` is paired with exactly one `unobserve` by the tracker.
pub trait ViewportObserver {
    /// Begin observing a block
    fn observe(&mut self, block: BlockId) -> Result<(), ObserverError>;

    /// Stop observing a block
    fn unobserve(&mut self, block: BlockId);
}

/// Observer for hosts without viewport measurement.
///
/// Every `observe` fails, so the tracker reveals blocks immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableObserver;

impl ViewportObserver for UnavailableObserver {
    fn observe(&mut self, _block: BlockId) -> Result<(), ObserverError> {
        Err(ObserverError::Unavailable)
    }

    fn unobserve(&mut self, _block: BlockId) {}
}
