//! Scroll-triggered reveal.
//!
//! A block starts hidden and latches to revealed the first time enough of it
//! is inside the viewport. The latch drives a fade-and-rise transition.

pub mod block;
pub mod latch;
pub mod motion;
pub mod threshold;

pub use block::BlockId;
pub use latch::RevealLatch;
pub use motion::{RevealMotion, RevealTransition};
pub use threshold::{VisibilityThreshold, visible_fraction};
