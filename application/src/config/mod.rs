//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RevealParams`]: scroll-reveal threshold and transition
//! - [`RotationParams`]: testimonial auto-advance period
//! - [`FolioConfig`]: container handed to the presentation layer

pub mod reveal_params;
pub mod rotation_params;

pub use reveal_params::RevealParams;
pub use rotation_params::{DEFAULT_ROTATION_INTERVAL, RotationParams};

/// Runtime configuration for one page session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolioConfig {
    pub reveal: RevealParams,
    pub rotation: RotationParams,
}

impl FolioConfig {
    pub fn new(reveal: RevealParams, rotation: RotationParams) -> Self {
        Self { reveal, rotation }
    }
}
