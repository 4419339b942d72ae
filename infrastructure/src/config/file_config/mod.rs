//! Raw TOML configuration data types
//!
//! These structs mirror the config file exactly. Conversion into the
//! application's runtime params happens in [`FileConfig::to_folio_config`].

mod reveal;
mod rotation;
mod sources;
mod tui;

pub use reveal::FileRevealConfig;
pub use rotation::FileRotationConfig;
pub use sources::{FileContentConfig, FilePhotoConfig};
pub use tui::FileTuiConfig;

use folio_application::FolioConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found by [`FileConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("reveal.threshold must be within 0.0..=1.0 (got {0})")]
    InvalidThreshold(f32),

    #[error("reveal.offset cannot be negative (got {0})")]
    NegativeOffset(f32),

    #[error("rotation.interval_ms cannot be 0")]
    ZeroInterval,

    #[error("tui.tick_ms cannot be 0")]
    ZeroTick,

    #[error("{field} cannot be an empty path")]
    EmptyPath { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Content document location
    pub content: FileContentConfig,
    /// Profile photograph location
    pub photo: FilePhotoConfig,
    /// Scroll-reveal settings
    pub reveal: FileRevealConfig,
    /// Testimonial auto-advance settings
    pub rotation: FileRotationConfig,
    /// Terminal UI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            issues.push(ConfigValidationError::InvalidThreshold(
                self.reveal.threshold,
            ));
        }
        if self.reveal.offset < 0.0 {
            issues.push(ConfigValidationError::NegativeOffset(self.reveal.offset));
        }
        if self.rotation.interval_ms == 0 {
            issues.push(ConfigValidationError::ZeroInterval);
        }
        if self.tui.tick_ms == 0 {
            issues.push(ConfigValidationError::ZeroTick);
        }

        let paths = [
            ("content.path", &self.content.path),
            ("photo.path", &self.photo.path),
            ("tui.log_file", &self.tui.log_file),
        ];
        for (field, path) in paths {
            if path.as_deref().is_some_and(|p| p.trim().is_empty()) {
                issues.push(ConfigValidationError::EmptyPath { field });
            }
        }

        issues
    }

    /// Runtime params for the application layer
    pub fn to_folio_config(&self) -> FolioConfig {
        FolioConfig::new(self.reveal.to_params(), self.rotation.to_params())
    }
}
