//! Testimonial rotation configuration from TOML (`[rotation]` section)

use folio_application::{DEFAULT_ROTATION_INTERVAL, RotationParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-advance settings
///
/// # Example
///
/// ```toml
/// [rotation]
/// enabled = true
/// interval_ms = 8000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRotationConfig {
    pub enabled: bool,
    /// Auto-advance period in milliseconds (must be non-zero)
    pub interval_ms: u64,
}

impl Default for FileRotationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_ROTATION_INTERVAL.as_millis() as u64,
        }
    }
}

impl FileRotationConfig {
    pub fn to_params(&self) -> RotationParams {
        RotationParams::default()
            .with_enabled(self.enabled)
            .with_interval(Duration::from_millis(self.interval_ms))
    }
}
