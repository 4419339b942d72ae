//! Reveal configuration from TOML (`[reveal]` section)

use folio_application::RevealParams;
use folio_domain::{RevealTransition, VisibilityThreshold};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scroll-reveal settings
///
/// # Example
///
/// ```toml
/// [reveal]
/// enabled = true
/// threshold = 0.1
/// offset = 30.0
/// duration_ms = 700
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRevealConfig {
    /// Disable to draw every block revealed from the start
    pub enabled: bool,
    /// Visible fraction that triggers the reveal (0.0..=1.0)
    pub threshold: f32,
    /// Offset of a hidden block, in layout units
    pub offset: f32,
    /// Transition length in milliseconds
    pub duration_ms: u64,
}

impl Default for FileRevealConfig {
    fn default() -> Self {
        let transition = RevealTransition::default();
        Self {
            enabled: true,
            threshold: VisibilityThreshold::DEFAULT.value(),
            offset: transition.hidden_offset,
            duration_ms: transition.duration.as_millis() as u64,
        }
    }
}

impl FileRevealConfig {
    /// Convert to application params. An invalid threshold falls back to the
    /// default; `FileConfig::validate` reports it separately.
    pub fn to_params(&self) -> RevealParams {
        let threshold = VisibilityThreshold::new(self.threshold).unwrap_or_default();
        RevealParams::default()
            .with_enabled(self.enabled)
            .with_threshold(threshold)
            .with_hidden_offset(self.offset.max(0.0))
            .with_duration(Duration::from_millis(self.duration_ms))
    }
}
