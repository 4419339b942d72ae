//! Reveal parameters: how blocks fade in as they scroll into view.

use folio_domain::{RevealTransition, VisibilityThreshold};
use std::time::Duration;

/// Scroll-reveal behaviour.
///
/// With `enabled = false` every block is drawn revealed from the start, the
/// same as a host with no viewport observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealParams {
    pub enabled: bool,
    pub threshold: VisibilityThreshold,
    pub transition: RevealTransition,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: VisibilityThreshold::default(),
            transition: RevealTransition::default(),
        }
    }
}

impl RevealParams {
    // ==================== Builder Methods ====================

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_threshold(mut self, threshold: VisibilityThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_hidden_offset(mut self, offset: f32) -> Self {
        self.transition.hidden_offset = offset;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.transition.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RevealParams::default();
        assert!(params.enabled);
        assert_eq!(params.threshold.value(), 0.1);
        assert_eq!(params.transition.hidden_offset, 30.0);
        assert_eq!(params.transition.duration, Duration::from_millis(700));
    }

    #[test]
    fn test_builder() {
        let params = RevealParams::default()
            .with_enabled(false)
            .with_hidden_offset(12.0)
            .with_duration(Duration::from_millis(250));

        assert!(!params.enabled);
        assert_eq!(params.transition.hidden_offset, 12.0);
        assert_eq!(params.transition.duration, Duration::from_millis(250));
    }
}
