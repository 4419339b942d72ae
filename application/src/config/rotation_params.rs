//! Rotation parameters: testimonial auto-advance.

use std::time::Duration;

/// Default auto-advance period
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(8000);

/// Testimonial auto-advance control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationParams {
    pub enabled: bool,
    pub interval: Duration,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: DEFAULT_ROTATION_INTERVAL,
        }
    }
}

impl RotationParams {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Whether a timer should run at all
    pub fn is_active(&self) -> bool {
        self.enabled && !self.interval.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RotationParams::default();
        assert!(params.is_active());
        assert_eq!(params.interval, Duration::from_millis(8000));
    }

    #[test]
    fn test_zero_interval_is_inactive() {
        let params = RotationParams::default().with_interval(Duration::ZERO);
        assert!(!params.is_active());
        assert!(!RotationParams::default().with_enabled(false).is_active());
    }
}
