//! Animation parameters derived from a reveal latch

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opacity and downward offset of a block at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    /// 0.0 (invisible) ..= 1.0 (opaque)
    pub opacity: f32,
    /// Downward displacement in layout units; 0.0 when settled
    pub offset: f32,
}

impl RevealMotion {
    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Shape of the fade-and-rise transition every block uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTransition {
    /// Offset of a hidden block
    pub hidden_offset: f32,
    /// Length of the transition once the delay has elapsed
    #[serde(with = "millis")]
    pub duration: Duration,
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self {
            hidden_offset: 30.0,
            duration: Duration::from_millis(700),
        }
    }
}

impl RevealTransition {
    /// End-state parameters for a latch value
    pub fn target(&self, revealed: bool) -> RevealMotion {
        if revealed {
            RevealMotion {
                opacity: 1.0,
                offset: 0.0,
            }
        } else {
            RevealMotion {
                opacity: 0.0,
                offset: self.hidden_offset,
            }
        }
    }

    /// Parameters `since_reveal` after the latch flipped, honouring the
    /// block's stagger `delay`. `None` means the block is still hidden.
    pub fn sample(&self, since_reveal: Option<Duration>, delay: Duration) -> RevealMotion {
        let Some(elapsed) = since_reveal else {
            return self.target(false);
        };
        let Some(running) = elapsed.checked_sub(delay) else {
            return self.target(false);
        };
        if self.duration.is_zero() || running >= self.duration {
            return self.target(true);
        }

        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        RevealMotion {
            opacity: eased,
            offset: self.hidden_offset * (1.0 - eased),
        }
    }

    /// Whether the transition has finished and the block can be drawn static
    pub fn is_settled(&self, since_reveal: Option<Duration>, delay: Duration) -> bool {
        since_reveal.is_some_and(|elapsed| elapsed >= delay + self.duration)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_params() {
        let transition = RevealTransition::default();
        assert_eq!(
            transition.target(false),
            RevealMotion {
                opacity: 0.0,
                offset: 30.0
            }
        );
        assert_eq!(
            transition.target(true),
            RevealMotion {
                opacity: 1.0,
                offset: 0.0
            }
        );
    }

    #[test]
    fn test_sample_waits_for_delay() {
        let transition = RevealTransition::default();
        let delay = Duration::from_millis(300);

        let before = transition.sample(Some(Duration::from_millis(200)), delay);
        assert!(before.is_hidden());

        let hidden = transition.sample(None, Duration::ZERO);
        assert!(hidden.is_hidden());
        assert_eq!(hidden.offset, 30.0);
    }

    #[test]
    fn test_sample_progresses_monotonically() {
        let transition = RevealTransition::default();
        let mut last = transition.sample(Some(Duration::ZERO), Duration::ZERO);
        for ms in (50..=700).step_by(50) {
            let next = transition.sample(Some(Duration::from_millis(ms)), Duration::ZERO);
            assert!(next.opacity >= last.opacity);
            assert!(next.offset <= last.offset);
            last = next;
        }
        assert_eq!(last, transition.target(true));
    }

    #[test]
    fn test_is_settled() {
        let transition = RevealTransition::default();
        let delay = Duration::from_millis(100);
        assert!(!transition.is_settled(None, delay));
        assert!(!transition.is_settled(Some(Duration::from_millis(700)), delay));
        assert!(transition.is_settled(Some(Duration::from_millis(800)), delay));
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let transition = RevealTransition {
            hidden_offset: 30.0,
            duration: Duration::ZERO,
        };
        let motion = transition.sample(Some(Duration::ZERO), Duration::ZERO);
        assert_eq!(motion.opacity, 1.0);
    }
}
