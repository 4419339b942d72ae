//! Visibility Tracker
//!
//! Owns the reveal latch of every mounted block and pairs each block's
//! observation with exactly one release. The host feeds intersection
//! measurements in; the render layer reads latches and motion parameters out.

use crate::config::RevealParams;
use crate::ports::viewport::{Intersection, ViewportObserver};
use folio_domain::{BlockId, RevealLatch, RevealMotion};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Per-block tracking record
#[derive(Debug, Clone)]
struct TrackedBlock {
    latch: RevealLatch,
    /// Stagger before the transition starts
    delay: Duration,
    /// Whether an observation is held and must be released
    observing: bool,
    revealed_at: Option<Instant>,
}

/// Tracks reveal latches for mounted blocks.
///
/// Observations are released on [`unmount`](Self::unmount) and, for every
/// block still mounted, when the tracker is dropped.
pub struct VisibilityTracker<O: ViewportObserver> {
    observer: O,
    params: RevealParams,
    blocks: BTreeMap<BlockId, TrackedBlock>,
}

impl<O: ViewportObserver> VisibilityTracker<O> {
    pub fn new(observer: O, params: RevealParams) -> Self {
        Self {
            observer,
            params,
            blocks: BTreeMap::new(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mount a block and start observing it.
    ///
    /// When reveal is disabled or the observer cannot observe, the block is
    /// revealed immediately instead. Mounting an already-mounted block is a
    /// no-op. Returns whether the block is revealed.
    pub fn mount(&mut self, block: BlockId, delay: Duration) -> bool {
        if let Some(existing) = self.blocks.get(&block) {
            return existing.latch.is_revealed();
        }

        let observed = if self.params.enabled {
            match self.observer.observe(block) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Observation unavailable for {}: {}, revealing", block, e);
                    false
                }
            }
        } else {
            false
        };

        let tracked = if observed {
            TrackedBlock {
                latch: RevealLatch::new(),
                delay,
                observing: true,
                revealed_at: None,
            }
        } else {
            // Drawn settled from the start, no transition
            TrackedBlock {
                latch: RevealLatch::already_revealed(),
                delay,
                observing: false,
                revealed_at: None,
            }
        };

        trace!("Mounted {} (observing: {})", block, tracked.observing);
        let revealed = tracked.latch.is_revealed();
        self.blocks.insert(block, tracked);
        revealed
    }

    /// Unmount a block, releasing its observation if one is held.
    ///
    /// Safe to call before any intersection arrived and for blocks that were
    /// never mounted.
    pub fn unmount(&mut self, block: BlockId) {
        if let Some(tracked) = self.blocks.remove(&block)
            && tracked.observing
        {
            self.observer.unobserve(block);
            trace!("Released observation of {}", block);
        }
    }

    /// Deliver intersection measurements. Returns the blocks that revealed
    /// as a result, in delivery order.
    pub fn deliver<I>(&mut self, entries: I, now: Instant) -> Vec<BlockId>
    where
        I: IntoIterator<Item = Intersection>,
    {
        let threshold = self.params.threshold;
        let mut revealed = Vec::new();

        for entry in entries {
            let Some(tracked) = self.blocks.get_mut(&entry.block) else {
                continue;
            };
            if tracked.latch.observe(entry.fraction, threshold) {
                tracked.revealed_at = Some(now);
                debug!("Revealed {} at {:.2} visible", entry.block, entry.fraction);
                revealed.push(entry.block);
            }
        }

        revealed
    }

    pub fn is_mounted(&self, block: BlockId) -> bool {
        self.blocks.contains_key(&block)
    }

    /// Latch value; unmounted blocks read as hidden
    pub fn is_revealed(&self, block: BlockId) -> bool {
        self.blocks
            .get(&block)
            .is_some_and(|tracked| tracked.latch.is_revealed())
    }

    pub fn mounted_count(&self) -> usize {
        self.blocks.len()
    }

    /// Mounted blocks in id order
    pub fn mounted_blocks(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.keys().copied()
    }

    /// Motion parameters for a block at `now`
    pub fn motion(&self, block: BlockId, now: Instant) -> RevealMotion {
        let transition = &self.params.transition;
        match self.blocks.get(&block) {
            Some(tracked) => match tracked.revealed_at {
                Some(at) => {
                    transition.sample(Some(now.saturating_duration_since(at)), tracked.delay)
                }
                None => transition.target(tracked.latch.is_revealed()),
            },
            None => transition.target(false),
        }
    }

    /// Whether any revealed block is still mid-transition at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        let transition = &self.params.transition;
        self.blocks.values().any(|tracked| {
            tracked.revealed_at.is_some_and(|at| {
                let since = now.saturating_duration_since(at);
                !transition.is_settled(Some(since), tracked.delay)
            })
        })
    }

    /// Unmount every block
    pub fn clear(&mut self) {
        let ids: Vec<BlockId> = self.blocks.keys().copied().collect();
        for id in ids {
            self.unmount(id);
        }
    }
}

impl<O: ViewportObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::viewport::{ObserverError, UnavailableObserver};
    use folio_domain::SectionId;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observer that records every observe/unobserve call
    #[derive(Default, Clone)]
    struct RecordingObserver {
        log: Rc<RefCell<Vec<(BlockId, bool)>>>,
    }

    impl RecordingObserver {
        fn observed(&self, block: BlockId) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|(b, on)| *b == block && *on)
                .count()
        }

        fn released(&self, block: BlockId) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|(b, on)| *b == block && !*on)
                .count()
        }
    }

    impl ViewportObserver for RecordingObserver {
        fn observe(&mut self, block: BlockId) -> Result<(), ObserverError> {
            self.log.borrow_mut().push((block, true));
            Ok(())
        }

        fn unobserve(&mut self, block: BlockId) {
            self.log.borrow_mut().push((block, false));
        }
    }

    fn block(slot: u16) -> BlockId {
        BlockId::new(SectionId::Work, slot)
    }

    #[test]
    fn test_mount_starts_hidden_and_observed() {
        let observer = RecordingObserver::default();
        let mut tracker = VisibilityTracker::new(observer.clone(), RevealParams::default());

        assert!(!tracker.mount(block(0), Duration::ZERO));
        assert!(!tracker.is_revealed(block(0)));
        assert_eq!(observer.observed(block(0)), 1);
    }

    #[test]
    fn test_reveal_is_permanent() {
        let mut tracker =
            VisibilityTracker::new(RecordingObserver::default(), RevealParams::default());
        let now = Instant::now();
        tracker.mount(block(0), Duration::ZERO);

        let revealed = tracker.deliver([Intersection::new(block(0), 0.05)], now);
        assert!(revealed.is_empty());
        assert!(!tracker.is_revealed(block(0)));

        let revealed = tracker.deliver([Intersection::new(block(0), 0.1)], now);
        assert_eq!(revealed, vec![block(0)]);

        // Scrolling away never hides it
        let revealed = tracker.deliver([Intersection::new(block(0), 0.0)], now);
        assert!(revealed.is_empty());
        assert!(tracker.is_revealed(block(0)));
    }

    #[test]
    fn test_unmount_before_intersection_releases_once() {
        let observer = RecordingObserver::default();
        let mut tracker = VisibilityTracker::new(observer.clone(), RevealParams::default());
        tracker.mount(block(1), Duration::ZERO);

        tracker.unmount(block(1));
        tracker.unmount(block(1));
        drop(tracker);

        assert_eq!(observer.observed(block(1)), 1);
        assert_eq!(observer.released(block(1)), 1);
    }

    #[test]
    fn test_unmounted_block_stays_hidden() {
        let mut tracker =
            VisibilityTracker::new(RecordingObserver::default(), RevealParams::default());
        let now = Instant::now();
        tracker.mount(block(2), Duration::ZERO);
        tracker.unmount(block(2));

        // A late measurement for an unmounted block is ignored
        let revealed = tracker.deliver([Intersection::new(block(2), 1.0)], now);
        assert!(revealed.is_empty());
        assert!(!tracker.is_revealed(block(2)));
    }

    #[test]
    fn test_drop_releases_every_mounted_block() {
        let observer = RecordingObserver::default();
        {
            let mut tracker = VisibilityTracker::new(observer.clone(), RevealParams::default());
            let now = Instant::now();
            for slot in 0..3 {
                tracker.mount(block(slot), Duration::ZERO);
            }
            tracker.deliver([Intersection::new(block(0), 1.0)], now);
        }
        for slot in 0..3 {
            assert_eq!(observer.released(block(slot)), 1);
        }
    }

    #[test]
    fn test_unavailable_observer_reveals_immediately() {
        let mut tracker = VisibilityTracker::new(UnavailableObserver, RevealParams::default());
        assert!(tracker.mount(block(0), Duration::ZERO));
        assert!(tracker.is_revealed(block(0)));
    }

    #[test]
    fn test_unobserved_block_is_drawn_settled() {
        let mut tracker = VisibilityTracker::new(UnavailableObserver, RevealParams::default());
        let now = Instant::now();
        tracker.mount(block(0), Duration::from_millis(300));

        let motion = tracker.motion(block(0), now);
        assert_eq!(motion.opacity, 1.0);
        assert_eq!(motion.offset, 0.0);
        assert!(!tracker.is_animating(now));
    }

    #[test]
    fn test_disabled_reveal_skips_observation() {
        let observer = RecordingObserver::default();
        let params = RevealParams::default().with_enabled(false);
        let mut tracker = VisibilityTracker::new(observer.clone(), params);

        assert!(tracker.mount(block(0), Duration::ZERO));
        tracker.unmount(block(0));
        assert_eq!(observer.observed(block(0)), 0);
        assert_eq!(observer.released(block(0)), 0);
    }

    #[test]
    fn test_remount_is_noop() {
        let observer = RecordingObserver::default();
        let mut tracker = VisibilityTracker::new(observer.clone(), RevealParams::default());
        tracker.mount(block(0), Duration::ZERO);
        tracker.mount(block(0), Duration::ZERO);
        assert_eq!(observer.observed(block(0)), 1);
        assert_eq!(tracker.mounted_count(), 1);
    }

    #[test]
    fn test_motion_follows_latch_and_delay() {
        let mut tracker =
            VisibilityTracker::new(RecordingObserver::default(), RevealParams::default());
        let start = Instant::now();
        let delay = Duration::from_millis(200);
        tracker.mount(block(0), delay);

        let hidden = tracker.motion(block(0), start);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset, 30.0);

        tracker.deliver([Intersection::new(block(0), 0.5)], start);
        assert!(tracker.motion(block(0), start + Duration::from_millis(100)).is_hidden());
        assert!(tracker.is_animating(start + Duration::from_millis(500)));

        let settled = tracker.motion(block(0), start + Duration::from_millis(900));
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.offset, 0.0);
        assert!(!tracker.is_animating(start + Duration::from_millis(900)));
    }
}
