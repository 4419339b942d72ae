//! Testimonial auto-advance timer
//!
//! A tokio task that emits an [`AdvanceTick`] on a fixed period anchored to
//! the moment it was spawned. It never touches view state itself; the owning
//! event loop applies each tick. Manual selections do not shift the schedule.
//!
//! ```text
//! AutoAdvance::spawn ──> task: interval_at(start + period, period)
//!                              ├─ tick ──> tick_tx ──> event loop
//!                              └─ cancel.cancelled() ──> exit (drops tick_tx)
//! ```

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// One auto-advance tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTick {
    /// 1-based tick counter since the timer started
    pub seq: u64,
}

/// Running auto-advance timer. Cancelled exactly once, at the latest when
/// dropped.
pub struct AutoAdvance {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Start the timer. Must be called inside a tokio runtime.
    pub fn spawn(period: Duration) -> (Self, mpsc::UnboundedReceiver<AdvanceTick>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        // Anchor the schedule here, not at the task's first poll
        let first_tick = Instant::now() + period;
        let handle = tokio::spawn(run_timer(first_tick, period, tick_tx, cancel.clone()));
        debug!("Auto-advance started ({} ms)", period.as_millis());

        (
            Self {
                cancel,
                handle: Some(handle),
            },
            tick_rx,
        )
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stop the timer. Later calls are no-ops.
    pub fn cancel(&mut self) {
        if self.handle.take().is_some() {
            self.cancel.cancel();
            debug!("Auto-advance cancelled");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_timer(
    first_tick: Instant,
    period: Duration,
    tick_tx: mpsc::UnboundedSender<AdvanceTick>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval_at(first_tick, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut seq = 0u64;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                seq += 1;
                trace!("Auto-advance tick {}", seq);
                if tick_tx.send(AdvanceTick { seq }).is_err() {
                    // Receiver gone: the owning loop has shut down
                    break;
                }
            }
        }
    }
}
