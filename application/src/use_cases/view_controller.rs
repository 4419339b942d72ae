//! View State Controller
//!
//! Owns the page's independent selectors and the testimonial auto-advance
//! timer. Every mutation is synchronous and runs on the owning event loop;
//! the timer only delivers [`AdvanceTick`]s to that loop.

use crate::config::RotationParams;
use crate::use_cases::auto_advance::{AdvanceTick, AutoAdvance};
use folio_domain::{DomainError, ExpandableList, ListSizes, SectionId, ViewState};
use tokio::sync::mpsc;
use tracing::debug;

/// Request for the render layer to bring a section into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: SectionId,
}

/// Controller for menu, expansion and testimonial state.
///
/// The auto-advance timer (if any) lives exactly as long as the controller.
pub struct ViewStateController {
    state: ViewState,
    auto_advance: Option<AutoAdvance>,
}

impl ViewStateController {
    /// Create a controller and start auto-advance if `rotation` is active.
    ///
    /// Returns the tick receiver the owning loop must poll. Must be called
    /// inside a tokio runtime when rotation is active.
    pub fn start(
        sizes: ListSizes,
        rotation: RotationParams,
    ) -> (Self, Option<mpsc::UnboundedReceiver<AdvanceTick>>) {
        let mut controller = Self::without_timer(sizes);
        if !rotation.is_active() || sizes.testimonials == 0 {
            debug!("Auto-advance disabled");
            return (controller, None);
        }

        let (timer, ticks) = AutoAdvance::spawn(rotation.interval);
        controller.auto_advance = Some(timer);
        (controller, Some(ticks))
    }

    /// Controller with no auto-advance timer
    pub fn without_timer(sizes: ListSizes) -> Self {
        Self {
            state: ViewState::new(sizes),
            auto_advance: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_rotating(&self) -> bool {
        self.auto_advance
            .as_ref()
            .is_some_and(|timer| !timer.is_cancelled())
    }

    // ==================== Menu ====================

    pub fn toggle_mobile_menu(&mut self) -> bool {
        let open = self.state.toggle_menu();
        debug!("Menu {}", if open { "opened" } else { "closed" });
        open
    }

    /// Close the menu (always) and ask the render layer to scroll to `target`
    pub fn select_nav_target(&mut self, target: SectionId) -> ScrollRequest {
        let target = self.state.navigate(target);
        debug!("Navigate to {}", target);
        ScrollRequest { target }
    }

    /// [`select_nav_target`](Self::select_nav_target) by anchor name
    pub fn select_nav_anchor(&mut self, anchor: &str) -> Result<ScrollRequest, DomainError> {
        let target = anchor.parse::<SectionId>()?;
        Ok(self.select_nav_target(target))
    }

    // ==================== Expansion ====================

    pub fn toggle_expanded(
        &mut self,
        list: ExpandableList,
        index: usize,
    ) -> Result<Option<usize>, DomainError> {
        let expanded = self.state.toggle_expanded(list, index)?;
        debug!("Expanded {}: {:?}", list, expanded);
        Ok(expanded)
    }

    // ==================== Testimonials ====================

    /// Jump to a testimonial. Does not reset the auto-advance schedule.
    pub fn set_active_testimonial(&mut self, index: usize) -> Result<(), DomainError> {
        self.state.set_active_testimonial(index).inspect_err(|e| {
            debug!("Rejected testimonial selection: {}", e);
        })?;
        debug!("Active testimonial: {}", index);
        Ok(())
    }

    pub fn next_testimonial(&mut self) -> usize {
        self.state.advance_testimonial()
    }

    pub fn previous_testimonial(&mut self) -> usize {
        self.state.retreat_testimonial()
    }

    /// Apply one auto-advance tick
    pub fn on_tick(&mut self, tick: AdvanceTick) -> usize {
        let active = self.state.advance_testimonial();
        debug!("Auto-advance tick {} -> testimonial {}", tick.seq, active);
        active
    }

    // ==================== Lifecycle ====================

    /// Stop the auto-advance timer. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut timer) = self.auto_advance.take() {
            timer.cancel();
        }
    }
}

impl Drop for ViewStateController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn sizes(testimonials: usize) -> ListSizes {
        ListSizes {
            testimonials,
            work: 4,
            modules: 6,
        }
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut controller = ViewStateController::without_timer(sizes(2));
        assert!(controller.toggle_mobile_menu());
        assert!(!controller.toggle_mobile_menu());
    }

    #[test]
    fn test_select_nav_target_closes_menu() {
        let mut controller = ViewStateController::without_timer(sizes(2));
        controller.toggle_mobile_menu();

        let request = controller.select_nav_target(SectionId::Writing);
        assert_eq!(request.target, SectionId::Writing);
        assert!(!controller.state().is_menu_open());

        // Closed stays closed
        controller.select_nav_target(SectionId::Work);
        assert!(!controller.state().is_menu_open());
    }

    #[test]
    fn test_select_nav_anchor() {
        let mut controller = ViewStateController::without_timer(sizes(2));
        let request = controller.select_nav_anchor("contact").unwrap();
        assert_eq!(request.target, SectionId::Contact);
        assert!(controller.select_nav_anchor("nowhere").is_err());
    }

    #[test]
    fn test_toggle_expanded_scenario() {
        let mut controller = ViewStateController::without_timer(sizes(2));
        let work = ExpandableList::Work;

        assert_eq!(controller.toggle_expanded(work, 2).unwrap(), Some(2));
        assert_eq!(controller.toggle_expanded(work, 2).unwrap(), None);
        assert_eq!(controller.toggle_expanded(work, 0).unwrap(), Some(0));
        assert_eq!(controller.state().expanded(ExpandableList::Modules), None);
    }

    #[test]
    fn test_toggle_expanded_out_of_range() {
        let mut controller = ViewStateController::without_timer(sizes(2));
        assert!(controller.toggle_expanded(ExpandableList::Work, 4).is_err());
        assert_eq!(controller.state().expanded(ExpandableList::Work), None);
    }

    #[test]
    fn test_set_active_testimonial_bounds() {
        let mut controller = ViewStateController::without_timer(sizes(3));
        controller.set_active_testimonial(2).unwrap();
        assert_eq!(controller.state().active_testimonial(), 2);

        let err = controller.set_active_testimonial(3).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(controller.state().active_testimonial(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_sequence() {
        let (mut controller, ticks) =
            ViewStateController::start(sizes(2), RotationParams::default());
        let mut ticks = ticks.unwrap();

        let mut seen = vec![controller.state().active_testimonial()];
        for _ in 0..3 {
            let tick = ticks.recv().await.unwrap();
            seen.push(controller.on_tick(tick));
        }
        assert_eq!(seen, vec![0, 1, 0, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_k_ticks_is_k_mod_n() {
        let (mut controller, ticks) =
            ViewStateController::start(sizes(3), RotationParams::default());
        let mut ticks = ticks.unwrap();

        for k in 1..=7 {
            let tick = ticks.recv().await.unwrap();
            controller.on_tick(tick);
            assert_eq!(controller.state().active_testimonial(), k % 3);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_selection_does_not_reset_timer() {
        let start = Instant::now();
        let (mut controller, ticks) =
            ViewStateController::start(sizes(3), RotationParams::default());
        let mut ticks = ticks.unwrap();

        tokio::time::advance(Duration::from_millis(5000)).await;
        controller.set_active_testimonial(2).unwrap();
        assert_eq!(controller.state().active_testimonial(), 2);

        let tick = ticks.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(8000));
        assert_eq!(controller.on_tick(tick), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_ticks() {
        let (mut controller, ticks) =
            ViewStateController::start(sizes(2), RotationParams::default());
        let mut ticks = ticks.unwrap();
        assert!(controller.is_rotating());

        controller.shutdown();
        controller.shutdown();
        assert!(!controller.is_rotating());
        assert!(ticks.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (controller, ticks) = ViewStateController::start(sizes(2), RotationParams::default());
        let mut ticks = ticks.unwrap();
        drop(controller);
        assert!(ticks.recv().await.is_none());
    }

    #[test]
    fn test_no_testimonials_has_no_timer() {
        let (controller, ticks) = ViewStateController::start(sizes(0), RotationParams::default());
        assert!(ticks.is_none());
        assert!(!controller.is_rotating());
    }
}
