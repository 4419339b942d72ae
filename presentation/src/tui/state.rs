//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Owns the view
//! state controller, the visibility tracker and the current page layout.
//! Every method runs on the app's select! loop.

use super::mode::{Action, Mode};
use super::page::{BlockTarget, Focus, PageLayout};
use super::viewport::TerminalViewport;
use folio_application::{
    AdvanceTick, LoadedPage, RevealParams, ViewStateController, VisibilityTracker,
};
use folio_domain::{BlockId, ExpandableList, RevealMotion, SectionId, ViewState};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Central TUI state, owned by the TuiApp select! loop
pub struct TuiState {
    page: LoadedPage,
    controller: ViewStateController,
    tracker: VisibilityTracker<TerminalViewport>,
    layout: PageLayout,

    // -- Geometry --
    width: u16,
    view_height: usize,
    scroll: usize,

    // -- Interaction --
    focus: Option<Focus>,
    menu_cursor: usize,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    /// Build state for a page column `width` wide and `view_height` rows tall
    pub fn new(
        page: LoadedPage,
        controller: ViewStateController,
        reveal: RevealParams,
        width: u16,
        view_height: u16,
        now: Instant,
    ) -> Self {
        let mut state = Self {
            page,
            controller,
            tracker: VisibilityTracker::new(TerminalViewport::new(), reveal),
            layout: PageLayout::default(),
            width,
            view_height: view_height as usize,
            scroll: 0,
            focus: None,
            menu_cursor: 0,
            show_help: false,
            flash_message: None,
            should_quit: false,
        };
        state.rebuild(now);
        state
    }

    // ==================== Accessors ====================

    pub fn page(&self) -> &LoadedPage {
        &self.page
    }

    pub fn view(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn view_height(&self) -> usize {
        self.view_height
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn is_rotating(&self) -> bool {
        self.controller.is_rotating()
    }

    pub fn mode(&self) -> Mode {
        if self.show_help {
            Mode::Help
        } else if self.view().is_menu_open() {
            Mode::Menu
        } else {
            Mode::Browse
        }
    }

    /// Section at the top of the viewport
    pub fn current_section(&self) -> Option<SectionId> {
        self.layout.section_at(self.scroll)
    }

    /// Scroll position as a percentage of the scrollable range
    pub fn scroll_percent(&self) -> u16 {
        let max = self.layout.max_scroll(self.view_height);
        if max == 0 {
            100
        } else {
            (self.scroll * 100 / max) as u16
        }
    }

    pub fn is_revealed(&self, block: BlockId) -> bool {
        self.tracker.is_revealed(block)
    }

    /// Reveal motion of a block; non-animated blocks are always settled
    pub fn motion(&self, block: BlockId, now: Instant) -> RevealMotion {
        match self.layout.get(block) {
            Some(positioned) if !positioned.animated => RevealMotion {
                opacity: 1.0,
                offset: 0.0,
            },
            _ => self.tracker.motion(block, now),
        }
    }

    /// Whether a reveal transition is still running
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tracker.is_animating(now)
    }

    // ==================== Layout ====================

    pub fn resize(&mut self, width: u16, view_height: u16, now: Instant) {
        if self.width == width && self.view_height == view_height as usize {
            return;
        }
        self.width = width;
        self.view_height = view_height as usize;
        self.rebuild(now);
    }

    /// Re-lay the page out, reconcile mounted blocks and re-measure
    fn rebuild(&mut self, now: Instant) {
        self.layout =
            PageLayout::build(&self.page, self.controller.state(), self.focus, self.width);

        let present: BTreeSet<BlockId> = self
            .layout
            .blocks()
            .iter()
            .filter(|block| block.animated)
            .map(|block| block.id)
            .collect();
        let stale: Vec<BlockId> = self
            .tracker
            .mounted_blocks()
            .filter(|id| !present.contains(id))
            .collect();
        for id in stale {
            self.tracker.unmount(id);
        }
        for block in self.layout.blocks().iter().filter(|block| block.animated) {
            self.tracker.mount(block.id, block.delay);
        }

        self.scroll = self.scroll.min(self.layout.max_scroll(self.view_height));
        self.refresh_visibility(now);
    }

    /// Feed the current viewport geometry to the tracker
    fn refresh_visibility(&mut self, now: Instant) {
        let entries = self
            .tracker
            .observer()
            .measure(&self.layout, self.scroll, self.view_height);
        let revealed = self.tracker.deliver(entries, now);
        if !revealed.is_empty() {
            debug!("{} block(s) revealed", revealed.len());
        }
    }

    // ==================== Scrolling ====================

    pub fn scroll_to(&mut self, row: usize, now: Instant) {
        let row = row.min(self.layout.max_scroll(self.view_height));
        if row != self.scroll {
            self.scroll = row;
            self.refresh_visibility(now);
        }
    }

    pub fn scroll_by(&mut self, delta: isize, now: Instant) {
        let row = self.scroll.saturating_add_signed(delta);
        self.scroll_to(row, now);
    }

    fn page_step(&self) -> isize {
        self.view_height.saturating_sub(2).max(1) as isize
    }

    /// Scroll just enough to bring a block fully into view (top first)
    fn reveal_block(&mut self, block: BlockId, now: Instant) {
        let Some(positioned) = self.layout.get(block) else {
            return;
        };
        let (top, bottom) = (positioned.top, positioned.bottom());
        if top < self.scroll {
            self.scroll_to(top, now);
        } else if bottom > self.scroll + self.view_height {
            let row = bottom.saturating_sub(self.view_height).min(top);
            self.scroll_to(row, now);
        }
    }

    // ==================== Actions ====================

    /// Apply a user action
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::ScrollUp => self.scroll_by(-1, now),
            Action::ScrollDown => self.scroll_by(1, now),
            Action::PageUp => self.scroll_by(-self.page_step(), now),
            Action::PageDown => self.scroll_by(self.page_step(), now),
            Action::ScrollTop => self.scroll_to(0, now),
            Action::ScrollBottom => self.scroll_to(usize::MAX, now),
            Action::FocusNext => self.move_focus(true, now),
            Action::FocusPrev => self.move_focus(false, now),
            Action::ToggleFocused => {
                if let Some(focus) = self.focus {
                    self.toggle_card(focus, now);
                }
            }
            Action::NextTestimonial => {
                self.controller.next_testimonial();
                self.rebuild(now);
            }
            Action::PrevTestimonial => {
                self.controller.previous_testimonial();
                self.rebuild(now);
            }
            Action::ToggleMenu => {
                if self.controller.toggle_mobile_menu() {
                    self.menu_cursor = 0;
                }
            }
            Action::MenuNext => {
                self.menu_cursor = (self.menu_cursor + 1) % SectionId::NAV_TARGETS.len();
            }
            Action::MenuPrev => {
                let len = SectionId::NAV_TARGETS.len();
                self.menu_cursor = (self.menu_cursor + len - 1) % len;
            }
            Action::MenuSelect => {
                if let Some(&target) = SectionId::NAV_TARGETS.get(self.menu_cursor) {
                    self.navigate(target, now);
                }
            }
            Action::Navigate(target) => self.navigate(target, now),
            Action::ShowHelp => self.show_help = true,
            Action::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else if self.view().is_menu_open() {
                    self.controller.toggle_mobile_menu();
                } else {
                    self.focus = None;
                    self.rebuild(now);
                }
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Select a navigation target: closes the menu and scrolls to it
    pub fn navigate(&mut self, target: SectionId, now: Instant) {
        let request = self.controller.select_nav_target(target);
        match self.layout.section_top(request.target) {
            Some(row) => self.scroll_to(row, now),
            None => self.flash(format!("{} is empty", request.target.label())),
        }
    }

    /// Apply an auto-advance tick
    pub fn on_rotation_tick(&mut self, tick: AdvanceTick, now: Instant) {
        self.controller.on_tick(tick);
        self.rebuild(now);
    }

    fn toggle_card(&mut self, card: Focus, now: Instant) {
        match self.controller.toggle_expanded(card.list, card.index) {
            Ok(_) => {
                self.focus = Some(card);
                self.rebuild(now);
                if let Some(block) = self.layout.card(card).map(|b| b.id) {
                    self.reveal_block(block, now);
                }
            }
            Err(e) => self.flash(e.to_string()),
        }
    }

    /// Cards in focus order: work items, then approach modules
    fn cards(&self) -> Vec<Focus> {
        let sizes = self.page.content.list_sizes();
        [ExpandableList::Work, ExpandableList::Modules]
            .into_iter()
            .flat_map(|list| (0..sizes.of(list)).map(move |index| Focus::new(list, index)))
            .collect()
    }

    fn move_focus(&mut self, forward: bool, now: Instant) {
        let cards = self.cards();
        if cards.is_empty() {
            return;
        }
        let position = self
            .focus
            .and_then(|focus| cards.iter().position(|card| *card == focus));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => cards.len() - 1,
            (Some(i), true) => (i + 1) % cards.len(),
            (Some(i), false) => (i + cards.len() - 1) % cards.len(),
        };

        self.focus = Some(cards[next]);
        self.rebuild(now);
        if let Some(block) = self.layout.card(cards[next]).map(|b| b.id) {
            self.reveal_block(block, now);
        }
    }

    // ==================== Mouse ====================

    /// Handle a click at `column` (relative to the content column) on
    /// viewport row `row`
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let page_row = self.scroll + row as usize;
        let Some(block) = self.layout.block_at(page_row) else {
            return;
        };
        match block.target {
            Some(BlockTarget::Card(card)) => self.toggle_card(card, now),
            Some(BlockTarget::Testimonials { count, per_row }) => {
                let dots_top = block.bottom().saturating_sub(count.div_ceil(per_row));
                let slot = column as usize / 2;
                if page_row < dots_top || slot >= per_row {
                    return;
                }
                let index = (page_row - dots_top) * per_row + slot;
                if index < count && self.controller.set_active_testimonial(index).is_ok() {
                    self.rebuild(now);
                }
            }
            None => {}
        }
    }

    // ==================== Flash ====================

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }

    // ==================== Lifecycle ====================

    /// Stop the rotation timer and release every observation
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
        self.tracker.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{ApproachModule, PortfolioContent, Portrait, Testimonial, WorkItem};

    fn work_item(n: usize) -> WorkItem {
        WorkItem {
            number: format!("0{}", n + 1),
            category: "Category".to_string(),
            title: format!("Project {}", n),
            summary: "A summary long enough to wrap onto a second row at narrow widths."
                .to_string(),
            executive: "Executive".to_string(),
            technical: "Technical".to_string(),
            rationale: "Rationale".to_string(),
            impact: vec![],
            link: None,
        }
    }

    fn module(n: usize) -> ApproachModule {
        ApproachModule {
            title: format!("Module {}", n),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
            executive: "Executive".to_string(),
            technical: "Technical".to_string(),
            rationale: "Why".to_string(),
        }
    }

    fn page() -> LoadedPage {
        let mut content = PortfolioContent::default();
        content.profile.name = "Ada Lovelace".to_string();
        content.profile.copyright = "© Ada".to_string();
        content.hero.headline = "Headline".to_string();
        content.testimonials = (0..3)
            .map(|i| Testimonial {
                quote: format!("Quote {}", i),
                name: "Name".to_string(),
                title: "Title".to_string(),
            })
            .collect();
        content.work.heading.title = "Work".to_string();
        content.work.items = (0..4).map(work_item).collect();
        content.approach.heading.title = "Approach".to_string();
        content.approach.modules = (0..6).map(module).collect();
        content.about.heading.title = "About".to_string();
        content.about.paragraphs = vec!["Paragraph".to_string(); 3];
        content.contact.heading.title = "Contact".to_string();
        LoadedPage {
            content,
            portrait: Portrait::placeholder("Ada Lovelace"),
        }
    }

    fn state(view_height: u16) -> TuiState {
        state_with_width(60, view_height)
    }

    fn state_with_width(width: u16, view_height: u16) -> TuiState {
        let page = page();
        let controller = ViewStateController::without_timer(page.content.list_sizes());
        TuiState::new(
            page,
            controller,
            RevealParams::default(),
            width,
            view_height,
            Instant::now(),
        )
    }

    #[test]
    fn test_top_blocks_reveal_on_start() {
        let state = state(20);
        let portrait = BlockId::new(SectionId::Hero, 0);
        assert!(state.is_revealed(portrait));

        let contact = BlockId::new(SectionId::Contact, 0);
        assert!(!state.is_revealed(contact));
    }

    #[test]
    fn test_scrolling_reveals_and_never_hides() {
        let mut state = state(20);
        let now = Instant::now();
        let contact = BlockId::new(SectionId::Contact, 0);

        state.apply(Action::ScrollBottom, now);
        assert!(state.is_revealed(contact));

        state.apply(Action::ScrollTop, now);
        assert_eq!(state.scroll(), 0);
        assert!(state.is_revealed(contact));
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::ToggleMenu, now);
        assert_eq!(state.mode(), Mode::Menu);

        state.apply(Action::Navigate(SectionId::Approach), now);
        assert_eq!(state.mode(), Mode::Browse);
        let top = state.layout().section_top(SectionId::Approach).unwrap();
        assert_eq!(
            state.scroll(),
            top.min(state.layout().max_scroll(state.view_height()))
        );
    }

    #[test]
    fn test_menu_cursor_select() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::ToggleMenu, now);
        state.apply(Action::MenuPrev, now);
        assert_eq!(state.menu_cursor(), 4);
        state.apply(Action::MenuSelect, now);
        assert!(!state.view().is_menu_open());

        let top = state.layout().section_top(SectionId::Contact).unwrap();
        let max = state.layout().max_scroll(state.view_height());
        assert_eq!(state.scroll(), top.min(max));
    }

    #[test]
    fn test_focus_cycles_work_then_modules() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::FocusPrev, now);
        assert_eq!(state.focus(), Some(Focus::new(ExpandableList::Modules, 5)));

        state.apply(Action::FocusNext, now);
        assert_eq!(state.focus(), Some(Focus::new(ExpandableList::Work, 0)));
    }

    #[test]
    fn test_toggle_focused_card() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::FocusNext, now);
        state.apply(Action::FocusNext, now);
        state.apply(Action::ToggleFocused, now);
        assert_eq!(state.view().expanded(ExpandableList::Work), Some(1));

        // Focused card is scrolled into view
        let block = state
            .layout()
            .card(Focus::new(ExpandableList::Work, 1))
            .unwrap();
        assert!(block.top >= state.scroll());

        state.apply(Action::ToggleFocused, now);
        assert_eq!(state.view().expanded(ExpandableList::Work), None);
    }

    #[test]
    fn test_expansion_lists_are_independent() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::FocusNext, now);
        state.apply(Action::ToggleFocused, now);
        state.apply(Action::FocusPrev, now);
        state.apply(Action::ToggleFocused, now);

        assert_eq!(state.view().expanded(ExpandableList::Work), Some(0));
        assert_eq!(state.view().expanded(ExpandableList::Modules), Some(5));
    }

    #[test]
    fn test_testimonial_paging_wraps() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::PrevTestimonial, now);
        assert_eq!(state.view().active_testimonial(), 2);
        state.apply(Action::NextTestimonial, now);
        assert_eq!(state.view().active_testimonial(), 0);
    }

    #[test]
    fn test_click_on_dot_selects_testimonial() {
        let mut state = state(60);
        let now = Instant::now();
        let block = state
            .layout()
            .get(BlockId::new(SectionId::Testimonials, 0))
            .unwrap();
        let dots_row = (block.bottom() - 1 - state.scroll()) as u16;

        state.click(4, dots_row, now);
        assert_eq!(state.view().active_testimonial(), 2);

        // Past the last dot
        state.click(10, dots_row, now);
        assert_eq!(state.view().active_testimonial(), 2);
    }

    #[test]
    fn test_click_on_dots_split_across_rows() {
        // Two dots fit in four cells, so the third starts a second row
        let mut state = state_with_width(4, 60);
        let now = Instant::now();
        let block = state
            .layout()
            .get(BlockId::new(SectionId::Testimonials, 0))
            .unwrap();
        let last_row = (block.bottom() - 1 - state.scroll()) as u16;

        state.click(0, last_row, now);
        assert_eq!(state.view().active_testimonial(), 2);

        state.click(2, last_row - 1, now);
        assert_eq!(state.view().active_testimonial(), 1);

        // Nothing to the right of the third dot
        state.click(2, last_row, now);
        assert_eq!(state.view().active_testimonial(), 1);

        // The attribution above the dots is not a selector
        state.click(0, last_row - 2, now);
        assert_eq!(state.view().active_testimonial(), 1);
    }

    #[test]
    fn test_cancel_closes_overlays_in_order() {
        let mut state = state(20);
        let now = Instant::now();

        state.apply(Action::ToggleMenu, now);
        state.apply(Action::ShowHelp, now);
        assert_eq!(state.mode(), Mode::Help);

        state.apply(Action::Cancel, now);
        assert_eq!(state.mode(), Mode::Menu);
        state.apply(Action::Cancel, now);
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_disabled_reveal_draws_everything() {
        let page = page();
        let controller = ViewStateController::without_timer(page.content.list_sizes());
        let params = RevealParams::default().with_enabled(false);
        let state = TuiState::new(page, controller, params, 60, 10, Instant::now());

        let contact = BlockId::new(SectionId::Contact, 0);
        assert!(state.is_revealed(contact));
    }

    #[test]
    fn test_resize_keeps_scroll_in_range() {
        let mut state = state(10);
        let now = Instant::now();
        state.apply(Action::ScrollBottom, now);

        state.resize(60, 200, now);
        assert_eq!(state.scroll(), state.layout().max_scroll(200));
    }
}
