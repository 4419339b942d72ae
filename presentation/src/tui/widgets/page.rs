//! Page widget: the scrolled page with reveal motion applied
//!
//! Each visible block is drawn into a scratch buffer of its own size, faded
//! toward the background by its opacity, then copied into the viewport
//! shifted down by its offset. The shift is clipped to the block's own rows
//! so a rising block never draws over its neighbours.

use super::portrait::PortraitWidget;
use crate::tui::page::{BlockBody, PageBlock, content_column};
use crate::tui::state::TuiState;
use crate::tui::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};
use std::time::Instant;

/// Layout units per terminal row when converting the reveal offset
pub const OFFSET_UNITS_PER_ROW: f32 = 10.0;

pub struct PageWidget<'a> {
    state: &'a TuiState,
    now: Instant,
}

impl<'a> PageWidget<'a> {
    pub fn new(state: &'a TuiState, now: Instant) -> Self {
        Self { state, now }
    }

    fn render_block(&self, block: &PageBlock, column: Rect, buf: &mut Buffer) {
        let motion = self.state.motion(block.id, self.now);
        if motion.is_hidden() {
            return;
        }

        let scroll = self.state.scroll();
        let view_end = scroll + column.height as usize;
        let visible_start = block.top.max(scroll);
        let visible_end = block.bottom().min(view_end);
        if visible_start >= visible_end {
            return;
        }

        let shift = (motion.offset / OFFSET_UNITS_PER_ROW).round().max(0.0) as usize;
        // First block row that shows content, after the downward shift
        let first_row = (visible_start - block.top).max(shift);
        if block.top + first_row >= visible_end {
            return;
        }

        let scratch_area = Rect::new(0, 0, column.width, block.height as u16);
        let mut scratch = Buffer::empty(scratch_area);
        match &block.body {
            BlockBody::Text(text) => Paragraph::new(text.clone())
                .wrap(Wrap { trim: false })
                .render(scratch_area, &mut scratch),
            BlockBody::Portrait => {
                PortraitWidget::new(&self.state.page().portrait).render(scratch_area, &mut scratch)
            }
        }

        for row in first_row..(visible_end - block.top) {
            let source_y = (row - shift) as u16;
            let target_y = column.y + (block.top + row - scroll) as u16;
            for x in 0..column.width {
                let mut cell = scratch[(x, source_y)].clone();
                if motion.opacity < 1.0 {
                    cell.fg = theme::fade(cell.fg, motion.opacity);
                }
                if cell.bg == ratatui::style::Color::Reset {
                    cell.bg = theme::BACKGROUND;
                }
                buf[(column.x + x, target_y)] = cell;
            }
        }
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(theme::BACKGROUND));
        let column = content_column(area);
        if column.width == 0 || column.height == 0 {
            return;
        }

        let scroll = self.state.scroll();
        let view_end = scroll + column.height as usize;
        for block in self.state.layout().blocks() {
            if block.bottom() <= scroll {
                continue;
            }
            if block.top >= view_end {
                break;
            }
            self.render_block(block, column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_application::{LoadedPage, RevealParams, ViewStateController};
    use folio_domain::{PortfolioContent, Portrait};

    fn state(reveal: RevealParams, now: Instant) -> TuiState {
        let mut content = PortfolioContent::default();
        content.profile.name = "Ada Lovelace".to_string();
        content.hero.headline = "Engines that weave".to_string();
        content.contact.heading.title = "Say hello".to_string();
        let page = LoadedPage {
            content,
            portrait: Portrait::placeholder("Ada Lovelace"),
        };
        let controller = ViewStateController::without_timer(page.content.list_sizes());
        TuiState::new(page, controller, reveal, 40, 30, now)
    }

    fn render(state: &TuiState, now: Instant) -> String {
        let area = Rect::new(0, 0, 44, 30);
        let mut buf = Buffer::empty(area);
        PageWidget::new(state, now).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_settled_blocks_are_drawn() {
        let now = Instant::now();
        let state = state(RevealParams::default().with_enabled(false), now);
        let content = render(&state, now);
        assert!(content.contains("Ada Lovelace"));
        assert!(content.contains("Engines that weave"));
    }

    #[test]
    fn test_hidden_blocks_are_blank() {
        let now = Instant::now();
        let state = state(RevealParams::default(), now);
        // Revealed at construction; no time has passed
        let content = render(&state, now);
        assert!(!content.contains("Ada Lovelace"));
        assert!(!content.contains("Engines that weave"));
    }

    #[test]
    fn test_transition_completes() {
        let start = Instant::now();
        let state = state(RevealParams::default(), start);
        let later = start + std::time::Duration::from_secs(2);
        let content = render(&state, later);
        assert!(content.contains("Engines that weave"));
        assert!(content.contains("Ada Lovelace"));
    }
}
