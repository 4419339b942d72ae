//! TUI widgets: ratatui components for the page screen
//!
//! Layout:
//! ┌── NavBar (2) ─────────────────────────────┬── Menu ──┐
//! ├── Page (flex, scrolls) ───────────────────┴──────────┤
//! └── StatusBar (1) ─────────────────────────────────────┘

pub mod help;
pub mod menu;
pub mod nav_bar;
pub mod page;
pub mod portrait;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the navigation bar, bottom border included
pub const NAV_HEIGHT: u16 = 2;

/// Compute the main layout regions from a terminal area
pub struct ScreenLayout {
    pub nav_bar: Rect,
    pub page: Rect,
    pub status_bar: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            nav_bar: vertical[0],
            page: vertical[1],
            status_bar: vertical[2],
        }
    }

    /// Dropdown under the right end of the navigation bar
    pub fn menu_dropdown(&self, items: u16) -> Rect {
        let width = 24.min(self.page.width);
        let height = (items + 2).min(self.page.height);
        Rect::new(
            self.page.right().saturating_sub(width + 1).max(self.page.x),
            self.page.y,
            width,
            height,
        )
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
