//! Navigation bar widget: name, section links, call-to-action
//!
//! Wide terminals show the inline links; narrow ones collapse them behind
//! the menu toggle.

use crate::tui::state::TuiState;
use crate::tui::theme;
use folio_domain::SectionId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width from which the inline links are shown
pub const DESKTOP_WIDTH: u16 = 90;

pub struct NavBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn links(&self) -> Line<'a> {
        let current = self.state.current_section();
        let mut spans = Vec::new();
        for (i, section) in SectionId::desktop_nav().iter().enumerate() {
            let style = if Some(*section) == current {
                Style::default()
                    .fg(theme::TEAL)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::body()
            };
            spans.push(Span::styled(format!("{} ", i + 1), theme::muted()));
            spans.push(Span::styled(section.label(), style));
            spans.push(Span::raw("   "));
        }
        if let Some(cta) = &self.state.page().content.profile.cta {
            spans.push(Span::styled(
                format!(" {} ", cta.label),
                Style::default()
                    .fg(theme::CREAM)
                    .bg(theme::TEAL)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    fn menu_toggle(&self) -> Line<'a> {
        let icon = if self.state.view().is_menu_open() {
            "✕"
        } else {
            "☰"
        };
        Line::from(vec![
            Span::styled(icon, theme::title()),
            Span::styled(" m", theme::muted()),
        ])
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::BACKGROUND));
        let inner = block.inner(area);
        block.render(area, buf);

        let name = Line::from(Span::styled(
            self.state.page().content.profile.name.clone(),
            theme::title(),
        ));
        Paragraph::new(name).render(inner, buf);

        let right = if area.width >= DESKTOP_WIDTH {
            self.links()
        } else {
            self.menu_toggle()
        };
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
