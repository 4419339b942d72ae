//! Navigation menu overlay: every navigation target, numbered

use crate::tui::state::TuiState;
use crate::tui::theme;
use folio_domain::SectionId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct MenuWidget<'a> {
    state: &'a TuiState,
}

impl<'a> MenuWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Number of rows the menu lists
    pub fn item_count() -> u16 {
        SectionId::NAV_TARGETS.len() as u16
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = SectionId::NAV_TARGETS
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let selected = i == self.state.menu_cursor();
                let style = if selected {
                    Style::default()
                        .fg(theme::CREAM)
                        .bg(theme::TEAL)
                        .add_modifier(Modifier::BOLD)
                } else {
                    theme::body()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), theme::muted()),
                    Span::styled(format!("{:<16}", section.label()), style),
                ])
            })
            .collect::<Vec<_>>();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::CREAM_DARK))
            .title(Span::styled(" Menu ", theme::eyebrow()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
