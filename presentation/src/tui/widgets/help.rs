//! Help overlay widget

use crate::tui::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn key(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(theme::TEAL)),
            Span::styled(description, theme::body()),
        ])
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme::CHARCOAL)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        vec![
            heading("Reading"),
            Self::key("j/k ↓/↑", "Scroll one row"),
            Self::key("space ^d/^u", "Scroll one page"),
            Self::key("g/G", "Top / bottom"),
            Line::from(""),
            heading("Cards"),
            Self::key("tab/S-tab", "Focus next / previous card"),
            Self::key("enter", "Expand or collapse the focused card"),
            Self::key("click", "Expand a card, pick a testimonial dot"),
            Line::from(""),
            heading("Testimonials"),
            Self::key("h/l ←/→", "Previous / next"),
            Line::from(""),
            heading("Navigation"),
            Self::key("1-5", "Work, Approach, About, Writing, Contact"),
            Self::key("m", "Open or close the menu"),
            Self::key("?", "Toggle this help"),
            Self::key("q  Ctrl+C", "Quit"),
            Line::from(""),
            Line::from(Span::styled("Press ? or Esc to close", theme::muted())),
        ]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let paragraph = Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Help ", theme::eyebrow()))
                    .border_style(Style::default().fg(theme::TEAL))
                    .style(Style::default().bg(theme::CREAM_DARK)),
            )
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}
