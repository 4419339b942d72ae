//! Status bar widget: mode indicator + key hints + flash messages

use crate::tui::state::TuiState;
use crate::tui::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(theme::CHARCOAL).fg(theme::CREAM);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode();
        let mode_text = format!(" {} ", mode.indicator());
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(theme::TEAL)
            .add_modifier(Modifier::BOLD);

        let section = self
            .state
            .current_section()
            .map(|section| section.label())
            .unwrap_or_default();
        let left = Line::from(vec![
            Span::styled(mode_text.clone(), mode_style),
            Span::styled(format!(" {} ", section), bg_style),
        ]);
        let left_width = (mode_text.len() + section.len() + 2) as u16;
        buf.set_line(area.x, area.y, &left, left_width.min(area.width));

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => format!("{}  {:>3}%", mode.hints(), self.state.scroll_percent()),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right = Line::from(Span::styled(right_text, bg_style.fg(theme::BORDER)));
            buf.set_line(right_x, area.y, &right, right_width + 1);
        }
    }
}
