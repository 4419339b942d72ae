//! Portrait widget: the profile photo region
//!
//! A terminal cannot draw the photograph itself, so a loaded image is shown
//! as a framed picture card. After a failed load the card is replaced by the
//! placeholder: the profile name centred in the frame. Exactly one of the two
//! is ever visible.

use crate::tui::theme;
use folio_domain::Portrait;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows the portrait occupies, borders included
pub const PORTRAIT_HEIGHT: u16 = 7;

pub struct PortraitWidget<'a> {
    portrait: &'a Portrait,
}

impl<'a> PortraitWidget<'a> {
    pub fn new(portrait: &'a Portrait) -> Self {
        Self { portrait }
    }

    /// Interior lines, centred vertically for an interior of `rows` rows
    pub fn lines(portrait: &Portrait, rows: u16) -> Vec<Line<'static>> {
        let body: Vec<Line<'static>> = match portrait {
            Portrait::Image(photo) => {
                let mut detail = photo.format.to_string();
                if let Some((w, h)) = photo.dimensions {
                    detail.push_str(&format!(" {}×{}", w, h));
                }
                vec![
                    Line::from(Span::styled("▣", theme::accent())),
                    Line::from(Span::styled(photo.source.clone(), theme::body())),
                    Line::from(Span::styled(detail, theme::muted())),
                ]
            }
            Portrait::Placeholder { text } => {
                vec![Line::from(Span::styled(text.clone(), theme::title()))]
            }
        };

        let pad = (rows as usize).saturating_sub(body.len()) / 2;
        let mut lines = vec![Line::default(); pad];
        lines.extend(body);
        lines
    }
}

impl Widget for PortraitWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER));
        let lines = Self::lines(self.portrait, block.inner(area).height);

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{ImageFormat, Photo};

    fn render(portrait: &Portrait) -> String {
        let area = Rect::new(0, 0, 30, PORTRAIT_HEIGHT);
        let mut buf = Buffer::empty(area);
        PortraitWidget::new(portrait).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    fn photo() -> Portrait {
        Portrait::Image(Photo {
            source: "courtney-photo.png".to_string(),
            format: ImageFormat::Png,
            dimensions: Some((480, 640)),
            byte_len: 2048,
        })
    }

    #[test]
    fn test_placeholder_visible_image_hidden() {
        let content = render(&Portrait::placeholder("Courtney Kingsbury"));
        assert!(content.contains("Courtney Kingsbury"));
        assert!(!content.contains("▣"));
    }

    #[test]
    fn test_image_visible_placeholder_hidden() {
        let content = render(&photo());
        assert!(content.contains("▣"));
        assert!(content.contains("courtney-photo.png"));
        assert!(content.contains("PNG 480×640"));
    }

    #[test]
    fn test_lines_are_vertically_centred() {
        let lines = PortraitWidget::lines(&Portrait::placeholder("Ada"), 5);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].spans.is_empty());
    }
}
