//! Page palette and reveal fading
//!
//! Colours are the warm neutral palette of the page. Fading blends a
//! foreground colour toward the page background, which is how opacity is
//! drawn on a terminal cell.

use ratatui::style::{Color, Modifier, Style};

pub const CREAM: Color = Color::Rgb(0xF8, 0xF6, 0xF1);
pub const CREAM_DARK: Color = Color::Rgb(0xEF, 0xEC, 0xE4);
pub const CHARCOAL: Color = Color::Rgb(0x3D, 0x3D, 0x3D);
pub const CHARCOAL_LIGHT: Color = Color::Rgb(0x6B, 0x6B, 0x6B);
pub const MUTED: Color = Color::Rgb(0x8B, 0x87, 0x80);
pub const BORDER: Color = Color::Rgb(0xD8, 0xD4, 0xCB);
pub const TEAL: Color = Color::Rgb(0x5B, 0x7B, 0x7A);

/// Page background
pub const BACKGROUND: Color = CREAM;

pub fn body() -> Style {
    Style::default().fg(CHARCOAL_LIGHT)
}

pub fn title() -> Style {
    Style::default().fg(CHARCOAL).add_modifier(Modifier::BOLD)
}

pub fn eyebrow() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn accent() -> Style {
    Style::default().fg(TEAL)
}

pub fn link() -> Style {
    Style::default()
        .fg(TEAL)
        .add_modifier(Modifier::UNDERLINED)
}

/// Blend `color` toward the background. `opacity` 1.0 keeps the colour,
/// 0.0 yields the background. Non-RGB colours snap at half opacity.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, BACKGROUND) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(br, r, opacity),
            mix(bg, g, opacity),
            mix(bb, b, opacity),
        ),
        _ if opacity >= 0.5 => color,
        _ => BACKGROUND,
    }
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(CHARCOAL, 1.0), CHARCOAL);
        assert_eq!(fade(CHARCOAL, 0.0), BACKGROUND);
    }

    #[test]
    fn test_fade_midpoint() {
        // Halfway between 0x3D and 0xF8
        assert_eq!(fade(CHARCOAL, 0.5), Color::Rgb(0x9B, 0x9A, 0x97));
    }

    #[test]
    fn test_fade_named_colour_snaps() {
        assert_eq!(fade(Color::Red, 0.7), Color::Red);
        assert_eq!(fade(Color::Red, 0.2), BACKGROUND);
    }
}
