//! TUI mode system
//!
//! Defines the interaction model:
//! - Browse mode: scrolling, card focus, testimonial paging
//! - Menu mode: the navigation menu is open
//! - Help mode: the key reference overlay is open

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_domain::SectionId;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Reading the page
    #[default]
    Browse,
    /// Navigation menu open
    Menu,
    /// Help overlay open
    Help,
}

impl Mode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Browse => "PAGE",
            Self::Menu => "MENU",
            Self::Help => "HELP",
        }
    }

    /// Key hints for the status line
    pub fn hints(&self) -> &'static str {
        match self {
            Self::Browse => {
                "j/k:scroll  tab:card  enter:expand  h/l:quotes  1-5:jump  m:menu  ?:help  q:quit"
            }
            Self::Menu => "j/k:move  enter:go  1-5:jump  esc:close",
            Self::Help => "?/esc:close",
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    /// Focus the next expandable card
    FocusNext,
    /// Focus the previous expandable card
    FocusPrev,
    /// Expand or collapse the focused card
    ToggleFocused,
    NextTestimonial,
    PrevTestimonial,
    /// Open or close the navigation menu
    ToggleMenu,
    /// Move the menu cursor
    MenuNext,
    MenuPrev,
    /// Go to the section under the menu cursor
    MenuSelect,
    /// Scroll to a section (closes the menu)
    Navigate(SectionId),
    ShowHelp,
    /// Close whatever overlay is open
    Cancel,
    Quit,
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        // Global
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Action::Quit;
        }

        match mode {
            Mode::Browse => Self::handle_browse(key),
            Mode::Menu => Self::handle_menu(key),
            Mode::Help => Self::handle_help(key),
        }
    }

    fn handle_browse(key: KeyEvent) -> Action {
        if let Some(target) = Self::nav_digit(key) {
            return Action::Navigate(target);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

            // Scrolling
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL)
            | (KeyCode::PageDown, _)
            | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::PageDown,
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::ScrollTop,
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::ScrollBottom,

            // Cards
            (KeyCode::Tab, _) => Action::FocusNext,
            (KeyCode::BackTab, _) => Action::FocusPrev,
            (KeyCode::Enter, _) => Action::ToggleFocused,

            // Testimonials
            (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
                Action::PrevTestimonial
            }
            (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
                Action::NextTestimonial
            }

            (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
            (KeyCode::Char('?'), _) => Action::ShowHelp,
            (KeyCode::Esc, _) => Action::Cancel,
            _ => Action::None,
        }
    }

    fn handle_menu(key: KeyEvent) -> Action {
        if let Some(target) = Self::nav_digit(key) {
            return Action::Navigate(target);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::MenuNext,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::MenuPrev,
            KeyCode::Enter => Action::MenuSelect,
            KeyCode::Char('m') | KeyCode::Esc => Action::ToggleMenu,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_help(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        }
    }

    /// `1`..`5` select a navigation target
    fn nav_digit(key: KeyEvent) -> Option<SectionId> {
        match key.code {
            KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
                let index = c.to_digit(10)? as usize - 1;
                SectionId::NAV_TARGETS.get(index).copied()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Browse);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(Mode::Browse.indicator(), "PAGE");
        assert_eq!(Mode::Menu.indicator(), "MENU");
        assert_eq!(Mode::Help.indicator(), "HELP");
    }

    #[test]
    fn test_browse_mode_key_handling() {
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('q'))),
            Action::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Mode::Browse, ctrl_c), Action::Quit);

        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('j'))),
            Action::ScrollDown
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Up)),
            Action::ScrollUp
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Tab)),
            Action::FocusNext
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Enter)),
            Action::ToggleFocused
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('l'))),
            Action::NextTestimonial
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('m'))),
            Action::ToggleMenu
        );
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('x'))),
            Action::None
        );
    }

    #[test]
    fn test_digits_navigate() {
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('1'))),
            Action::Navigate(SectionId::Work)
        );
        assert_eq!(
            KeyHandler::handle(Mode::Menu, key(KeyCode::Char('5'))),
            Action::Navigate(SectionId::Contact)
        );
        // Only five targets
        assert_eq!(
            KeyHandler::handle(Mode::Browse, key(KeyCode::Char('6'))),
            Action::None
        );
    }

    #[test]
    fn test_menu_mode_key_handling() {
        assert_eq!(
            KeyHandler::handle(Mode::Menu, key(KeyCode::Esc)),
            Action::ToggleMenu
        );
        assert_eq!(
            KeyHandler::handle(Mode::Menu, key(KeyCode::Down)),
            Action::MenuNext
        );
        assert_eq!(
            KeyHandler::handle(Mode::Menu, key(KeyCode::Enter)),
            Action::MenuSelect
        );
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        assert_eq!(
            KeyHandler::handle(Mode::Help, key(KeyCode::Char('j'))),
            Action::None
        );
        assert_eq!(
            KeyHandler::handle(Mode::Help, key(KeyCode::Esc)),
            Action::Cancel
        );
    }
}
