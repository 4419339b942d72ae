//! TUI (Text User Interface) for the portfolio page
//!
//! Renders the single-page portfolio as a scrollable column with a
//! navigation bar, collapsible cards, a rotating testimonial carousel and
//! scroll-triggered reveal transitions.

mod app;
mod mode;
mod page;
mod state;
mod theme;
mod viewport;
mod widgets;

pub use app::{DEFAULT_TICK_RATE, TuiApp};
pub use mode::{Action, KeyHandler, Mode};
pub use page::{Focus, PageLayout};
pub use state::TuiState;
pub use viewport::TerminalViewport;
