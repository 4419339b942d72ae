//! Presentation layer for folio
//!
//! This crate contains the CLI definition, the terminal UI that renders the
//! page, and the plain output used by `--dump`.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, DumpFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use tui::TuiApp;
