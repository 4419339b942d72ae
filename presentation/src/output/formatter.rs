//! Output formatter trait

use folio_application::LoadedPage;

/// Trait for printing a loaded page without the TUI
pub trait OutputFormatter {
    /// Format the page as text
    fn format(&self, page: &LoadedPage) -> String;

    /// Format as JSON
    fn format_json(&self, page: &LoadedPage) -> String;
}
