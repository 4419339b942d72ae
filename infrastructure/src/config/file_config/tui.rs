//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Terminal UI settings
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_ms = 50
/// log_file = "~/.local/state/folio/folio.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval while animations run, in milliseconds
    pub tick_ms: u64,
    /// Log file for interactive sessions (stdout belongs to the TUI)
    pub log_file: Option<String>,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            log_file: None,
        }
    }
}
