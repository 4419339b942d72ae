//! Configuration file loading for folio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FOLIO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./folio.toml` or `./.folio.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/folio/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileContentConfig, FilePhotoConfig, FileRevealConfig,
    FileRotationConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
