//! Infrastructure layer for folio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod content;
pub mod photo;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use content::{BUNDLED_CONTENT, TomlContentSource};
pub use photo::LocalPhotoLoader;
