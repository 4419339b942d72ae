//! Content source port
//!
//! Defines where the page content comes from. The infrastructure layer
//! provides a TOML-backed implementation with a bundled default document.

use folio_domain::PortfolioContent;
use thiserror::Error;

/// Errors from loading page content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Content is missing the profile name")]
    MissingName,
}

/// Port for loading the page content once at startup
pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<PortfolioContent, ContentError>;

    /// Human-readable origin for logs, e.g. a file path or "bundled"
    fn origin(&self) -> String;
}
