//! Photo source port
//!
//! Loads the profile photograph by path. Failures are expected and handled
//! by falling back to a text placeholder.

use folio_domain::Photo;
use thiserror::Error;

/// Errors from loading the profile photograph
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("No photo configured")]
    NotConfigured,

    #[error("Failed to read photo {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognised image data in {0}")]
    UnknownFormat(String),

    #[error("Failed to decode photo {path}: {message}")]
    Decode { path: String, message: String },
}

/// Port for loading the profile photograph
pub trait PhotoSource: Send + Sync {
    fn load(&self, path: &str) -> Result<Photo, PhotoError>;
}
