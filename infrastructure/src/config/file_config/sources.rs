//! Content and photo locations from TOML (`[content]` and `[photo]` sections)

use serde::{Deserialize, Serialize};

/// Where the page content comes from
///
/// # Example
///
/// ```toml
/// [content]
/// path = "portfolio.toml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Content document; the bundled page is used when unset
    pub path: Option<String>,
}

/// Where the profile photograph comes from
///
/// # Example
///
/// ```toml
/// [photo]
/// path = "assets/photo.png"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePhotoConfig {
    /// Overrides `profile.photo` from the content document
    pub path: Option<String>,
}
