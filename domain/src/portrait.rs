//! Profile photograph region

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoded image format recognised from a file signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Webp => "WebP",
        };
        f.write_str(name)
    }
}

/// A successfully loaded photograph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub source: String,
    pub format: ImageFormat,
    /// Pixel dimensions, when the header exposes them cheaply
    pub dimensions: Option<(u32, u32)>,
    pub byte_len: usize,
}

/// What the photo region shows: the image, or a text stand-in after a
/// failed load. Decided once; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portrait {
    Image(Photo),
    Placeholder { text: String },
}

impl Portrait {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Portrait::Placeholder { text: text.into() }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Portrait::Placeholder { .. })
    }

    /// Whether the image element is visible
    pub fn shows_image(&self) -> bool {
        matches!(self, Portrait::Image(_))
    }

    /// Placeholder text, visible only when the image is hidden
    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            Portrait::Placeholder { text } => Some(text),
            Portrait::Image(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_hides_image() {
        let portrait = Portrait::placeholder("Ada Lovelace");
        assert!(portrait.is_placeholder());
        assert!(!portrait.shows_image());
        assert_eq!(portrait.placeholder_text(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_image_has_no_placeholder_text() {
        let portrait = Portrait::Image(Photo {
            source: "photo.png".into(),
            format: ImageFormat::Png,
            dimensions: Some((640, 520)),
            byte_len: 1024,
        });
        assert!(portrait.shows_image());
        assert_eq!(portrait.placeholder_text(), None);
    }
}
