//! Local photo loader
//!
//! Reads the profile photograph from disk, identifies it by its leading
//! bytes and decodes it with the `image` crate. The extension is ignored.
//! A file that looks like an image but does not decode is rejected.

use folio_application::{PhotoError, PhotoSource};
use folio_domain::{ImageFormat, Photo};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Photo source reading from the local file system.
///
/// Relative paths resolve against `base_dir` when one is set, otherwise
/// against the working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalPhotoLoader {
    base_dir: Option<PathBuf>,
}

impl LocalPhotoLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl PhotoSource for LocalPhotoLoader {
    fn load(&self, path: &str) -> Result<Photo, PhotoError> {
        if path.trim().is_empty() {
            return Err(PhotoError::NotConfigured);
        }

        let resolved = self.resolve(path);
        let bytes = fs::read(&resolved).map_err(|source| PhotoError::Read {
            path: resolved.display().to_string(),
            source,
        })?;

        let detected = image::guess_format(&bytes)
            .map_err(|_| PhotoError::UnknownFormat(path.to_string()))?;
        let format =
            supported_format(detected).ok_or_else(|| PhotoError::UnknownFormat(path.to_string()))?;

        let decoded = image::load_from_memory_with_format(&bytes, detected).map_err(|e| {
            PhotoError::Decode {
                path: resolved.display().to_string(),
                message: e.to_string(),
            }
        })?;
        let dimensions = (decoded.width(), decoded.height());
        debug!(
            "Loaded photo {} ({}, {} bytes, {}x{})",
            resolved.display(),
            format,
            bytes.len(),
            dimensions.0,
            dimensions.1
        );

        Ok(Photo {
            source: path.to_string(),
            format,
            dimensions: Some(dimensions),
            byte_len: bytes.len(),
        })
    }
}

/// Formats the portrait accepts; anything else `image` recognises is refused
fn supported_format(format: image::ImageFormat) -> Option<ImageFormat> {
    match format {
        image::ImageFormat::Png => Some(ImageFormat::Png),
        image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
        image::ImageFormat::Gif => Some(ImageFormat::Gif),
        image::ImageFormat::WebP => Some(ImageFormat::Webp),
        _ => None,
    }
}
