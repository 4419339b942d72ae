//! Load Page use case
//!
//! Reads the page content once and resolves the profile photo region: the
//! photograph when it loads, a text placeholder (the profile name) when it
//! does not. The fallback is silent to the user and never retried.

use crate::ports::content_source::{ContentError, ContentSource};
use crate::ports::photo_source::{PhotoError, PhotoSource};
use folio_domain::{PortfolioContent, Portrait};
use std::sync::Arc;
use tracing::{info, warn};

/// Content plus the resolved photo region
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub content: PortfolioContent,
    pub portrait: Portrait,
}

/// Use case for loading everything the page renders
pub struct LoadPageUseCase<C: ContentSource, P: PhotoSource> {
    content_source: Arc<C>,
    photo_source: Arc<P>,
    /// Overrides the photo path from the content document
    photo_override: Option<String>,
}

impl<C: ContentSource, P: PhotoSource> LoadPageUseCase<C, P> {
    pub fn new(content_source: Arc<C>, photo_source: Arc<P>) -> Self {
        Self {
            content_source,
            photo_source,
            photo_override: None,
        }
    }

    pub fn with_photo(mut self, path: Option<String>) -> Self {
        self.photo_override = path;
        self
    }

    pub fn execute(&self) -> Result<LoadedPage, ContentError> {
        let content = self.content_source.load()?;
        if content.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        info!(
            "Loaded content from {} ({} testimonials, {} work items, {} modules)",
            self.content_source.origin(),
            content.testimonials.len(),
            content.work.items.len(),
            content.approach.modules.len()
        );

        let path = self
            .photo_override
            .clone()
            .or_else(|| content.profile.photo.clone());
        let portrait = resolve_portrait(self.photo_source.as_ref(), path.as_deref(), &content);

        Ok(LoadedPage { content, portrait })
    }
}

/// Load the photograph once, falling back to the profile name on failure
pub fn resolve_portrait<P: PhotoSource + ?Sized>(
    source: &P,
    path: Option<&str>,
    content: &PortfolioContent,
) -> Portrait {
    let result = match path {
        Some(path) => source.load(path),
        None => Err(PhotoError::NotConfigured),
    };

    match result {
        Ok(photo) => Portrait::Image(photo),
        Err(e) => {
            warn!("Profile photo unavailable, using placeholder: {}", e);
            Portrait::placeholder(content.profile.name.clone())
        }
    }
}
