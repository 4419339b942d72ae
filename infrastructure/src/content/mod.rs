//! TOML content source
//!
//! The page content is a TOML document. A default document is compiled into
//! the binary; a file on disk can replace it.

use folio_application::{ContentError, ContentSource};
use folio_domain::PortfolioContent;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// The bundled portfolio document
pub const BUNDLED_CONTENT: &str = include_str!("../../assets/portfolio.toml");

/// Where a [`TomlContentSource`] reads from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Bundled,
    File(PathBuf),
}

/// Content source backed by a TOML document
#[derive(Debug, Clone)]
pub struct TomlContentSource {
    origin: Origin,
}

impl TomlContentSource {
    /// Source that reads the compiled-in document
    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    /// Source that reads a document from disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    /// File source if a path is given, bundled otherwise
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn is_bundled(&self) -> bool {
        self.origin == Origin::Bundled
    }

    /// Parse a content document
    pub fn parse(text: &str, origin: &str) -> Result<PortfolioContent, ContentError> {
        toml::from_str(text).map_err(|e| ContentError::Parse {
            origin: origin.to_string(),
            message: e.message().to_string(),
        })
    }
}

impl Default for TomlContentSource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ContentSource for TomlContentSource {
    fn load(&self) -> Result<PortfolioContent, ContentError> {
        match &self.origin {
            Origin::Bundled => Self::parse(BUNDLED_CONTENT, "bundled content"),
            Origin::File(path) => {
                debug!("Reading content from {}", path.display());
                let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::parse(&text, &path.display().to_string())
            }
        }
    }

    fn origin(&self) -> String {
        match &self.origin {
            Origin::Bundled => "bundled content".to_string(),
            Origin::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_content_parses() {
        let content = TomlContentSource::bundled().load().unwrap();
        assert_eq!(content.profile.name, "Courtney Kingsbury");
        assert_eq!(content.testimonials.len(), 2);
        assert_eq!(content.work.items.len(), 4);
        assert_eq!(content.approach.modules.len(), 6);
        assert_eq!(content.philosophy.statements.len(), 4);
        assert_eq!(content.writing.posts.len(), 3);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.highlights.len(), 3);
    }

    #[test]
    fn test_bundled_work_links() {
        let content = TomlContentSource::bundled().load().unwrap();
        let linked: Vec<bool> = content
            .work
            .items
            .iter()
            .map(|item| item.link.is_some())
            .collect();
        assert_eq!(linked, vec![true, true, false, false]);
        assert!(content.writing.posts[0].is_published());
        assert!(!content.writing.posts[1].is_published());
    }

    #[test]
    fn test_bundled_closing_and_headings() {
        let content = TomlContentSource::bundled().load().unwrap();
        assert_eq!(
            content.about.closing.as_deref(),
            Some("Now I'm ready for the next chapter.")
        );
        assert_eq!(content.contact.heading.title, "Coffee? Zoom? Let's Chat");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[profile]\nname = \"Ada Lovelace\"\n\n[[testimonials]]\nquote = \"q\"\nname = \"n\"\ntitle = \"t\""
        )
        .unwrap();

        let source = TomlContentSource::from_path(file.path());
        assert!(!source.is_bundled());
        let content = source.load().unwrap();
        assert_eq!(content.profile.name, "Ada Lovelace");
        assert_eq!(content.list_sizes().testimonials, 1);
        assert!(content.work.items.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let source = TomlContentSource::from_path("/nonexistent/folio/portfolio.toml");
        assert!(matches!(source.load(), Err(ContentError::Read { .. })));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = TomlContentSource::parse("[profile]\nname = 3", "inline").unwrap_err();
        match err {
            ContentError::Parse { origin, .. } => assert_eq!(origin, "inline"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
