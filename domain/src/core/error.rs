//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("List is empty")]
    EmptyList,

    #[error("Visibility threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f32),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

impl DomainError {
    /// Check if this error is a rejected selector update
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::IndexOutOfRange { .. })
    }
}
