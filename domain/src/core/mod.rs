//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`section::SectionId`]: named page sections and navigation targets

pub mod error;
pub mod section;
