//! Domain layer for folio
//!
//! This crate contains the page content model and the small amount of UI
//! logic with real rules in it. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Reveal latch
//!
//! Every content block starts hidden and latches to revealed the first time
//! enough of it scrolls into view. It never hides again.
//!
//! ## Selectors
//!
//! - **Expansion**: at most one expanded card per list, lists independent
//! - **Rotation**: the active testimonial, wrapping forward on every tick

pub mod content;
pub mod core;
pub mod portrait;
pub mod reveal;
pub mod selection;

// Re-export commonly used types
pub use content::{
    ListSizes, PortfolioContent,
    entities::{
        AboutSection, ApproachModule, ApproachSection, BlogPost, ContactSection, Hero, Highlight,
        Link, PhilosophySection, Profile, SectionHeading, Stat, Statement, Testimonial, WorkItem,
        WorkSection, WritingSection,
    },
};
pub use core::{error::DomainError, section::SectionId};
pub use portrait::{ImageFormat, Photo, Portrait};
pub use reveal::{
    BlockId, RevealLatch, RevealMotion, RevealTransition, VisibilityThreshold, visible_fraction,
};
pub use selection::{
    ExpandableList, ExpansionSelector, RotationSelector, ViewState,
};
