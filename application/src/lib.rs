//! Application layer for folio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ROTATION_INTERVAL, FolioConfig, RevealParams, RotationParams};
pub use ports::{
    content_source::{ContentError, ContentSource},
    photo_source::{PhotoError, PhotoSource},
    viewport::{Intersection, ObserverError, UnavailableObserver, ViewportObserver},
};
pub use use_cases::auto_advance::{AdvanceTick, AutoAdvance};
pub use use_cases::load_page::{LoadPageUseCase, LoadedPage, resolve_portrait};
pub use use_cases::view_controller::{ScrollRequest, ViewStateController};
pub use use_cases::visibility_tracker::VisibilityTracker;
