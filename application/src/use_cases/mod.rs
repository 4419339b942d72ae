//! Use cases: the page's behaviour, independent of how it is drawn.

pub mod auto_advance;
pub mod load_page;
pub mod view_controller;
pub mod visibility_tracker;
