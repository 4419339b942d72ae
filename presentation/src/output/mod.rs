//! Non-interactive page output

pub mod console;
pub mod formatter;
