//! Routed pages.

pub mod overview;
pub mod settings;
