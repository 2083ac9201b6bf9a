//! Browser integration helpers for the theme state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wraps one browser surface behind a trait with an in-memory
//! counterpart, so the wiring in `bootstrap` runs unchanged in and out of the
//! browser.

pub mod bootstrap;
pub mod dom_sync;
pub mod global;
pub mod storage;
pub mod system_preference;
