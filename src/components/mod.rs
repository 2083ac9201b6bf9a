//! Dashboard chrome components.
//!
//! DESIGN
//! ======
//! Components read shared state from Leptos context (`RwSignal<Theme>`,
//! `RwSignal<User>`) provided by `App`; none of them touch browser APIs.

pub mod breadcrumbs;
pub mod sidebar;
pub mod theme_toggle;
pub mod user_badge;
