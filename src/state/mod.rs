//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `user`) on top of a small generic
//! reactive `store`, so components and browser glue depend on focused models.

pub mod store;
pub mod theme;
pub mod user;

pub use store::{Disposer, ReadableStore, Store};
pub use theme::{Theme, ThemeState};
pub use user::{User, UserStore};
