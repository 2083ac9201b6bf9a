//! # themekit
//!
//! Leptos + WASM presentation glue for the dashboard front-end: a theme
//! preference store kept in sync with `localStorage`, the `data-theme`
//! attribute, the OS color scheme, and `window`-level accessors, plus a
//! read-only current-user store and the shell components that display them.
//!
//! Browser bindings are enabled by the `csr` feature. Without it every
//! browser seam has an in-memory counterpart, which is what the tests use.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use state::{Disposer, Theme, ThemeState, User, UserStore};
pub use util::bootstrap::{ThemeEnvironment, ThemeRuntime};

/// WASM entry point: start the theme runtime, expose it on `window`, mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ThemeConfig::default();
    let runtime = ThemeRuntime::start(&config, ThemeEnvironment::browser(&config));
    if let Err(err) = runtime.expose_on_window() {
        log::warn!("theme accessors not exposed: {err}");
    }

    let state = runtime.state().clone();
    leptos::mount::mount_to_body(move || {
        view! { <App state=state users=UserStore::mock()/> }
    });
}
