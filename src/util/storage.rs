//! Durable key-value persistence for the explicit theme choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PreferenceStorage` is read once at start-up and written after every theme
//! change. Backends sit behind `KeyValueStore` so the browser's
//! `localStorage` can be swapped for an in-memory map outside the browser.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. `try_save` reports failures; `save` logs and
//! drops them so the in-memory theme stays authoritative.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use crate::error::ThemeError;
use crate::state::Theme;

/// Minimal string key-value store, modelled on the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn remove_item(&self, key: &str) -> Result<(), ThemeError>;
}

/// In-process map, used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Stand-in when no durable storage exists; every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable("no durable storage".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable("no durable storage".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable("no durable storage".into()))
    }
}

/// `window.localStorage`.
#[cfg(feature = "csr")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    pub fn local() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::EnvironmentUnavailable("window"))?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::EnvironmentUnavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "csr")]
fn storage_error(err: wasm_bindgen::JsValue) -> ThemeError {
    ThemeError::StorageUnavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

/// The stored theme choice under a single key.
#[derive(Clone)]
pub struct PreferenceStorage {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl PreferenceStorage {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored theme, or `None` when absent, unreadable, or not a valid theme.
    pub fn load(&self) -> Option<Theme> {
        let raw = match self.store.get_item(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                debug!("theme preference unreadable: {err}");
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                debug!("ignoring stored theme preference: {err}");
                None
            }
        }
    }

    pub fn try_save(&self, theme: Theme) -> Result<(), ThemeError> {
        self.store.set_item(&self.key, theme.as_str())
    }

    /// Persist `theme`; failures are logged and otherwise ignored.
    pub fn save(&self, theme: Theme) {
        if let Err(err) = self.try_save(theme) {
            warn!("theme preference not persisted: {err}");
        }
    }

    /// Forget the explicit choice so the OS preference applies again.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove_item(&self.key) {
            warn!("theme preference not cleared: {err}");
        }
    }
}
