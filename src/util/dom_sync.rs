//! Mirrors the current theme onto the document root and into storage.
//!
//! After any change has propagated, the root attribute and the stored
//! preference both equal `ThemeState::get()`. Outside the browser there is no
//! root element and only the storage half runs.

#[cfg(test)]
#[path = "dom_sync_test.rs"]
mod dom_sync_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use super::storage::PreferenceStorage;
use crate::error::ThemeError;
use crate::state::{Disposer, ThemeState};

/// Element that receives the theme attribute.
pub trait RootElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Attribute map standing in for `<html>` outside the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    attributes: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

impl RootElement for MemoryRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `document.documentElement`.
#[cfg(feature = "csr")]
pub struct DocumentRoot {
    element: web_sys::Element,
}

#[cfg(feature = "csr")]
impl DocumentRoot {
    pub fn new() -> Result<Self, ThemeError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .ok_or(ThemeError::EnvironmentUnavailable("document"))?;
        Ok(Self { element })
    }
}

#[cfg(feature = "csr")]
impl RootElement for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|_| ThemeError::EnvironmentUnavailable("documentElement.setAttribute"))
    }
}

pub struct DomSync {
    root: Option<Rc<dyn RootElement>>,
    storage: PreferenceStorage,
    attribute: String,
}

impl DomSync {
    pub fn new(
        root: Option<Rc<dyn RootElement>>,
        storage: PreferenceStorage,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            root,
            storage,
            attribute: attribute.into(),
        }
    }

    /// Subscribe to `state`; applies immediately and after every change.
    pub fn install(&self, state: &ThemeState) -> Disposer {
        let root = self.root.clone();
        let storage = self.storage.clone();
        let attribute = self.attribute.clone();
        state.subscribe(move |theme| {
            if let Some(root) = &root {
                if let Err(err) = root.set_attribute(&attribute, theme.as_str()) {
                    warn!("could not set {attribute}={theme}: {err}");
                }
            }
            storage.save(theme);
        })
    }
}
