//! OS color-scheme observation.
//!
//! The watcher only proposes a theme when the user has no stored choice, so
//! an explicit preference is never overridden by an OS switch. Sources whose
//! API is missing report `None` and yield an inert disposer.

#[cfg(test)]
#[path = "system_preference_test.rs"]
mod system_preference_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use super::storage::PreferenceStorage;
use crate::state::{Disposer, Theme};

/// Handler invoked with the new "prefers dark" value.
pub type SchemeHandler = Rc<dyn Fn(bool)>;

/// Something that reports, and announces changes to, "OS prefers dark".
pub trait ColorSchemeSource {
    /// Current signal, or `None` if the environment cannot tell.
    fn prefers_dark(&self) -> Option<bool>;
    /// Register `handler` for change events. `None` if listening is unsupported.
    fn listen(&self, handler: SchemeHandler) -> Option<Disposer>;
}

/// Environment without any color-scheme signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoColorScheme;

impl ColorSchemeSource for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn listen(&self, _handler: SchemeHandler) -> Option<Disposer> {
        None
    }
}

#[derive(Default)]
struct ManualInner {
    prefers_dark: Cell<bool>,
    listeners: RefCell<Vec<(u64, SchemeHandler)>>,
    next_id: Cell<u64>,
}

/// Programmatically driven signal for embedding and tests.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    inner: Rc<ManualInner>,
}

impl ManualColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        let scheme = Self::default();
        scheme.inner.prefers_dark.set(prefers_dark);
        scheme
    }

    /// Change the signal and fire every registered listener.
    pub fn emit(&self, prefers_dark: bool) {
        self.inner.prefers_dark.set(prefers_dark);
        let snapshot: Vec<SchemeHandler> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.inner.prefers_dark.get())
    }

    fn listen(&self, handler: SchemeHandler) -> Option<Disposer> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, handler));

        let weak = Rc::downgrade(&self.inner);
        Some(Disposer::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// `window.matchMedia(query)` and its `change` event.
#[cfg(feature = "csr")]
pub struct MediaQuerySource {
    query: web_sys::MediaQueryList,
}

#[cfg(feature = "csr")]
impl MediaQuerySource {
    pub fn new(media_query: &str) -> Result<Self, crate::error::ThemeError> {
        use crate::error::ThemeError;

        let window = web_sys::window().ok_or(ThemeError::EnvironmentUnavailable("window"))?;
        let query = window
            .match_media(media_query)
            .ok()
            .flatten()
            .ok_or(ThemeError::EnvironmentUnavailable("matchMedia"))?;
        Ok(Self { query })
    }
}

#[cfg(feature = "csr")]
impl ColorSchemeSource for MediaQuerySource {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.query.matches())
    }

    fn listen(&self, handler: SchemeHandler) -> Option<Disposer> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| handler(event.matches()),
        );
        // Ownership moves to JS so an undisposed listener never calls freed memory.
        let callback: js_sys::Function = closure.into_js_value().unchecked_into();
        self.query
            .add_event_listener_with_callback("change", &callback)
            .ok()?;

        let query = self.query.clone();
        Some(Disposer::new(move || {
            let _ = query.remove_event_listener_with_callback("change", &callback);
        }))
    }
}

/// Samples and watches the OS preference on behalf of `ThemeState`.
#[derive(Clone)]
pub struct SystemPreferenceWatcher {
    source: Rc<dyn ColorSchemeSource>,
    storage: PreferenceStorage,
}

impl SystemPreferenceWatcher {
    pub fn new(source: Rc<dyn ColorSchemeSource>, storage: PreferenceStorage) -> Self {
        Self { source, storage }
    }

    /// Dark when the OS prefers dark, light otherwise, `None` when unknown.
    pub fn current_system_preference(&self) -> Option<Theme> {
        self.source.prefers_dark().map(Theme::from_prefers_dark)
    }

    /// Call `on_change` after each OS switch while no explicit choice is stored.
    pub fn watch(&self, on_change: impl Fn(Theme) + 'static) -> Disposer {
        let storage = self.storage.clone();
        let handler: SchemeHandler = Rc::new(move |prefers_dark| {
            let proposed = Theme::from_prefers_dark(prefers_dark);
            if let Some(stored) = storage.load() {
                debug!("system prefers {proposed}; keeping stored {stored}");
                return;
            }
            debug!("following system preference: {proposed}");
            on_change(proposed);
        });
        self.source.listen(handler).unwrap_or_else(|| {
            debug!("color-scheme changes cannot be observed here");
            Disposer::noop()
        })
    }
}
