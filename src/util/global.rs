//! Window-level theme accessors for scripts outside the Rust module graph.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rust callers use `ThemeState::subscribe` directly. `GlobalAccessors` wraps
//! one owned `ThemeState` for everyone else: it backs `window.toggleTheme`,
//! `window.getCurrentTheme` and `window.setTheme`, and rebroadcasts every
//! change as a `themechange` event whose `detail` is `{ theme }`.
//!
//! Installation is guarded: a second `initialize` attaches nothing.

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::error::ThemeError;
use crate::state::{Disposer, Theme, ThemeState};
use crate::types::ThemeChangeDetail;

/// Destination for theme change notifications.
pub trait ThemeEventSink {
    fn dispatch(&self, event_name: &str, detail: &ThemeChangeDetail) -> Result<(), ThemeError>;
}

/// Drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvents;

impl ThemeEventSink for NoEvents {
    fn dispatch(&self, _event_name: &str, _detail: &ThemeChangeDetail) -> Result<(), ThemeError> {
        Ok(())
    }
}

/// Keeps dispatched notifications in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingEvents {
    events: Rc<RefCell<Vec<(String, ThemeChangeDetail)>>>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, ThemeChangeDetail)> {
        self.events.borrow().clone()
    }

    pub fn themes(&self) -> Vec<Theme> {
        self.events.borrow().iter().map(|(_, d)| d.theme).collect()
    }
}

impl ThemeEventSink for RecordingEvents {
    fn dispatch(&self, event_name: &str, detail: &ThemeChangeDetail) -> Result<(), ThemeError> {
        self.events
            .borrow_mut()
            .push((event_name.to_owned(), *detail));
        Ok(())
    }
}

/// Dispatches a `CustomEvent` on `window`.
#[cfg(feature = "csr")]
pub struct WindowEvents {
    window: web_sys::Window,
}

#[cfg(feature = "csr")]
impl WindowEvents {
    pub fn new() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::EnvironmentUnavailable("window"))?;
        Ok(Self { window })
    }
}

#[cfg(feature = "csr")]
impl ThemeEventSink for WindowEvents {
    fn dispatch(&self, event_name: &str, detail: &ThemeChangeDetail) -> Result<(), ThemeError> {
        use wasm_bindgen::JsValue;

        let unavailable = |_| ThemeError::EnvironmentUnavailable("CustomEvent");
        let payload = js_sys::Object::new();
        js_sys::Reflect::set(
            &payload,
            &JsValue::from_str("theme"),
            &JsValue::from_str(detail.theme.as_str()),
        )
        .map_err(unavailable)?;

        let init = web_sys::CustomEventInit::new();
        init.set_detail(&payload);
        let event = web_sys::CustomEvent::new_with_event_init_dict(event_name, &init)
            .map_err(unavailable)?;
        self.window.dispatch_event(&event).map_err(unavailable)?;
        Ok(())
    }
}

pub struct GlobalAccessors {
    state: ThemeState,
    events: Rc<dyn ThemeEventSink>,
    event_name: String,
    notification: RefCell<Option<Disposer>>,
    #[cfg(feature = "csr")]
    window_bound: std::cell::Cell<bool>,
}

impl GlobalAccessors {
    pub fn new(state: ThemeState, events: Rc<dyn ThemeEventSink>, event_name: impl Into<String>) -> Self {
        Self {
            state,
            events,
            event_name: event_name.into(),
            notification: RefCell::new(None),
            #[cfg(feature = "csr")]
            window_bound: std::cell::Cell::new(false),
        }
    }

    pub fn toggle_theme(&self) -> Theme {
        self.state.toggle()
    }

    pub fn get_current_theme(&self) -> Theme {
        self.state.get()
    }

    /// Set by name; `None` for anything other than `"dark"` or `"light"`.
    pub fn set_theme(&self, name: &str) -> Option<Theme> {
        match self.state.set_named(name) {
            Ok(theme) => Some(theme),
            Err(err) => {
                debug!("setTheme rejected: {err}");
                None
            }
        }
    }

    pub fn is_installed(&self) -> bool {
        self.notification.borrow().is_some()
    }

    /// Attach the change broadcaster. Returns `false` if already attached.
    ///
    /// The broadcaster fires once right away with the current theme.
    pub fn initialize(&self) -> bool {
        if self.is_installed() {
            debug!("theme accessors already installed");
            return false;
        }
        let events = Rc::clone(&self.events);
        let event_name = self.event_name.clone();
        let subscription = self.state.subscribe(move |theme| {
            if let Err(err) = events.dispatch(&event_name, &ThemeChangeDetail { theme }) {
                warn!("{event_name} not delivered: {err}");
            }
        });
        *self.notification.borrow_mut() = Some(subscription);
        true
    }

    /// Detach the change broadcaster; `initialize` may be called again afterwards.
    pub fn uninstall(&self) {
        let subscription = self.notification.borrow_mut().take();
        if let Some(mut subscription) = subscription {
            subscription.dispose();
        }
    }
}

#[cfg(feature = "csr")]
impl GlobalAccessors {
    /// Bind `toggleTheme`, `getCurrentTheme` and `setTheme` on `window`.
    ///
    /// Returns `Ok(false)` when already bound. The bound functions keep this
    /// instance alive for the rest of the page session.
    pub fn expose_on_window(self: &Rc<Self>) -> Result<bool, ThemeError> {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        if self.window_bound.get() {
            return Ok(false);
        }
        let window = web_sys::window().ok_or(ThemeError::EnvironmentUnavailable("window"))?;

        let this = Rc::clone(self);
        let toggle = Closure::<dyn Fn() -> JsValue>::new(move || {
            JsValue::from_str(this.toggle_theme().as_str())
        });
        let this = Rc::clone(self);
        let current = Closure::<dyn Fn() -> JsValue>::new(move || {
            JsValue::from_str(this.get_current_theme().as_str())
        });
        let this = Rc::clone(self);
        let set = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |name: JsValue| {
            name.as_string()
                .and_then(|name| this.set_theme(&name))
                .map_or(JsValue::NULL, |theme| JsValue::from_str(theme.as_str()))
        });

        for (name, function) in [
            ("toggleTheme", toggle.into_js_value()),
            ("getCurrentTheme", current.into_js_value()),
            ("setTheme", set.into_js_value()),
        ] {
            js_sys::Reflect::set(&window, &JsValue::from_str(name), &function)
                .map_err(|_| ThemeError::EnvironmentUnavailable("window"))?;
        }
        self.window_bound.set(true);
        Ok(true)
    }
}
