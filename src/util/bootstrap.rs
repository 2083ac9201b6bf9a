//! Start-up wiring for the theme glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeRuntime::start` resolves the initial theme (stored choice, then OS
//! preference, then the configured default), creates the `ThemeState`, and
//! attaches DOM/storage mirroring, the OS watcher, and the window broadcaster.
//! `ThemeEnvironment` supplies the four browser seams; any seam the browser
//! cannot provide degrades to its in-memory or no-op counterpart.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use log::{debug, info};

use super::dom_sync::{DomSync, RootElement};
use super::global::{GlobalAccessors, NoEvents, ThemeEventSink};
use super::storage::{KeyValueStore, MemoryStore, PreferenceStorage};
use super::system_preference::{ColorSchemeSource, NoColorScheme, SystemPreferenceWatcher};
use crate::config::ThemeConfig;
use crate::state::{Disposer, Theme, ThemeState};

/// Resolve the start-up theme: stored choice, then OS preference, then `default`.
pub fn initialize_theme(
    storage: &PreferenceStorage,
    watcher: &SystemPreferenceWatcher,
    default: Theme,
) -> Theme {
    storage
        .load()
        .or_else(|| watcher.current_system_preference())
        .unwrap_or(default)
}

/// The browser surfaces the theme glue talks to.
#[derive(Clone)]
pub struct ThemeEnvironment {
    pub storage: Rc<dyn KeyValueStore>,
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    pub root: Option<Rc<dyn RootElement>>,
    pub events: Rc<dyn ThemeEventSink>,
}

impl ThemeEnvironment {
    /// Pure in-memory environment: memory storage, no OS signal, no DOM, no events.
    pub fn detached() -> Self {
        Self {
            storage: Rc::new(MemoryStore::new()),
            color_scheme: Rc::new(NoColorScheme),
            root: None,
            events: Rc::new(NoEvents),
        }
    }

    #[must_use]
    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: Rc<dyn ColorSchemeSource>) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: Rc<dyn RootElement>) -> Self {
        self.root = Some(root);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: Rc<dyn ThemeEventSink>) -> Self {
        self.events = events;
        self
    }
}

#[cfg(feature = "csr")]
impl ThemeEnvironment {
    /// Real browser backends, each falling back when its API is missing.
    pub fn browser(config: &ThemeConfig) -> Self {
        use log::warn;

        use super::dom_sync::DocumentRoot;
        use super::global::WindowEvents;
        use super::storage::{BrowserStorage, UnavailableStore};
        use super::system_preference::MediaQuerySource;

        let mut env = Self::detached();
        match BrowserStorage::local() {
            Ok(storage) => env.storage = Rc::new(storage),
            Err(err) => {
                warn!("{err}; theme choice will not persist");
                env.storage = Rc::new(UnavailableStore);
            }
        }
        match MediaQuerySource::new(&config.media_query) {
            Ok(source) => env.color_scheme = Rc::new(source),
            Err(err) => warn!("{err}; ignoring OS color scheme"),
        }
        match DocumentRoot::new() {
            Ok(root) => env.root = Some(Rc::new(root)),
            Err(err) => warn!("{err}; {} will not be set", config.attribute),
        }
        match WindowEvents::new() {
            Ok(events) => env.events = Rc::new(events),
            Err(err) => warn!("{err}; {} will not be dispatched", config.event_name),
        }
        env
    }
}

/// Running theme system. Owns every registration made at start-up.
///
/// Dropping the runtime leaves those registrations attached; call `shutdown`
/// to detach them.
pub struct ThemeRuntime {
    state: ThemeState,
    storage: PreferenceStorage,
    watcher: SystemPreferenceWatcher,
    accessors: Rc<GlobalAccessors>,
    registrations: Vec<Disposer>,
}

impl ThemeRuntime {
    pub fn start(config: &ThemeConfig, env: ThemeEnvironment) -> Self {
        let storage = PreferenceStorage::new(env.storage, config.storage_key.clone());
        let watcher = SystemPreferenceWatcher::new(env.color_scheme, storage.clone());
        let initial = initialize_theme(&storage, &watcher, config.default_theme);
        info!("starting theme runtime with {initial}");

        let state = ThemeState::new(initial);
        let dom_sync = DomSync::new(env.root, storage.clone(), config.attribute.clone());
        let mut registrations = vec![dom_sync.install(&state)];

        let target = state.clone();
        registrations.push(watcher.watch(move |theme| {
            target.set(theme);
        }));

        let accessors = Rc::new(GlobalAccessors::new(
            state.clone(),
            env.events,
            config.event_name.clone(),
        ));
        accessors.initialize();

        Self {
            state,
            storage,
            watcher,
            accessors,
            registrations,
        }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn accessors(&self) -> &Rc<GlobalAccessors> {
        &self.accessors
    }

    pub fn storage(&self) -> &PreferenceStorage {
        &self.storage
    }

    pub fn system_preference(&self) -> Option<Theme> {
        self.watcher.current_system_preference()
    }

    pub fn is_running(&self) -> bool {
        self.registrations.iter().any(Disposer::is_active) || self.accessors.is_installed()
    }

    /// Forget the stored choice and adopt the current OS preference, if known.
    ///
    /// Storage is left empty afterwards, so the watcher keeps following the OS.
    pub fn reset_to_system(&self) -> Theme {
        let theme = match self.watcher.current_system_preference() {
            Some(theme) => self.state.set(theme),
            None => self.state.get(),
        };
        // DomSync saved the adopted theme during `set`.
        self.storage.clear();
        theme
    }

    /// Detach DOM/storage mirroring, the OS watcher, and the broadcaster.
    pub fn shutdown(&mut self) {
        for registration in &mut self.registrations {
            registration.dispose();
        }
        self.accessors.uninstall();
        debug!("theme runtime stopped");
    }
}

#[cfg(feature = "csr")]
impl ThemeRuntime {
    /// Bind the window accessors to this runtime's state.
    pub fn expose_on_window(&self) -> Result<bool, crate::error::ThemeError> {
        self.accessors.expose_on_window()
    }
}
