//! Theme value and the `ThemeState` holder that is its single source of truth.
//!
//! DESIGN
//! ======
//! `ThemeState` is an explicitly constructed handle (cheap `Rc` clone) passed
//! to whoever needs it. Storage, DOM, and the window surface all hang off its
//! `subscribe` stream instead of reading ambient globals.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::store::{Disposer, Store};
use crate::error::ThemeError;

/// Visual mode of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Lowercase name used for storage values and the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Map the OS "prefers dark" signal onto a theme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Exact, case-sensitive match; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Holds the current theme and notifies subscribers synchronously on change.
#[derive(Clone)]
pub struct ThemeState {
    store: Store<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    pub fn get(&self) -> Theme {
        self.store.get()
    }

    /// Replace the theme and notify subscribers in registration order.
    pub fn set(&self, theme: Theme) -> Theme {
        debug!("theme set to {theme}");
        self.store.set(theme);
        theme
    }

    /// Validate `name` and set it. On failure nothing changes and nobody is notified.
    pub fn set_named(&self, name: &str) -> Result<Theme, ThemeError> {
        let theme = name.parse::<Theme>()?;
        Ok(self.set(theme))
    }

    /// Flip dark and light, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.store.update(|current| current.toggled());
        debug!("theme toggled to {next}");
        next
    }

    /// Register `callback`; it runs immediately with the current theme and
    /// again after every `set`/`toggle`.
    pub fn subscribe(&self, callback: impl Fn(Theme) + 'static) -> Disposer {
        self.store.subscribe(move |theme| callback(*theme))
    }

    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
