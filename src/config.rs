//! Theme glue configuration.
//!
//! Every external name (storage key, DOM attribute, event name, media query)
//! is configurable; defaults are the names page scripts already rely on.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::state::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "user-theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_EVENT_NAME: &str = "themechange";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `localStorage` key holding the explicit user choice.
    pub storage_key: String,
    /// Attribute set on `document.documentElement`.
    pub attribute: String,
    /// Name of the event dispatched on `window` after each change.
    pub event_name: String,
    /// Media query whose match means "OS prefers dark".
    pub media_query: String,
    /// Used when neither storage nor the OS expresses a preference.
    pub default_theme: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON document; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    #[must_use]
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }
}
