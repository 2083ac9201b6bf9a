//! Display data shapes shared by the shell components and the window adapter.
//!
//! Field names match the JSON shapes used by script callers on the page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::Theme;

/// Sidebar navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    pub url: String,
    /// Icon identifier understood by the stylesheet.
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl NavigationItem {
    pub fn new(id: &str, label: &str, url: &str, icon: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            url: url.to_owned(),
            icon: icon.to_owned(),
            badge: None,
        }
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// One step of a breadcrumb trail. `url: None` marks the current page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub url: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: &str, url: &str) -> Self {
        Self {
            label: label.to_owned(),
            url: Some(url.to_owned()),
        }
    }

    pub fn current(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            url: None,
        }
    }
}

/// Payload emitted when an entry in the user menu is chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMenuAction {
    pub action: String,
}

impl UserMenuAction {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }
}

/// Entries of the user menu as `(label, action)` pairs, in display order.
pub fn default_user_menu() -> Vec<(&'static str, UserMenuAction)> {
    vec![
        ("Profile", UserMenuAction::new("profile")),
        ("Settings", UserMenuAction::new("settings")),
        ("Sign out", UserMenuAction::new("logout")),
    ]
}

/// `detail` of the `themechange` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeDetail {
    pub theme: Theme,
}

/// Default sidebar entries for the dashboard shell.
pub fn default_navigation() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("overview", "Overview", "/", "home"),
        NavigationItem::new("settings", "Settings", "/settings", "settings"),
    ]
}
