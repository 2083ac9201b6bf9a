#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::store::{Disposer, ReadableStore, Store};

/// Access level shown next to the user's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Editor,
    Viewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        };
        f.write_str(label)
    }
}

/// Presence indicator for the user badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    Online,
    Offline,
    Away,
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PresenceStatus::Online => "Online",
            PresenceStatus::Offline => "Offline",
            PresenceStatus::Away => "Away",
        };
        f.write_str(label)
    }
}

/// The signed-in user as displayed by the dashboard chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL; `None` falls back to initials.
    pub avatar: Option<String>,
    pub role: Role,
    pub status: PresenceStatus,
}

impl User {
    /// Static placeholder record used until real authentication exists.
    pub fn mock() -> Self {
        Self {
            id: "1".to_owned(),
            name: "Mike".to_owned(),
            email: "mike@example.com".to_owned(),
            avatar: Some("https://example.com/avatars/mike.png".to_owned()),
            role: Role::Admin,
            status: PresenceStatus::Online,
        }
    }

    /// Up to two uppercase initials from the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Read-only store over the current user. There is no mutation API.
#[derive(Clone)]
pub struct UserStore {
    user: ReadableStore<User>,
}

impl UserStore {
    pub fn new(user: User) -> Self {
        Self {
            user: Store::new(user).readonly(),
        }
    }

    pub fn mock() -> Self {
        Self::new(User::mock())
    }

    pub fn get(&self) -> User {
        self.user.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&User) + 'static) -> Disposer {
        self.user.subscribe(callback)
    }
}
