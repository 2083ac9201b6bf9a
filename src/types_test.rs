use super::*;

#[test]
fn navigation_item_omits_missing_badge() {
    let item = NavigationItem::new("home", "Home", "/", "home");
    let json = serde_json::to_value(&item).unwrap();
    assert!(json.get("badge").is_none());

    let parsed: NavigationItem =
        serde_json::from_str(r#"{"id":"a","label":"A","url":"/a","icon":"x"}"#).unwrap();
    assert!(parsed.badge.is_none());
}

#[test]
fn navigation_item_with_badge() {
    let item = NavigationItem::new("inbox", "Inbox", "/inbox", "mail").with_badge("3");
    assert_eq!(item.badge.as_deref(), Some("3"));
    assert_eq!(serde_json::to_value(&item).unwrap()["badge"], "3");
}

#[test]
fn breadcrumb_current_has_no_url() {
    assert_eq!(Breadcrumb::current("Settings").url, None);
    assert_eq!(Breadcrumb::link("Home", "/").url.as_deref(), Some("/"));
}

#[test]
fn theme_change_detail_matches_event_shape() {
    let detail = ThemeChangeDetail { theme: Theme::Light };
    assert_eq!(
        serde_json::to_string(&detail).unwrap(),
        r#"{"theme":"light"}"#
    );
}

#[test]
fn user_menu_action_parses() {
    let action: UserMenuAction = serde_json::from_str(r#"{"action":"logout"}"#).unwrap();
    assert_eq!(action.action, "logout");
}

#[test]
fn default_user_menu_ends_with_logout() {
    let menu = default_user_menu();
    let actions: Vec<&str> = menu.iter().map(|(_, a)| a.action.as_str()).collect();
    assert_eq!(actions, vec!["profile", "settings", "logout"]);
    assert_eq!(
        serde_json::to_string(&menu[2].1).unwrap(),
        r#"{"action":"logout"}"#
    );
}

#[test]
fn default_navigation_starts_at_root() {
    let items = default_navigation();
    assert_eq!(items[0].url, "/");
    assert!(items.iter().any(|i| i.url == "/settings"));
}
