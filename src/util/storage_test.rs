use super::*;

const KEY: &str = "user-theme";

fn storage(store: MemoryStore) -> (Rc<MemoryStore>, PreferenceStorage) {
    let store = Rc::new(store);
    let prefs = PreferenceStorage::new(store.clone(), KEY);
    (store, prefs)
}

#[test]
fn load_is_none_when_key_absent() {
    let (_store, prefs) = storage(MemoryStore::new());
    assert_eq!(prefs.load(), None);
}

#[test]
fn load_reads_valid_values() {
    let (_store, prefs) = storage(MemoryStore::new().with_item(KEY, "light"));
    assert_eq!(prefs.load(), Some(Theme::Light));
}

#[test]
fn load_treats_malformed_value_as_absent() {
    for bad in ["blue", "Light", "", "{\"theme\":\"dark\"}"] {
        let (_store, prefs) = storage(MemoryStore::new().with_item(KEY, bad));
        assert_eq!(prefs.load(), None, "{bad:?} should read as absent");
    }
}

#[test]
fn save_writes_literal_name_under_key() {
    let (store, prefs) = storage(MemoryStore::new());
    prefs.save(Theme::Dark);
    assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some("dark"));
    prefs.save(Theme::Light);
    assert_eq!(prefs.load(), Some(Theme::Light));
}

#[test]
fn clear_removes_choice() {
    let (store, prefs) = storage(MemoryStore::new().with_item(KEY, "dark"));
    prefs.clear();
    assert_eq!(store.get_item(KEY).unwrap(), None);
    assert_eq!(prefs.load(), None);
}

#[test]
fn custom_key_is_respected() {
    let store = Rc::new(MemoryStore::new());
    let prefs = PreferenceStorage::new(store.clone(), "app-theme");
    prefs.save(Theme::Light);
    assert_eq!(prefs.key(), "app-theme");
    assert_eq!(store.get_item(KEY).unwrap(), None);
    assert_eq!(store.get_item("app-theme").unwrap().as_deref(), Some("light"));
}

// =============================================================
// Unavailable storage
// =============================================================

#[test]
fn unavailable_store_degrades_silently() {
    let prefs = PreferenceStorage::new(Rc::new(UnavailableStore), KEY);
    assert_eq!(prefs.load(), None);
    prefs.save(Theme::Light);
    prefs.clear();
}

#[test]
fn try_save_reports_unavailable_storage() {
    let prefs = PreferenceStorage::new(Rc::new(UnavailableStore), KEY);
    assert!(matches!(
        prefs.try_save(Theme::Dark),
        Err(ThemeError::StorageUnavailable(_))
    ));
}
