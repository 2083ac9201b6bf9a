use super::*;
use crate::util::storage::MemoryStore;

fn watcher(source: Rc<dyn ColorSchemeSource>, stored: Option<&str>) -> SystemPreferenceWatcher {
    let mut store = MemoryStore::new();
    if let Some(value) = stored {
        store = store.with_item("user-theme", value);
    }
    SystemPreferenceWatcher::new(source, PreferenceStorage::new(Rc::new(store), "user-theme"))
}

fn recorded(w: &SystemPreferenceWatcher) -> (Rc<RefCell<Vec<Theme>>>, Disposer) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let d = w.watch(move |t| sink.borrow_mut().push(t));
    (seen, d)
}

// =============================================================
// current_system_preference
// =============================================================

#[test]
fn current_preference_maps_signal() {
    assert_eq!(
        watcher(Rc::new(ManualColorScheme::new(true)), None).current_system_preference(),
        Some(Theme::Dark)
    );
    assert_eq!(
        watcher(Rc::new(ManualColorScheme::new(false)), None).current_system_preference(),
        Some(Theme::Light)
    );
}

#[test]
fn current_preference_unknown_without_signal() {
    assert_eq!(watcher(Rc::new(NoColorScheme), None).current_system_preference(), None);
}

// =============================================================
// watch
// =============================================================

#[test]
fn watch_follows_os_when_nothing_stored() {
    let scheme = ManualColorScheme::new(true);
    let w = watcher(Rc::new(scheme.clone()), None);
    let (seen, _d) = recorded(&w);

    assert!(seen.borrow().is_empty(), "watch must not replay");
    scheme.emit(false);
    scheme.emit(true);
    assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
}

#[test]
fn watch_ignores_os_when_choice_stored() {
    let scheme = ManualColorScheme::new(true);
    let w = watcher(Rc::new(scheme.clone()), Some("dark"));
    let (seen, _d) = recorded(&w);

    scheme.emit(false);
    assert!(seen.borrow().is_empty());
}

#[test]
fn watch_treats_malformed_stored_value_as_absent() {
    let scheme = ManualColorScheme::new(true);
    let w = watcher(Rc::new(scheme.clone()), Some("blue"));
    let (seen, _d) = recorded(&w);

    scheme.emit(false);
    assert_eq!(*seen.borrow(), vec![Theme::Light]);
}

#[test]
fn watch_disposer_is_idempotent_and_detaches() {
    let scheme = ManualColorScheme::new(true);
    let w = watcher(Rc::new(scheme.clone()), None);
    let (seen, mut d) = recorded(&w);
    assert_eq!(scheme.listener_count(), 1);

    d.dispose();
    d.dispose();
    assert_eq!(scheme.listener_count(), 0);
    scheme.emit(false);
    assert!(seen.borrow().is_empty());
}

#[test]
fn watch_without_signal_returns_inert_disposer() {
    let w = watcher(Rc::new(NoColorScheme), None);
    let (_seen, mut d) = recorded(&w);
    assert!(!d.is_active());
    d.dispose();
}

#[test]
fn dispose_one_watch_keeps_the_other() {
    let scheme = ManualColorScheme::new(true);
    let w = watcher(Rc::new(scheme.clone()), None);
    let (first, mut d1) = recorded(&w);
    let (second, _d2) = recorded(&w);

    d1.dispose();
    scheme.emit(false);
    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![Theme::Light]);
}
