use super::*;

fn accessors(initial: Theme) -> (ThemeState, RecordingEvents, GlobalAccessors) {
    let state = ThemeState::new(initial);
    let events = RecordingEvents::new();
    let globals = GlobalAccessors::new(state.clone(), Rc::new(events.clone()), "themechange");
    (state, events, globals)
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn accessors_delegate_to_state() {
    let (state, _events, globals) = accessors(Theme::Dark);
    assert_eq!(globals.get_current_theme(), Theme::Dark);
    assert_eq!(globals.toggle_theme(), Theme::Light);
    assert_eq!(state.get(), Theme::Light);
    assert_eq!(globals.set_theme("dark"), Some(Theme::Dark));
    assert_eq!(state.get(), Theme::Dark);
}

#[test]
fn set_theme_with_invalid_name_returns_none() {
    let (state, events, globals) = accessors(Theme::Dark);
    globals.initialize();

    assert_eq!(globals.set_theme("blue"), None);
    assert_eq!(state.get(), Theme::Dark);
    assert_eq!(events.themes(), vec![Theme::Dark]);
}

// =============================================================
// Notification
// =============================================================

#[test]
fn initialize_broadcasts_current_and_each_change() {
    let (_state, events, globals) = accessors(Theme::Dark);
    assert!(globals.initialize());

    globals.toggle_theme();
    globals.set_theme("light");
    assert_eq!(events.themes(), vec![Theme::Dark, Theme::Light, Theme::Light]);
    assert!(events.events().iter().all(|(name, _)| name == "themechange"));
}

#[test]
fn changes_before_initialize_are_not_broadcast() {
    let (_state, events, globals) = accessors(Theme::Dark);
    globals.toggle_theme();
    assert!(events.events().is_empty());
}

#[test]
fn initialize_twice_attaches_one_subscriber() {
    let (state, events, globals) = accessors(Theme::Dark);
    assert!(globals.initialize());
    assert!(!globals.initialize());
    assert_eq!(state.subscriber_count(), 1);

    globals.toggle_theme();
    assert_eq!(events.themes(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn uninstall_stops_broadcast_and_allows_reinstall() {
    let (state, events, globals) = accessors(Theme::Dark);
    globals.initialize();
    globals.uninstall();
    globals.uninstall();
    assert!(!globals.is_installed());
    assert_eq!(state.subscriber_count(), 0);

    globals.toggle_theme();
    assert_eq!(events.themes(), vec![Theme::Dark]);

    assert!(globals.initialize());
    assert_eq!(events.themes(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn failing_sink_does_not_block_state_changes() {
    struct Broken;
    impl ThemeEventSink for Broken {
        fn dispatch(&self, _: &str, _: &ThemeChangeDetail) -> Result<(), ThemeError> {
            Err(ThemeError::EnvironmentUnavailable("window"))
        }
    }

    let state = ThemeState::new(Theme::Dark);
    let globals = GlobalAccessors::new(state.clone(), Rc::new(Broken), "themechange");
    assert!(globals.initialize());
    assert_eq!(globals.toggle_theme(), Theme::Light);
    assert_eq!(state.get(), Theme::Light);
}

#[test]
fn no_events_sink_accepts_everything() {
    let sink = NoEvents;
    assert!(sink
        .dispatch("themechange", &ThemeChangeDetail { theme: Theme::Dark })
        .is_ok());
}
