//! Display mode persistence across app restarts.

use taskhub_engine::{
    App, DisplayMode, DisplayModeHints, DisplayModeSource, PreferenceStore, Settings,
    resolve_display_mode,
};

fn restart(store: &PreferenceStore) -> App {
    let saved = store
        .load()
        .expect("readable preference")
        .map(|pref| pref.display_mode);
    let (display_mode, _) = resolve_display_mode(&DisplayModeHints {
        preference: saved,
        ..DisplayModeHints::default()
    });
    App::with_settings(Settings {
        display_mode,
        preferences: Some(store.clone()),
        ..Settings::default()
    })
}

#[test]
fn toggled_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::in_dir(dir.path());

    let mut first = restart(&store);
    assert_eq!(first.display_mode(), DisplayMode::Light);
    first.toggle_display_mode();
    first.create_task();
    drop(first);

    let second = restart(&store);
    assert_eq!(second.display_mode(), DisplayMode::Dark);
    assert_eq!(second.counter().get(), 0);
}

#[test]
fn saved_preference_outranks_config_and_environment() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::in_dir(dir.path());
    store.save(DisplayMode::Light).unwrap();

    let hints = DisplayModeHints {
        preference: store.load().unwrap().map(|pref| pref.display_mode),
        config: Some(DisplayMode::Dark),
        env: Some("dark".to_string()),
        colorfgbg: Some("15;0".to_string()),
    };
    assert_eq!(
        resolve_display_mode(&hints),
        (DisplayMode::Light, DisplayModeSource::Preference)
    );
}

#[test]
fn unwritable_store_keeps_the_toggle() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut app = App::with_settings(Settings {
        preferences: Some(PreferenceStore::in_dir(&blocker.join("nested"))),
        ..Settings::default()
    });
    app.toggle_display_mode();
    assert_eq!(app.display_mode(), DisplayMode::Dark);
}
