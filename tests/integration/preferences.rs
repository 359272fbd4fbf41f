//! Display preference persistence

use super::test_utils::with_xdg_env;
use design_modifiers::preferences::{
    DisplayPreferences, FilePreferenceStore, PreferenceStore, Theme,
};
use tempfile::TempDir;

#[test]
fn test_default_location_under_config_home() {
    let env_dir = TempDir::new().unwrap();
    with_xdg_env(&env_dir, || {
        let store = FilePreferenceStore::default_location().unwrap();
        assert!(store.path().starts_with(env_dir.path()));
        assert!(store.path().ends_with("preferences.toml"));
    });
}

#[test]
fn test_saved_theme_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.toml");

    let store = FilePreferenceStore::open(Some(path.as_path())).unwrap();
    let initial = DisplayPreferences::read_once(&store, Theme::Light).unwrap();
    assert_eq!(initial.theme, Theme::Light);
    store.save(&initial.toggled()).unwrap();

    let reopened = FilePreferenceStore::open(Some(path.as_path())).unwrap();
    let prefs = DisplayPreferences::read_once(&reopened, Theme::Light).unwrap();
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
fn test_corrupt_preferences_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "theme = \"sepia\"\n").unwrap();

    let store = FilePreferenceStore::new(&path);
    let err = DisplayPreferences::read_once(&store, Theme::Light).unwrap_err();
    assert!(err.to_string().contains("Preference error"));
}
