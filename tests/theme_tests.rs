//! Integration tests for theme selection and persistence

use jsonsmith::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore, THEME_KEY,
};
use jsonsmith::theme::{ThemeController, theme_definition};
use jsonsmith::types::ThemeMode;

mod initial_tests {
    use super::*;

    #[test]
    fn test_ambient_dark_without_saved_value() {
        let theme = ThemeController::initial(MemoryPreferenceStore::new(), true);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_light_without_saved_value_or_dark_ambient() {
        let theme = ThemeController::initial(MemoryPreferenceStore::new(), false);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_saved_value_beats_ambient() {
        let theme = ThemeController::initial(MemoryPreferenceStore::with_value(THEME_KEY, "light"), true);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_saved_value_falls_back_to_ambient() {
        let theme = ThemeController::initial(MemoryPreferenceStore::with_value(THEME_KEY, "sepia"), true);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }
}

mod toggle_tests {
    use super::*;

    #[test]
    fn test_toggle_persists_new_mode() {
        let mut theme = ThemeController::initial(MemoryPreferenceStore::new(), true);

        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("light"));

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_toggle_flips_when_store_rejects_write() {
        let mut theme = ThemeController::initial(ReadOnlyStore, false);

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_ambient_reading_does_not_override_saved_choice() {
        let mut theme = ThemeController::initial(MemoryPreferenceStore::with_value(THEME_KEY, "light"), false);
        assert_eq!(theme.adopt_ambient(true), ThemeMode::Light);

        let mut fresh = ThemeController::initial(MemoryPreferenceStore::new(), false);
        assert_eq!(fresh.adopt_ambient(true), ThemeMode::Dark);
        assert_eq!(fresh.store().get(THEME_KEY), None);
    }

    #[test]
    fn test_root_class_follows_mode() {
        assert!(theme_definition(ThemeMode::Dark).root_class.contains("dark"));
        assert!(!theme_definition(ThemeMode::Light).root_class.contains("dark"));
    }
}

mod file_store_tests {
    use super::*;

    #[test]
    fn test_choice_survives_restart() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut theme = ThemeController::initial(FilePreferenceStore::new(dir.path()), false);
        theme.toggle();

        let restarted = ThemeController::initial(FilePreferenceStore::new(dir.path()), false);
        assert_eq!(restarted.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FilePreferenceStore::new(dir.path().join("not-yet-created"));

        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").expect("Failed to write preference");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
