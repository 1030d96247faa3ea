//! End-to-end persistence through a mounted provider.

mod common;

use std::rc::Rc;

use acme_constant::app::THEME_STORAGE_KEY;
use acme_constant::theme;
use acme_core::{
    use_colors, App, ColorProvider, KeyValueStorage, MemoryStorage, RestoreOutcome, SqliteStorage,
    ThemeSlot,
};
use common::{capture_logs, data_dir, mount_sqlite};

#[test]
fn test_sqlite_round_trip_across_reopen() {
    let dir = data_dir();
    {
        let provider = mount_sqlite(App::Mobile, &dir);
        assert_eq!(provider.restore_outcome(), Some(RestoreOutcome::Absent));
        assert_eq!(provider.persistence_backend(), Some("sqlite"));
        provider.access().set_colors.set(theme::mobile_dark());
    }

    let provider = mount_sqlite(App::Mobile, &dir);
    assert_eq!(provider.restore_outcome(), Some(RestoreOutcome::Restored));
    assert_eq!(provider.handle().read(), theme::mobile_dark());
}

#[test]
fn test_default_seeded_on_first_mount() {
    let dir = data_dir();
    let provider = mount_sqlite(App::Mobile, &dir);
    drop(provider);

    let storage = SqliteStorage::open_at(dir.path()).unwrap();
    let raw = storage.get(THEME_STORAGE_KEY).unwrap().unwrap();
    let stored: acme_core::ColorTheme = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, theme::mobile_light());
}

#[test]
fn test_slot_edit_survives_restart() {
    let dir = data_dir();
    {
        let provider = mount_sqlite(App::Mobile, &dir);
        provider
            .handle()
            .update(|t| t.set(ThemeSlot::Primary, "#FF0000"));
    }
    let provider = mount_sqlite(App::Mobile, &dir);
    let colors = use_colors(App::Mobile, Some(provider.handle())).unwrap().colors;
    assert_eq!(colors.primary, "#FF0000");
    assert_eq!(colors.background, theme::mobile_light().background);
}

#[test]
fn test_malformed_record_is_logged_and_default_kept() {
    let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "{not json"));
    let (provider, lines) = capture_logs(|| {
        ColorProvider::builder(App::Mobile)
            .with_storage(Rc::clone(&storage))
            .mount()
    });

    assert_eq!(provider.restore_outcome(), Some(RestoreOutcome::Failed));
    assert_eq!(provider.handle().read(), theme::mobile_light());
    assert!(
        lines.iter().any(|l| l.starts_with("[WARN]") && l.contains("Error loading theme")),
        "missing warning in {:?}",
        lines
    );
    assert_eq!(
        storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_write_failure_is_logged_and_memory_kept() {
    let storage = Rc::new(MemoryStorage::new());
    let provider = ColorProvider::builder(App::Mobile)
        .with_storage(Rc::clone(&storage))
        .mount();
    storage.set_fail_writes(true);

    let (_, lines) = capture_logs(|| provider.access().set_colors.set(theme::mobile_dark()));

    assert_eq!(provider.handle().read(), theme::mobile_dark());
    assert!(lines.iter().any(|l| l.contains("Error saving theme")));

    storage.set_fail_writes(false);
    let stored: acme_core::ColorTheme =
        serde_json::from_str(&storage.get(THEME_STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored, theme::mobile_light());
}

#[test]
fn test_unchanged_write_not_persisted() {
    let storage = Rc::new(MemoryStorage::new());
    let provider = ColorProvider::builder(App::Mobile)
        .with_storage(Rc::clone(&storage))
        .mount();
    let writes = storage.writes();
    provider.access().set_colors.set(theme::mobile_light());
    assert_eq!(storage.writes(), writes);
    provider.access().set_colors.set(theme::mobile_dark());
    assert_eq!(storage.writes(), writes + 1);
}
