use super::*;
use crate::util::storage::MemoryStore;

fn config(default_dark: bool, persist: bool) -> ThemeConfig {
    ThemeConfig { default_dark, persist_in_local_storage: persist }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_round_trips_through_storage_strings() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
    assert_eq!(Theme::parse("garbage"), Theme::Light);
}

#[test]
fn flipped_swaps_variants() {
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert!(Theme::Light.flipped().is_dark());
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn first_visit_uses_default_and_persists_it() {
    let mut store = MemoryStore::new();
    let manager = ThemeManager::init(&mut store, &config(true, true));
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_after_first_visit_persists_light() {
    let mut store = MemoryStore::new();
    let mut manager = ThemeManager::init(&mut store, &config(true, true));
    assert_eq!(manager.toggle(&mut store), Theme::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(manager.toggle(&mut store), Theme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn saved_light_overrides_dark_default() {
    let mut store = MemoryStore::with(STORAGE_KEY, "light");
    let manager = ThemeManager::init(&mut store, &config(true, true));
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn saved_dark_overrides_light_default() {
    let mut store = MemoryStore::with(STORAGE_KEY, "dark");
    let manager = ThemeManager::init(&mut store, &config(false, true));
    assert!(manager.current().is_dark());
}

#[test]
fn persistence_disabled_leaves_store_empty_on_load() {
    let mut store = MemoryStore::new();
    let mut manager = ThemeManager::init(&mut store, &config(false, false));
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(store.get(STORAGE_KEY), None);

    manager.toggle(&mut store);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn empty_saved_value_falls_back_to_default() {
    let mut store = MemoryStore::with(STORAGE_KEY, "");
    let manager = ThemeManager::init(&mut store, &config(true, true));
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}
