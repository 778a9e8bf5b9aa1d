//! Dark/light theme state and its persisted preference.
//!
//! The saved value under [`STORAGE_KEY`] wins over the configured default.
//! When nothing is saved and persistence is enabled, the resolved theme is
//! written back on first load so later visits are stable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the `<html>` element for dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted value. Anything other than `"dark"` reads as light.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    /// Resolve the starting theme from `store` and `config`.
    pub fn init(store: &mut impl KeyValueStore, config: &ThemeConfig) -> Self {
        // An empty saved string counts as nothing saved.
        let saved = store.get(STORAGE_KEY).filter(|v| !v.is_empty());
        let current = match saved.as_deref() {
            Some(value) => Theme::parse(value),
            None => Theme::from_dark(config.default_dark),
        };
        if saved.is_none() && config.persist_in_local_storage {
            store.set(STORAGE_KEY, current.as_str());
        }
        Self { current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> Theme {
        self.current = self.current.flipped();
        store.set(STORAGE_KEY, self.current.as_str());
        self.current
    }
}
