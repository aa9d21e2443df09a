//! PreferenceStore: light/dark theme persistence
//!
//! The theme is a single flag under one storage key. Reading never fails:
//! anything other than `"dark"` (including a missing key or an unreadable
//! store) is light. Writes are best-effort.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::THEME_STORAGE_KEY;
use crate::error::PortfolioError;
use crate::{log_debug, log_warn};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Lenient parse used for stored values: only an exact "dark" is dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(PortfolioError::Config(format!("unknown theme {:?}", other))),
        }
    }
}

// =============================================================================
// Platform seams
// =============================================================================

/// Persistent string key-value storage (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PortfolioError>;
}

/// Where the visual mode flag lands (the document root in the browser)
pub trait ThemeSurface {
    fn set_dark(&mut self, dark: bool) -> Result<(), PortfolioError>;
}

/// In-memory store for native use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Surface that remembers the dark flag and how many times it was applied
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub dark: bool,
    pub applications: usize,
}

impl ThemeSurface for RecordingSurface {
    fn set_dark(&mut self, dark: bool) -> Result<(), PortfolioError> {
        self.dark = dark;
        self.applications += 1;
        Ok(())
    }
}

// =============================================================================
// PreferenceStore
// =============================================================================

pub struct PreferenceStore<S: KeyValueStore, R: ThemeSurface> {
    storage: S,
    surface: R,
    key: String,
}

impl<S: KeyValueStore, R: ThemeSurface> PreferenceStore<S, R> {
    pub fn new(storage: S, surface: R) -> Self {
        Self::with_key(storage, surface, THEME_STORAGE_KEY)
    }

    pub fn with_key(storage: S, surface: R, key: &str) -> Self {
        Self {
            storage,
            surface,
            key: key.to_string(),
        }
    }

    /// Read the persisted preference. Defaults to light.
    pub fn load(&self) -> ThemePreference {
        match self.storage.get(&self.key) {
            Ok(value) => ThemePreference::from_stored(value.as_deref()),
            Err(e) => {
                log_debug!("PreferenceStore", "read failed, using light: {}", e);
                ThemePreference::Light
            }
        }
    }

    /// Apply the visual mode without persisting
    pub fn apply(&mut self, preference: ThemePreference) {
        if let Err(e) = self.surface.set_dark(preference.is_dark()) {
            log_warn!("PreferenceStore", "could not apply {} mode: {}", preference, e);
        }
    }

    /// Flip the preference, persist it and apply it
    pub fn toggle(&mut self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.persist(next);
        self.apply(next);
        next
    }

    /// Persist without touching the surface
    pub fn persist(&mut self, preference: ThemePreference) {
        if let Err(e) = self.storage.set(&self.key, preference.as_str()) {
            log_warn!("PreferenceStore", "could not persist {}: {}", preference, e);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage that fails every call
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PortfolioError> {
            Err(PortfolioError::Platform("storage disabled".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PortfolioError> {
            Err(PortfolioError::Platform("storage disabled".into()))
        }
    }

    fn store(storage: MemoryStore) -> PreferenceStore<MemoryStore, RecordingSurface> {
        PreferenceStore::new(storage, RecordingSurface::default())
    }

    // -------------------------------------------------------------------------
    // Requirement 1: load() defaults to light
    // -------------------------------------------------------------------------
    #[test]
    fn test_load_empty_storage_is_light() {
        assert_eq!(store(MemoryStore::new()).load(), ThemePreference::Light);
    }

    #[test]
    fn test_load_stored_dark() {
        let prefs = store(MemoryStore::with_entry("theme", "dark"));
        assert_eq!(prefs.load(), ThemePreference::Dark);
    }

    #[test]
    fn test_load_unrecognized_is_light() {
        for value in ["light", "DARK", "", "purple", " dark"] {
            let prefs = store(MemoryStore::with_entry("theme", value));
            assert_eq!(prefs.load(), ThemePreference::Light, "value {:?}", value);
        }
    }

    #[test]
    fn test_load_unreadable_storage_is_light() {
        let prefs = PreferenceStore::new(BrokenStore, RecordingSurface::default());
        assert_eq!(prefs.load(), ThemePreference::Light);
    }

    // -------------------------------------------------------------------------
    // Requirement 2: toggle flips, persists and applies
    // -------------------------------------------------------------------------
    #[test]
    fn test_toggle_light_to_dark() {
        let mut prefs = store(MemoryStore::new());
        let next = prefs.toggle(ThemePreference::Light);

        assert_eq!(next, ThemePreference::Dark);
        assert_eq!(prefs.storage().entry("theme"), Some("dark"));
        assert!(prefs.surface().dark);
    }

    #[test]
    fn test_toggle_dark_to_light() {
        let mut prefs = store(MemoryStore::with_entry("theme", "dark"));
        let next = prefs.toggle(ThemePreference::Dark);

        assert_eq!(next, ThemePreference::Light);
        assert_eq!(prefs.storage().entry("theme"), Some("light"));
        assert!(!prefs.surface().dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut prefs = store(MemoryStore::new());
        let once = prefs.toggle(ThemePreference::Light);
        let twice = prefs.toggle(once);

        assert_eq!(twice, ThemePreference::Light);
        assert_eq!(prefs.load(), ThemePreference::Light);
        assert_eq!(prefs.surface().applications, 2);
    }

    #[test]
    fn test_toggle_survives_broken_storage() {
        let mut prefs = PreferenceStore::new(BrokenStore, RecordingSurface::default());
        assert_eq!(prefs.toggle(ThemePreference::Light), ThemePreference::Dark);
        assert!(prefs.surface().dark);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: custom key
    // -------------------------------------------------------------------------
    #[test]
    fn test_custom_key() {
        let mut prefs =
            PreferenceStore::with_key(MemoryStore::new(), RecordingSurface::default(), "ui-theme");
        prefs.toggle(ThemePreference::Light);
        assert_eq!(prefs.storage().entry("ui-theme"), Some("dark"));
        assert_eq!(prefs.storage().entry("theme"), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
