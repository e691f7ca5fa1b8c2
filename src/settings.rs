//! Game settings and preferences
//!
//! Persisted separately from the best score in LocalStorage. Parse
//! failures fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Versioned storage key
pub const SETTINGS_KEY: &str = "neon_drift_settings_v1";

/// Visual preferences. None of these affect the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Faint grid overlay on the background
    pub show_grid: bool,
    /// Player movement trail
    pub trails: bool,
    /// Shadow-blur glow on entities
    pub glow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            trails: true,
            glow: true,
        }
    }
}

impl Settings {
    /// Load from storage, defaulting on absence or parse failure
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .read(SETTINGS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Persist as JSON, best-effort
    pub fn save(&self, store: &impl KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.write(SETTINGS_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_missing_or_garbage() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.write(SETTINGS_KEY, "{not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let settings = Settings {
            show_grid: false,
            trails: true,
            glow: false,
        };
        settings.save(&store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let store = MemoryStore::new();
        store.write(SETTINGS_KEY, r#"{"glow": false}"#);
        let settings = Settings::load(&store);
        assert!(!settings.glow);
        assert!(settings.show_grid);
        assert!(settings.trails);
    }
}
