//! Best-score tracking
//!
//! A single integer, read once at startup and rewritten whenever a run
//! beats it. Unparsable or non-finite stored values read as 0; writes
//! are best-effort.

use crate::storage::KeyValueStore;

/// Versioned storage key
pub const BEST_SCORE_KEY: &str = "neon_drift_best_score_v1";

/// The highest floored score ever achieved. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    /// Load from storage, defaulting to 0 on anything unusable
    pub fn load(store: &impl KeyValueStore) -> Self {
        let value = store
            .read(BEST_SCORE_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.floor() as u64)
            .unwrap_or(0);
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Record a finished run. Updates memory and storage only when the
    /// floored score strictly beats the current best; returns whether
    /// it did.
    pub fn record(&mut self, final_score: f64, store: &impl KeyValueStore) -> bool {
        let floored = final_score.max(0.0).floor() as u64;
        if floored <= self.value {
            return false;
        }
        self.value = floored;
        store.write(BEST_SCORE_KEY, &floored.to_string());
        log::info!("new best score {floored}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_missing_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value(), 0);
    }

    #[test]
    fn test_load_garbage_defaults_to_zero() {
        let store = MemoryStore::new();
        for raw in ["", "banana", "NaN", "inf", "-inf", "-40"] {
            store.write(BEST_SCORE_KEY, raw);
            assert_eq!(BestScore::load(&store).value(), 0, "raw {raw:?}");
        }
    }

    #[test]
    fn test_persisted_value_round_trip() {
        // Stored "150": lower run leaves it, higher run replaces it
        let store = MemoryStore::new();
        store.write(BEST_SCORE_KEY, "150");
        let mut best = BestScore::load(&store);
        assert_eq!(best.value(), 150);

        assert!(!best.record(120.0, &store));
        assert_eq!(store.read(BEST_SCORE_KEY), Some("150".to_string()));

        assert!(best.record(200.9, &store));
        assert_eq!(best.value(), 200);
        assert_eq!(store.read(BEST_SCORE_KEY), Some("200".to_string()));
    }

    #[test]
    fn test_equal_score_does_not_rewrite() {
        let store = MemoryStore::new();
        store.write(BEST_SCORE_KEY, "150");
        let mut best = BestScore::load(&store);
        assert!(!best.record(150.0, &store));
        assert_eq!(best.value(), 150);
    }

    #[test]
    fn test_monotonic_across_runs() {
        let store = MemoryStore::new();
        let mut best = BestScore::load(&store);
        let mut last = best.value();
        for score in [10.0, 5.0, 42.7, 42.7, 100.0, 3.0] {
            best.record(score, &store);
            assert!(best.value() >= last);
            last = best.value();
        }
        assert_eq!(best.value(), 100);
    }
}
