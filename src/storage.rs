//! Key-value persistence collaborator
//!
//! LocalStorage on the web, an in-memory map for native builds and
//! tests. Storage may be absent entirely (privacy mode, disabled
//! storage); every operation is best-effort and never panics.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value; `None` if missing or the store is unavailable
    fn read(&self, key: &str) -> Option<String>;

    /// Write a value; failures are swallowed
    fn write(&self, key: &str, value: &str);
}

/// In-memory store for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("storage write failed for {key}");
            }
        }
    }
}
