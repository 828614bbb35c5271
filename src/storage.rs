//! String key/value stores behind the quiz persistence.
//!
//! Writes never fail loudly: a store that cannot persist logs a warning and
//! the quiz keeps running from memory.

use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

// Key layout, shared by every store.
pub const SHOW_DISTRACTION_NOTICE_KEY: &str = "showDistractionNotice";
pub const EXPLAIN_API_KEY_KEY: &str = "geminiApiKey";

pub fn quiz_state_key(cert_id: &str) -> String {
    if cert_id.is_empty() {
        "quizState".to_string()
    } else {
        format!("quizState_{cert_id}")
    }
}

pub fn distraction_count_key(cert_id: &str) -> String {
    format!("distractionCount_{cert_id}")
}

pub fn proctored_key(cert_id: &str) -> String {
    format!("proctoredMode_{cert_id}")
}

pub fn get_flag(store: &dyn KeyValueStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

pub fn set_flag(store: &mut dyn KeyValueStore, key: &str, value: bool) {
    if value {
        store.set(key, "true");
    } else {
        store.remove(key);
    }
}

#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON file holding every key; rewritten on each change.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable store {}: {err}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize store: {err}");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("could not write {}: {err}", self.path.display());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

/// The browser's `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; progress will not survive a reload");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage.setItem({key}) failed: {err:?}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

/// Store used by the running application on this platform.
pub fn platform_store(config: &crate::config::AppConfig) -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Box::new(LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStore::open(&config.store_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_per_certification() {
        assert_eq!(quiz_state_key("dva-c02"), "quizState_dva-c02");
        assert_eq!(quiz_state_key(""), "quizState");
        assert_eq!(distraction_count_key("x"), "distractionCount_x");
        assert_eq!(proctored_key("x"), "proctoredMode_x");
    }

    #[test]
    fn flags_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!get_flag(&store, "f"));
        set_flag(&mut store, "f", true);
        assert!(get_flag(&store, "f"));
        set_flag(&mut store, "f", false);
        assert!(store.is_empty());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        store.set("a", "1");
        store.set("b", "2");
        store.remove("a");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("a"), None);
        assert_eq!(reopened.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("a"), None);
        store.set("a", "1");
        assert_eq!(FileStore::open(&path).get("a").as_deref(), Some("1"));
    }
}
