use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key for the persisted session credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the persisted locale preference.
pub const LANGUAGE_KEY: &str = "language";

/// Opaque persistent key-value slot backing the credential and locale
/// preference. Single shared mutable slot, last writer wins.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage. The embedding application substitutes a durable
/// implementation; this one backs tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .expect("storage lock poisoned")
            .remove(key);
    }
}
