//! Namespaced key-value storage with JSON encoding
//!
//! [`Storage`] scopes every key under a configurable prefix and encodes
//! typed values as JSON over a pluggable [`Backend`]. Reads of absent or
//! malformed values fall back to caller-supplied defaults; malformed JSON
//! is swallowed, never surfaced. Persistence is best effort with no
//! durability guarantees.

/// Pluggable storage backends
pub mod backend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use backend::{Backend, FileBackend, MemoryBackend};

/// Prefix-namespaced key-value store with JSON-typed accessors
pub struct Storage {
    prefix: String,
    backend: Box<dyn Backend>,
}

impl Storage {
    /// Create a store over an explicit backend
    pub fn new(prefix: impl Into<String>, backend: Box<dyn Backend>) -> Self {
        Self {
            prefix: prefix.into(),
            backend,
        }
    }

    /// Create a store over a fresh in-memory backend
    pub fn in_memory(prefix: impl Into<String>) -> Self {
        Self::new(prefix, Box::new(MemoryBackend::new()))
    }

    /// Create a store backed by a JSON file, or in memory when the file
    /// location is unusable
    pub fn open(prefix: impl Into<String>, path: &Path) -> Self {
        Self::new(prefix, backend::open_or_memory(path))
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}:{key}", self.prefix)
    }

    /// Read a raw string value
    pub fn get(&self, key: &str) -> Option<String> {
        self.backend.get(&self.scoped(key))
    }

    /// Write a raw string value
    pub fn set(&mut self, key: &str, value: &str) {
        let scoped = self.scoped(key);
        self.backend.set(&scoped, value);
    }

    /// Remove a key if present
    pub fn remove(&mut self, key: &str) {
        let scoped = self.scoped(key);
        self.backend.remove(&scoped);
    }

    /// Remove every key under this store's prefix
    ///
    /// Keys belonging to other prefixes on a shared backend are untouched.
    pub fn clear(&mut self) {
        let scoped_prefix = format!("{}:", self.prefix);
        let owned: Vec<String> = self
            .backend
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&scoped_prefix))
            .collect();
        for key in owned {
            self.backend.remove(&key);
        }
    }

    /// Read a JSON-encoded value, substituting `fallback` when the key is
    /// absent or the stored value fails to parse
    pub fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(fallback)
    }

    /// Write a JSON-encoded value
    ///
    /// Values that fail to serialize are dropped silently, matching the
    /// store's best-effort contract.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.set(key, &raw);
        }
    }

    /// Read-modify-write a JSON-encoded value
    ///
    /// Applies `updater` to the current value (or `fallback`), persists the
    /// result, and returns it. Not atomic across concurrent callers; the
    /// single-threaded shell makes that safe in practice.
    pub fn update_json<T>(&mut self, key: &str, updater: impl FnOnce(T) -> T, fallback: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let current = self.get_json(key, fallback);
        let next = updater(current);
        self.set_json(key, &next);
        next
    }

    /// The namespace prefix applied to every key
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
