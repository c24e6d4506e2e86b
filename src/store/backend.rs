//! Pluggable storage backends
//!
//! A backend holds raw string entries. The file backend mirrors its entries
//! into a single JSON document on disk, flushing after every mutation;
//! flush failures are recorded rather than surfaced, keeping writes best
//! effort. When no file location is usable, callers fall back to the
//! in-memory backend.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Raw string-entry storage
pub trait Backend {
    /// Read the value stored at a key
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value at a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
    /// Remove a key if present
    fn remove(&mut self, key: &str);
    /// All stored keys in unspecified order
    fn keys(&self) -> Vec<String>;
}

/// Volatile backend holding entries in a map
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Backend persisting entries as one JSON document on disk
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    last_write_error: Option<io::Error>,
}

impl FileBackend {
    /// Open a file backend, loading any existing entries
    ///
    /// A missing file starts empty; a malformed file is treated as absent
    /// and starts empty as well.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file exists but cannot be
    /// read, or when its parent directory cannot be created.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            last_write_error: None,
        })
    }

    /// The on-disk location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The error from the most recent flush, if it failed
    pub const fn last_write_error(&self) -> Option<&io::Error> {
        self.last_write_error.as_ref()
    }

    fn flush(&mut self) {
        self.last_write_error = serde_json::to_string_pretty(&self.entries)
            .map_err(io::Error::other)
            .and_then(|text| fs::write(&self.path, text))
            .err();
    }
}

impl Backend for FileBackend {
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

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Open a file backend, falling back to memory when the location is unusable
pub fn open_or_memory(path: &Path) -> Box<dyn Backend> {
    FileBackend::open(path).map_or_else(
        |_| Box::new(MemoryBackend::new()) as Box<dyn Backend>,
        |backend| Box::new(backend) as Box<dyn Backend>,
    )
}
