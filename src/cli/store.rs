//! JSON file session store
//!
//! Keeps the terminal client signed in between runs. The whole map is
//! rewritten on every change.

use crate::session::TokenStore;
use crate::types::{AppError, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store, reading existing values. A missing or unreadable file
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Ignoring corrupt session file: {}", e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if values.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| AppError::Storage(e.to_string()))?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, raw).map_err(|e| AppError::Storage(e.to_string()))
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.lock();
        if values.remove(key).is_some() {
            if let Err(e) = self.persist(&values) {
                tracing::warn!(path = %self.path.display(), "Failed to update session file: {}", e);
            }
        }
    }
}
