//! Keyed slot stores
//!
//! A slot store maps string keys to string values, the same contract as a
//! browser's local storage. `FileSlotStore` keeps one file per key;
//! `MemorySlotStore` is an in-process map.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BasketError, BasketResult};

use super::file_io::{read_text, write_atomic};

/// Synchronous key/value storage for serialized documents
pub trait SlotStore {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn get(&self, key: &str) -> BasketResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> BasketResult<()>;

    /// Empty the slot; returns whether anything was stored
    fn remove(&self, key: &str) -> BasketResult<bool>;
}

/// One `<key>.json` file per slot inside a directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> BasketResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: &str) -> BasketResult<Option<String>> {
        read_text(self.slot_path(key)?)
    }

    fn set(&self, key: &str, value: &str) -> BasketResult<()> {
        write_atomic(self.slot_path(key)?, value)
    }

    fn remove(&self, key: &str) -> BasketResult<bool> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BasketError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Slots kept in memory; nothing touches disk
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: &str) -> BasketResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| BasketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BasketResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| BasketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BasketResult<bool> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| BasketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(slots.remove(key).is_some())
    }
}

/// Keys become file names, so path separators and dot-prefixes are refused
fn validate_key(key: &str) -> BasketResult<()> {
    if key.is_empty()
        || key.starts_with('.')
        || key.contains(|c: char| c == '/' || c == '\\')
        || key.chars().any(char::is_control)
    {
        return Err(BasketError::Storage(format!("Invalid slot key: {:?}", key)));
    }
    Ok(())
}
