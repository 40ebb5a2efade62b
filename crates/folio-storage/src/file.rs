//! File-backed slot store
//!
//! All slots live in one JSON object (`preferences.json`) inside the data
//! directory. Every read goes to disk and every write rewrites the file, so
//! a value written by one process is what the next launch sees.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::SlotStore;
use crate::error::StorageError;

/// File name of the slot map inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

type SlotMap = BTreeMap<String, String>;

/// Persistent implementation of SlotStore
#[derive(Debug)]
pub struct FileSlotStore {
    /// Path to the JSON slot map
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FileSlotStore {
    /// Open (creating the directory if needed) the store in `dir`
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let path = dir.join(PREFERENCES_FILE);
        debug!(path = ?path, exists = path.exists(), "Opened preferences file");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SlotMap, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SlotMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(SlotMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| StorageError::deserialization(e.to_string()))
    }

    fn save(&self, slots: &SlotMap) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(slots)
            .map_err(|e| StorageError::serialization(e.to_string()))?;

        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, encoded)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(slot))
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        trace!(slot, value, path = ?self.path, "Writing slot");

        // A corrupt file is replaced rather than blocking every future write
        let mut slots = match self.load() {
            Ok(slots) => slots,
            Err(StorageError::Deserialization(e)) => {
                warn!(path = ?self.path, error = %e, "Replacing corrupt preferences file");
                SlotMap::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(slot.to_string(), value.to_string());
        self.save(&slots)
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut slots = self.load()?;
        if slots.remove(slot).is_some() {
            self.save(&slots)?;
        }
        Ok(())
    }
}
