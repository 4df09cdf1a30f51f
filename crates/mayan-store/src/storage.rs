//! # Storage Adapter
//!
//! The serialization boundary between in-memory state and disk.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Layout                                       │
//! │                                                                         │
//! │  <profile dir>/mayan/storefront/          (directories crate)           │
//! │  ├── cart-storage.json                                                  │
//! │  ├── auth-storage.json                                                  │
//! │  └── locale-storage.json                                                │
//! │                                                                         │
//! │  Each file is a versioned envelope:                                     │
//! │    { "version": 1, "state": { ... } }                                   │
//! │                                                                         │
//! │  • missing file          → empty state (first run)                      │
//! │  • corrupt file          → StoreError::Corrupt (surfaced, not reset)    │
//! │  • future schema version → StoreError::UnsupportedVersion               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The version field exists so a later build can migrate old state instead
//! of guessing at its shape.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Current schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned envelope wrapped around every persisted state value.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// File-backed storage for the client's persisted state.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Opens storage rooted at the platform profile directory, creating it
    /// on first run.
    pub fn open_default() -> StoreResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "mayan", "storefront")
            .ok_or(StoreError::NoProfileDir)?;
        Self::open(dirs.data_dir())
    }

    /// Opens storage rooted at an explicit directory (tests, embedders).
    pub fn open(dir: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(dir)?;
        info!(?dir, "state storage opened");
        Ok(Storage {
            dir: dir.to_path_buf(),
        })
    }

    /// The directory state files live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads the state stored under `key`. `Ok(None)` means no file yet.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let path = self.path_for(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "no state file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let envelope: Envelope<T> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })?;

        if envelope.version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                key: key.to_string(),
                found: envelope.version,
                supported: SCHEMA_VERSION,
            });
        }

        debug!(key, version = envelope.version, "state loaded");
        Ok(Some(envelope.state))
    }

    /// Saves `state` under `key`, replacing any previous contents.
    ///
    /// Writes to a temporary file first so a crash mid-write can't leave a
    /// truncated state file behind.
    pub fn save<T: Serialize>(&self, key: &str, state: &T) -> StoreResult<()> {
        let envelope = Envelope {
            version: SCHEMA_VERSION,
            state,
        };
        let contents = serde_json::to_string_pretty(&envelope).map_err(StoreError::Encode)?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &path)?;

        debug!(key, "state saved");
        Ok(())
    }

    /// Removes the state stored under `key`. Missing files are fine.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: i64,
        label: String,
    }

    fn sample() -> Sample {
        Sample {
            count: 3,
            label: "cart".to_string(),
        }
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let loaded: Option<Sample> = storage.load("cart-storage").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage.save("cart-storage", &sample()).unwrap();
        let loaded: Option<Sample> = storage.load("cart-storage").unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_envelope_carries_version() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        storage.save("locale-storage", &sample()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("locale-storage.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["state"]["count"], 3);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        std::fs::write(
            dir.path().join("auth-storage.json"),
            r#"{"version": 99, "state": {"count": 1, "label": "x"}}"#,
        )
        .unwrap();

        let result: StoreResult<Option<Sample>> = storage.load("auth-storage");
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("cart-storage.json"), "{not json").unwrap();

        let result: StoreResult<Option<Sample>> = storage.load("cart-storage");
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage.save("cart-storage", &sample()).unwrap();
        storage.remove("cart-storage").unwrap();
        storage.remove("cart-storage").unwrap();

        let loaded: Option<Sample> = storage.load("cart-storage").unwrap();
        assert!(loaded.is_none());
    }
}
