//! # Locale Store
//!
//! The persisted display language. Defaults to Arabic on first run; the
//! embedding UI mirrors the value into a `locale` cookie so server-rendered
//! translation bundles match.

use std::sync::Mutex;

use mayan_core::Locale;
use tracing::debug;

use crate::error::StoreResult;
use crate::storage::Storage;

/// Storage key for the persisted locale (`locale-storage.json`).
pub const LOCALE_STORAGE_KEY: &str = "locale-storage";

/// Persisted locale state.
#[derive(Debug)]
pub struct LocaleStore {
    storage: Storage,
    locale: Mutex<Locale>,
}

impl LocaleStore {
    /// Opens the store, restoring the persisted locale or defaulting.
    pub fn open(storage: Storage) -> StoreResult<Self> {
        let locale = storage
            .load::<Locale>(LOCALE_STORAGE_KEY)?
            .unwrap_or_default();
        debug!(%locale, "locale store opened");
        Ok(LocaleStore {
            storage,
            locale: Mutex::new(locale),
        })
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        *self.locale.lock().expect("locale mutex poisoned")
    }

    /// Switches and persists the active locale.
    pub fn set_locale(&self, locale: Locale) -> StoreResult<()> {
        let mut guard = self.locale.lock().expect("locale mutex poisoned");
        self.storage.save(LOCALE_STORAGE_KEY, &locale)?;
        *guard = locale;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_arabic() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocaleStore::open(Storage::open(dir.path()).unwrap()).unwrap();
        assert_eq!(store.locale(), Locale::Ar);
    }

    #[test]
    fn test_locale_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = LocaleStore::open(Storage::open(dir.path()).unwrap()).unwrap();
            store.set_locale(Locale::En).unwrap();
        }

        let store = LocaleStore::open(Storage::open(dir.path()).unwrap()).unwrap();
        assert_eq!(store.locale(), Locale::En);
    }
}
