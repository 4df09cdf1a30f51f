//! # Auth Store
//!
//! The persisted sign-in session: bearer token plus a snapshot of the user
//! record. Survives restarts so the customer stays signed in; cleared on
//! logout or when the server rejects the token.

use std::sync::Mutex;

use mayan_core::User;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreResult;
use crate::storage::Storage;

/// Storage key for the persisted session (`auth-storage.json`).
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// A persisted sign-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to API requests.
    pub token: String,
    /// Snapshot of the user at sign-in; refreshed from `/auth/me`.
    pub user: User,
}

/// Persisted session state.
#[derive(Debug)]
pub struct AuthStore {
    storage: Storage,
    session: Mutex<Option<Session>>,
}

impl AuthStore {
    /// Opens the store, restoring any persisted session.
    pub fn open(storage: Storage) -> StoreResult<Self> {
        let session = storage.load::<Session>(AUTH_STORAGE_KEY)?;
        debug!(signed_in = session.is_some(), "auth store opened");
        Ok(AuthStore {
            storage,
            session: Mutex::new(session),
        })
    }

    /// Installs and persists a session (login/register succeeded).
    pub fn set_session(&self, session: Session) -> StoreResult<()> {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        self.storage.save(AUTH_STORAGE_KEY, &session)?;
        *guard = Some(session);
        Ok(())
    }

    /// Replaces the persisted user snapshot, keeping the token.
    pub fn update_user(&self, user: User) -> StoreResult<()> {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        if let Some(session) = guard.as_mut() {
            session.user = user;
            self.storage.save(AUTH_STORAGE_KEY, session)?;
        }
        Ok(())
    }

    /// Clears the session (logout or rejected token).
    pub fn clear(&self) -> StoreResult<()> {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        *guard = None;
        self.storage.remove(AUTH_STORAGE_KEY)
    }

    /// The current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.session
            .lock()
            .expect("session mutex poisoned")
            .clone()
    }

    /// The persisted bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.session
            .lock()
            .expect("session mutex poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Whether a session is present.
    pub fn is_signed_in(&self) -> bool {
        self.session
            .lock()
            .expect("session mutex poisoned")
            .is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_core::UserRole;

    fn test_user(points: i64) -> User {
        User {
            id: "u1".to_string(),
            name: "Dunya".to_string(),
            email: "dunya@example.com".to_string(),
            phone: None,
            role: UserRole::Customer,
            loyalty_points: points,
            created_at: None,
        }
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = AuthStore::open(Storage::open(dir.path()).unwrap()).unwrap();
            store
                .set_session(Session {
                    token: "jwt-abc".to_string(),
                    user: test_user(120),
                })
                .unwrap();
        }

        let store = AuthStore::open(Storage::open(dir.path()).unwrap()).unwrap();
        assert!(store.is_signed_in());
        assert_eq!(store.token().as_deref(), Some("jwt-abc"));
        assert_eq!(store.session().unwrap().user.loyalty_points, 120);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::open(Storage::open(dir.path()).unwrap()).unwrap();

        store
            .set_session(Session {
                token: "jwt-abc".to_string(),
                user: test_user(0),
            })
            .unwrap();
        store.clear().unwrap();

        assert!(!store.is_signed_in());
        assert!(!dir.path().join("auth-storage.json").exists());
    }

    #[test]
    fn test_update_user_keeps_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::open(Storage::open(dir.path()).unwrap()).unwrap();

        store
            .set_session(Session {
                token: "jwt-abc".to_string(),
                user: test_user(0),
            })
            .unwrap();
        store.update_user(test_user(999)).unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.user.loyalty_points, 999);
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = AuthStore::open(Storage::open(dir.path()).unwrap()).unwrap();

        store.update_user(test_user(5)).unwrap();
        assert!(!store.is_signed_in());
    }
}
