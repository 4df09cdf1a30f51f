//! # mayan-store: Persisted Client-Local State
//!
//! The storefront keeps three pieces of state across restarts - the cart,
//! the auth session, and the locale - each behind a dedicated store and a
//! shared versioned storage adapter. Everything else the UI shows is a
//! transient read model re-fetched from the remote API.
//!
//! ## Stores
//! - [`CartStore`] - `cart-storage.json`, written through on every mutation
//! - [`AuthStore`] - `auth-storage.json`, bearer token + user snapshot
//! - [`LocaleStore`] - `locale-storage.json`, `ar`/`en`, defaults to Arabic
//!
//! Each store is a single-writer container (one browser-tab equivalent);
//! there is no cross-instance coordination.

pub mod auth_store;
pub mod cart_store;
pub mod error;
pub mod locale_store;
pub mod storage;

pub use auth_store::{AuthStore, Session, AUTH_STORAGE_KEY};
pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use locale_store::{LocaleStore, LOCALE_STORAGE_KEY};
pub use storage::{Storage, SCHEMA_VERSION};
