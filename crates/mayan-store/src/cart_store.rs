//! # Cart Store
//!
//! The persisted shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Mutex<Cart>`: flows may run concurrently and only
//! one may mutate the cart at a time. Every mutation is written through to
//! disk before the lock is released, so the file always reflects the last
//! completed operation and a reload restores exactly what the user had.

use std::sync::Mutex;

use mayan_core::{Cart, CoreResult, Product};
use tracing::debug;

use crate::error::StoreResult;
use crate::storage::Storage;

/// Storage key for the persisted cart (`cart-storage.json`).
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Persisted cart state.
#[derive(Debug)]
pub struct CartStore {
    storage: Storage,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Opens the store, loading any persisted cart from a previous visit.
    pub fn open(storage: Storage) -> StoreResult<Self> {
        let cart = storage
            .load::<Cart>(CART_STORAGE_KEY)?
            .unwrap_or_else(Cart::new);
        debug!(items = cart.item_count(), "cart store opened");
        Ok(CartStore {
            storage,
            cart: Mutex::new(cart),
        })
    }

    /// Runs a read-only closure against the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Runs a mutating closure against the cart and persists the result when
    /// the closure succeeds. A failed operation leaves the file untouched.
    pub fn with_cart_mut<F>(&self, f: F) -> StoreResult<CoreResult<()>>
    where
        F: FnOnce(&mut Cart) -> CoreResult<()>,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        let outcome = f(&mut cart);
        if outcome.is_ok() {
            self.storage.save(CART_STORAGE_KEY, &*cart)?;
        }
        Ok(outcome)
    }

    /// Adds a product (or merges quantity) and persists.
    pub fn add_item(&self, product: &Product, quantity: i64) -> StoreResult<CoreResult<()>> {
        self.with_cart_mut(|cart| cart.add_item(product, quantity))
    }

    /// Sets a line's quantity (zero removes) and persists.
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> StoreResult<CoreResult<()>> {
        self.with_cart_mut(|cart| cart.update_quantity(product_id, quantity))
    }

    /// Increments a line's quantity and persists.
    pub fn increment(&self, product_id: &str) -> StoreResult<CoreResult<()>> {
        self.with_cart_mut(|cart| cart.increment(product_id))
    }

    /// Decrements a line's quantity (removing the line at zero) and persists.
    pub fn decrement(&self, product_id: &str) -> StoreResult<CoreResult<()>> {
        self.with_cart_mut(|cart| cart.decrement(product_id))
    }

    /// Removes a line and persists.
    pub fn remove_item(&self, product_id: &str) -> StoreResult<CoreResult<()>> {
        self.with_cart_mut(|cart| cart.remove_item(product_id))
    }

    /// Empties the cart and persists. Called after a successful checkout.
    pub fn clear(&self) -> StoreResult<()> {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        cart.clear();
        self.storage.save(CART_STORAGE_KEY, &*cart)
    }

    /// A snapshot of the current cart contents.
    pub fn snapshot(&self) -> Cart {
        self.cart.lock().expect("cart mutex poisoned").clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_core::Money;

    fn test_product(id: &str, price_units: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            name_ar: format!("منتج {}", id),
            description: None,
            description_ar: None,
            price: Money::from_units(price_units),
            image: None,
            category_id: None,
            stock: 10,
            loyalty_points_rate: 0,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();
            store.add_item(&test_product("1", 1000), 2).unwrap().unwrap();
        }

        let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();
        let cart = store.snapshot();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal().units(), 2000);
    }

    #[test]
    fn test_failed_mutation_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();

        // Removing a missing line fails; no file should be written.
        let outcome = store.remove_item("missing").unwrap();
        assert!(outcome.is_err());
        assert!(!dir.path().join("cart-storage.json").exists());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();
            store.add_item(&test_product("1", 1000), 1).unwrap().unwrap();
            store.clear().unwrap();
        }

        let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_decrement_through_store_removes_line() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(Storage::open(dir.path()).unwrap()).unwrap();

        store.add_item(&test_product("1", 1000), 1).unwrap().unwrap();
        store.decrement("1").unwrap().unwrap();

        assert!(store.snapshot().is_empty());
    }
}
