//! # Cart Module
//!
//! The shopping cart and its operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  UI Action                Operation               State Change          │
//! │  ─────────                ─────────               ────────────          │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ───────────► merge or push        │
//! │                                                                         │
//! │  Quantity "+" ──────────► increment() ──────────► qty + 1              │
//! │                                                                         │
//! │  Quantity "−" ──────────► decrement() ──────────► qty − 1,             │
//! │                                                    removed at zero      │
//! │                                                                         │
//! │  "Remove" ──────────────► remove_item() ────────► line removed         │
//! │                                                                         │
//! │  Checkout success ──────► clear() ──────────────► empty cart           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are unique per `product_id`; adding a product already in the cart
//! increases its quantity. A quantity can never rest at zero - decrementing
//! the last unit removes the line instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the shopping cart.
///
/// Holds a frozen snapshot of the product's names, price and image from the
/// moment it was added, so the cart keeps displaying consistent data even if
/// the catalog record changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product this line refers to. Unique per cart.
    pub product_id: String,

    /// English name at time of adding (frozen).
    pub name: String,

    /// Arabic name at time of adding (frozen).
    pub name_ar: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart (always ≥ 1).
    pub quantity: i64,

    /// Image URL at time of adding.
    #[serde(default)]
    pub image: Option<String>,

    /// When this line was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart line from a product snapshot and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            name_ar: product.name_ar.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product merges)
/// - Quantity is always ≥ 1 (decrementing below 1 removes the line)
/// - Maximum unique items: [`MAX_CART_ITEMS`]
/// - Maximum quantity per line: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    /// Adds a product to the cart, or increases quantity if already present.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line. Zero removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ProductNotInCart(product_id.to_string())),
        }
    }

    /// Increments a line's quantity by one.
    pub fn increment(&mut self, product_id: &str) -> CoreResult<()> {
        match self.items.iter().find(|i| i.product_id == product_id) {
            Some(item) => self.update_quantity(product_id, item.quantity + 1),
            None => Err(CoreError::ProductNotInCart(product_id.to_string())),
        }
    }

    /// Decrements a line's quantity by one. At quantity 1 the line is
    /// removed - a line never rests at zero.
    pub fn decrement(&mut self, product_id: &str) -> CoreResult<()> {
        match self.items.iter().find(|i| i.product_id == product_id) {
            Some(item) => self.update_quantity(product_id, item.quantity - 1),
            None => Err(CoreError::ProductNotInCart(product_id.to_string())),
        }
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items. Called after a successful checkout.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Some(Utc::now());
    }

    /// Number of unique lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal: Σ (unit price × quantity) over all lines.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().units(), 2000);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_quantity_floor_removes_line() {
        // Decrementing below 1 removes the item rather than allowing zero.
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 1).unwrap();
        cart.decrement("1").unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_above_one_keeps_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 3).unwrap();
        cart.decrement("1").unwrap();

        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 2).unwrap();
        cart.update_quantity("1", 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, MAX_ITEM_QUANTITY).unwrap();
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_price_is_snapshotted() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 1000);

        cart.add_item(&product, 1).unwrap();
        product.price = Money::from_units(9999);

        assert_eq!(cart.items[0].unit_price.units(), 1000);
    }

    #[test]
    fn test_remove_missing_product_errors() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove_item("nope"),
            Err(CoreError::ProductNotInCart(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 500), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
