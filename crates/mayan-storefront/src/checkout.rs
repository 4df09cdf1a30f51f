//! # Checkout Session
//!
//! The cart page flow: quantity edits, coupon application, loyalty-point
//! redemption, and order placement.
//!
//! ## Failure Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Failure Semantics                          │
//! │                                                                         │
//! │  apply_coupon fails (invalid / expired / below minimum)                 │
//! │      → error surfaced, previously applied discount KEPT                 │
//! │                                                                         │
//! │  place_order fails (network / validation)                               │
//! │      → error surfaced, cart NOT cleared, user stays on the page         │
//! │                                                                         │
//! │  place_order succeeds                                                   │
//! │      → persisted cart cleared, coupon and points toggle reset           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session itself is single-threaded state for one page visit (the UI
//! event loop); it owns no background work.

use std::sync::Arc;

use mayan_api::resources::orders::CreateOrder;
use mayan_api::ApiClient;
use mayan_core::{pricing, validation, Money, Order, OrderItem, User, DELIVERY_FEE_UNITS};
use mayan_store::CartStore;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{StorefrontError, StorefrontResult};

/// A coupon the validator accepted for the current session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedCoupon {
    pub code: String,
    pub discount: Money,
}

/// Delivery details collected by the checkout form.
///
/// Country/state are captured for the order record, but the delivery fee
/// stays the flat constant - zone pricing was never wired into checkout.
#[derive(Debug, Clone, Default)]
pub struct DeliveryDetails {
    pub country: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    /// Which bank account the customer will transfer to.
    pub bank_account_id: Option<String>,
}

/// The cart page flow.
#[derive(Debug)]
pub struct CheckoutSession {
    api: ApiClient,
    cart: Arc<CartStore>,
    coupon: Option<AppliedCoupon>,
    use_points: bool,
}

impl CheckoutSession {
    pub fn new(api: ApiClient, cart: Arc<CartStore>) -> Self {
        CheckoutSession {
            api,
            cart,
            coupon: None,
            use_points: false,
        }
    }

    /// The shared cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The coupon currently applied, if any.
    pub fn applied_coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.as_ref()
    }

    /// Whether loyalty points are toggled on.
    pub fn use_points(&self) -> bool {
        self.use_points
    }

    // =========================================================================
    // Quote
    // =========================================================================

    /// The amounts to display, derived from the current cart, coupon and
    /// points toggle. Pure recomputation - calling it never changes state.
    pub fn quote(&self, user: Option<&User>) -> pricing::Quote {
        let discount = self
            .coupon
            .as_ref()
            .map(|c| c.discount)
            .unwrap_or_else(Money::zero);
        let points = user.map(|u| u.loyalty_points).unwrap_or(0);

        self.cart.with_cart(|cart| {
            pricing::quote_cart(
                cart,
                Money::from_units(DELIVERY_FEE_UNITS),
                discount,
                self.use_points,
                points,
            )
        })
    }

    // =========================================================================
    // Coupon
    // =========================================================================

    /// Validates a coupon code against the current subtotal.
    ///
    /// On success the returned discount replaces any previous coupon. On
    /// failure the previous coupon stays applied - the user keeps whatever
    /// discount they already had.
    pub async fn apply_coupon(&mut self, code: &str) -> StorefrontResult<AppliedCoupon> {
        let code =
            validation::validate_coupon_code(code).map_err(mayan_core::CoreError::from)?;
        let subtotal = self.cart.with_cart(|cart| cart.subtotal());

        let result = self.api.coupons().validate(&code, subtotal).await?;

        let applied = AppliedCoupon {
            code,
            discount: result.discount,
        };
        info!(code = %applied.code, discount = %applied.discount, "coupon applied");
        self.coupon = Some(applied.clone());
        Ok(applied)
    }

    /// Removes the applied coupon.
    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    // =========================================================================
    // Loyalty Points
    // =========================================================================

    /// Toggles redeeming loyalty points against the total.
    pub fn set_use_points(&mut self, use_points: bool) {
        debug!(use_points, "loyalty toggle");
        self.use_points = use_points;
    }

    // =========================================================================
    // Order Placement
    // =========================================================================

    /// Submits the order assembled from the cart and the current quote.
    ///
    /// The persisted cart is cleared only after the server accepts the
    /// order; any failure leaves cart, coupon and toggle untouched.
    pub async fn place_order(
        &mut self,
        user: &User,
        details: &DeliveryDetails,
    ) -> StorefrontResult<Order> {
        let snapshot = self.cart.snapshot();
        if snapshot.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let quote = self.quote(Some(user));

        let items: Vec<OrderItem> = snapshot
            .items
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                name_ar: line.name_ar.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                image: line.image.clone(),
            })
            .collect();

        let request = CreateOrder {
            items,
            subtotal: quote.subtotal,
            delivery: quote.delivery,
            discount: quote.coupon_discount,
            loyalty_discount: quote.loyalty_discount,
            total: quote.grand_total,
            coupon_code: self.coupon.as_ref().map(|c| c.code.clone()),
            use_loyalty_points: self.use_points,
            bank_account_id: details.bank_account_id.clone(),
            country: details.country.clone(),
            state: details.state.clone(),
            address: details.address.clone(),
            notes: details.notes.clone(),
            client_request_id: uuid::Uuid::new_v4().to_string(),
        };

        let order = self.api.orders().create(&request).await?;

        // Only now is the cart gone - a failed submission keeps it intact.
        self.cart.clear()?;
        self.coupon = None;
        self.use_points = false;

        info!(order = %order.id, total = %order.total, "order placed");
        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_api::ApiConfig;
    use mayan_core::{Product, UserRole};
    use mayan_store::Storage;

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

    fn session_with_cart() -> (tempfile::TempDir, CheckoutSession) {
        let dir = tempfile::tempdir().unwrap();
        let cart = Arc::new(CartStore::open(Storage::open(dir.path()).unwrap()).unwrap());
        let api = ApiClient::new(ApiConfig::default()).unwrap();
        (dir, CheckoutSession::new(api, cart))
    }

    #[test]
    fn test_quote_scenario_plain() {
        let (_dir, session) = session_with_cart();
        session
            .cart()
            .add_item(&test_product("1", 1000), 2)
            .unwrap()
            .unwrap();

        let quote = session.quote(None);
        assert_eq!(quote.subtotal.units(), 2000);
        assert_eq!(quote.delivery.units(), 3000);
        assert_eq!(quote.grand_total.units(), 5000);
    }

    #[test]
    fn test_quote_with_coupon_and_points() {
        let (_dir, mut session) = session_with_cart();
        session
            .cart()
            .add_item(&test_product("1", 1000), 2)
            .unwrap()
            .unwrap();

        // Simulate a validator result without the network round-trip.
        session.coupon = Some(AppliedCoupon {
            code: "SUMMER-10".to_string(),
            discount: Money::from_units(500),
        });
        session.set_use_points(true);

        let quote = session.quote(Some(&test_user(200)));
        assert_eq!(quote.coupon_discount.units(), 500);
        assert_eq!(quote.loyalty_discount.units(), 200);
        assert_eq!(quote.grand_total.units(), 4300);
    }

    #[test]
    fn test_quote_is_pure_recomputation() {
        let (_dir, mut session) = session_with_cart();
        session
            .cart()
            .add_item(&test_product("1", 1000), 2)
            .unwrap()
            .unwrap();
        session.set_use_points(true);

        let user = test_user(10_000);
        let first = session.quote(Some(&user));
        let second = session.quote(Some(&user));
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_coupon_resets_discount() {
        let (_dir, mut session) = session_with_cart();
        session
            .cart()
            .add_item(&test_product("1", 1000), 2)
            .unwrap()
            .unwrap();
        session.coupon = Some(AppliedCoupon {
            code: "SUMMER-10".to_string(),
            discount: Money::from_units(500),
        });

        session.remove_coupon();
        assert_eq!(session.quote(None).coupon_discount.units(), 0);
    }

    #[tokio::test]
    async fn test_place_order_rejects_empty_cart() {
        let (_dir, mut session) = session_with_cart();
        let result = session
            .place_order(&test_user(0), &DeliveryDetails::default())
            .await;
        assert!(matches!(result, Err(StorefrontError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_invalid_coupon_code_keeps_prior_discount() {
        let (_dir, mut session) = session_with_cart();
        session.coupon = Some(AppliedCoupon {
            code: "KEPT".to_string(),
            discount: Money::from_units(500),
        });

        // Client-side validation rejects before any request is issued.
        let result = session.apply_coupon("has space").await;
        assert!(result.is_err());
        assert_eq!(session.applied_coupon().unwrap().code, "KEPT");
        assert_eq!(session.quote(None).coupon_discount.units(), 500);
    }
}
