//! # Checkout Pricing
//!
//! Derives the amounts shown at checkout from cart contents and optional
//! discounts. This is a pure calculation - coupon validation and order
//! creation are network calls made elsewhere, triggered by explicit user
//! action, never by the calculator itself.
//!
//! ## Amount Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Quote                                     │
//! │                                                                         │
//! │  subtotal  = Σ (unit price × quantity)                                  │
//! │  delivery  = flat fee constant                                          │
//! │  discount  = server-validated coupon amount (or 0)                      │
//! │                                                                         │
//! │  payable before points = subtotal + delivery − discount                 │
//! │                                                                         │
//! │  loyalty   = use_points ? min(points, payable before points) : 0        │
//! │                                                                         │
//! │  total     = max(0, subtotal + delivery − discount − loyalty)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loyalty points redeem 1:1 against currency units. The applied loyalty
//! discount can never exceed the user's balance, and can never push the
//! total below zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;

// =============================================================================
// Inputs
// =============================================================================

/// The four inputs the quote is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingInputs {
    /// Σ (unit price × quantity) over all cart lines.
    pub subtotal: Money,

    /// Flat delivery fee. See [`crate::DELIVERY_FEE_UNITS`].
    pub delivery: Money,

    /// Absolute coupon discount returned by the server-side validator,
    /// or zero when no coupon is applied.
    pub coupon_discount: Money,

    /// Whether the user chose to redeem loyalty points.
    pub use_points: bool,

    /// The user's available loyalty point balance.
    pub loyalty_points: i64,
}

// =============================================================================
// Quote
// =============================================================================

/// The amounts displayed at checkout and frozen into the order on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal: Money,
    pub delivery: Money,
    /// Coupon discount actually counted (clamped to subtotal + delivery).
    pub coupon_discount: Money,
    /// Loyalty points actually redeemed.
    pub loyalty_discount: Money,
    pub grand_total: Money,
}

impl Quote {
    /// Loyalty points consumed by this quote (1 point = 1 unit).
    #[inline]
    pub fn points_spent(&self) -> i64 {
        self.loyalty_discount.units()
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Computes the checkout quote.
///
/// Pure and idempotent: the same inputs always produce the same quote, and
/// nothing is mutated.
///
/// ## Example
/// ```rust
/// use mayan_core::money::Money;
/// use mayan_core::pricing::{quote, PricingInputs};
///
/// let q = quote(&PricingInputs {
///     subtotal: Money::from_units(2000),
///     delivery: Money::from_units(3000),
///     coupon_discount: Money::from_units(500),
///     use_points: true,
///     loyalty_points: 200,
/// });
/// assert_eq!(q.grand_total.units(), 4300);
/// ```
pub fn quote(inputs: &PricingInputs) -> Quote {
    let subtotal = inputs.subtotal.clamp_non_negative();
    let delivery = inputs.delivery.clamp_non_negative();

    // A coupon can never discount more than the payable amount.
    let coupon_discount = inputs
        .coupon_discount
        .clamp_non_negative()
        .min(subtotal + delivery);

    let payable_before_points = subtotal + delivery - coupon_discount;

    // Points cannot discount below zero and cannot exceed the post-coupon
    // total.
    let max_loyalty = Money::from_units(inputs.loyalty_points.max(0)).min(payable_before_points);
    let loyalty_discount = if inputs.use_points {
        max_loyalty
    } else {
        Money::zero()
    };

    let grand_total =
        (subtotal + delivery - coupon_discount - loyalty_discount).clamp_non_negative();

    Quote {
        subtotal,
        delivery,
        coupon_discount,
        loyalty_discount,
        grand_total,
    }
}

/// Convenience wrapper: quote a cart directly.
pub fn quote_cart(
    cart: &Cart,
    delivery: Money,
    coupon_discount: Money,
    use_points: bool,
    loyalty_points: i64,
) -> Quote {
    quote(&PricingInputs {
        subtotal: cart.subtotal(),
        delivery,
        coupon_discount,
        use_points,
        loyalty_points,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DELIVERY_FEE_UNITS;

    fn inputs(
        subtotal: i64,
        coupon: i64,
        use_points: bool,
        points: i64,
    ) -> PricingInputs {
        PricingInputs {
            subtotal: Money::from_units(subtotal),
            delivery: Money::from_units(DELIVERY_FEE_UNITS),
            coupon_discount: Money::from_units(coupon),
            use_points,
            loyalty_points: points,
        }
    }

    /// Scenario A: one item {price: 1000, quantity: 2}, no coupon, no points.
    #[test]
    fn test_plain_checkout() {
        let q = quote(&inputs(2000, 0, false, 0));
        assert_eq!(q.subtotal.units(), 2000);
        assert_eq!(q.delivery.units(), 3000);
        assert_eq!(q.grand_total.units(), 5000);
    }

    /// Scenario B: coupon 500 and 200 points applied.
    #[test]
    fn test_coupon_and_points() {
        let q = quote(&inputs(2000, 500, true, 200));
        assert_eq!(q.coupon_discount.units(), 500);
        assert_eq!(q.loyalty_discount.units(), 200);
        assert_eq!(q.grand_total.units(), 4300);
    }

    /// Scenario C: 10000 points available on a 4300 post-coupon total -
    /// capped at 4300, total reaches exactly zero.
    #[test]
    fn test_points_capped_at_payable() {
        let q = quote(&inputs(2000, 700, true, 10_000));
        assert_eq!(q.loyalty_discount.units(), 4300);
        assert_eq!(q.grand_total.units(), 0);
    }

    #[test]
    fn test_points_flag_off_applies_nothing() {
        let q = quote(&inputs(2000, 500, false, 10_000));
        assert_eq!(q.loyalty_discount.units(), 0);
        assert_eq!(q.grand_total.units(), 4500);
    }

    #[test]
    fn test_loyalty_never_exceeds_balance() {
        let q = quote(&inputs(2000, 0, true, 700));
        assert_eq!(q.loyalty_discount.units(), 700);
        assert_eq!(q.points_spent(), 700);
        assert_eq!(q.grand_total.units(), 4300);
    }

    #[test]
    fn test_coupon_clamped_to_payable() {
        // An oversized discount cannot drive the total negative.
        let q = quote(&inputs(1000, 99_999, false, 0));
        assert_eq!(q.coupon_discount.units(), 4000);
        assert_eq!(q.grand_total.units(), 0);
    }

    #[test]
    fn test_grand_total_never_negative() {
        for subtotal in [0, 1, 500, 2000, 100_000] {
            for coupon in [0, 250, 5000, 1_000_000] {
                for points in [0, 1, 3000, 1_000_000] {
                    for use_points in [false, true] {
                        let q = quote(&inputs(subtotal, coupon, use_points, points));
                        assert!(
                            !q.grand_total.is_negative(),
                            "negative total for subtotal={subtotal} coupon={coupon} points={points}"
                        );
                        assert!(q.loyalty_discount.units() <= points.max(0));
                    }
                }
            }
        }
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let i = inputs(2000, 500, true, 200);
        let first = quote(&i);
        let second = quote(&i);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_cart_quote() {
        let cart = Cart::new();
        let q = quote_cart(&cart, Money::from_units(DELIVERY_FEE_UNITS), Money::zero(), false, 0);
        assert_eq!(q.subtotal.units(), 0);
        assert_eq!(q.grand_total.units(), DELIVERY_FEE_UNITS);
    }
}
