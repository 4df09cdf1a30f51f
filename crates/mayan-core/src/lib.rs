//! # mayan-core: Pure Business Logic for the Mayan Storefront
//!
//! This crate is the **heart** of the Mayan storefront. It contains the two
//! computations the checkout and admin screens depend on - checkout pricing
//! and category tree composition - plus the domain types and validation rules
//! shared by every layer above.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mayan Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (TypeScript)                   │   │
//! │  │    Shop ──► Cart ──► Checkout ──► Invoices ──► Admin Panel      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mayan-storefront (flows)                     │   │
//! │  │    CheckoutSession, CatalogService, CategoryAdmin, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mayan-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ cart +    │  │ category  │  │   │
//! │  │   │  Product  │  │   Money   │  │ pricing   │  │   tree    │  │   │
//! │  │   │  Order    │  │  (units)  │  │  Quote    │  │ composer  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Order, Coupon, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`locale`] - Bilingual (Arabic/English) text selection
//! - [`cart`] - Cart and cart item operations
//! - [`pricing`] - Checkout quote calculation
//! - [`category`] - Category tree composition and cycle-safe parent selection
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden mutation
//! 2. **No I/O**: network and file access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are whole currency units (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use mayan_core::money::Money;
//! use mayan_core::pricing::{self, PricingInputs};
//!
//! let inputs = PricingInputs {
//!     subtotal: Money::from_units(2000),
//!     delivery: Money::from_units(mayan_core::DELIVERY_FEE_UNITS),
//!     coupon_discount: Money::from_units(500),
//!     use_points: true,
//!     loyalty_points: 200,
//! };
//!
//! let quote = pricing::quote(&inputs);
//! assert_eq!(quote.grand_total.units(), 4300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod category;
pub mod error;
pub mod locale;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use locale::Locale;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee applied to every checkout, in whole currency units.
///
/// The cart flow charges this constant even though delivery-zone pricing
/// endpoints exist elsewhere in the system; the two were never wired together
/// in the original checkout. Kept as-is pending product clarification.
pub const DELIVERY_FEE_UNITS: i64 = 3000;

/// Maximum unique line items allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Loyalty points redeem 1:1 against currency units at checkout.
pub const UNITS_PER_LOYALTY_POINT: i64 = 1;
