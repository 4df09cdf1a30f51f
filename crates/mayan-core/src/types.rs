//! # Domain Types
//!
//! The read models the storefront holds for server-owned records. Authoritative
//! storage is the remote API; these shapes are what the client renders and
//! posts back. Everything is `camelCase` on the wire (the remote API is a
//! JavaScript-shaped JSON API).
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Storefront          Checkout              Back office                  │
//! │  ──────────          ────────              ───────────                  │
//! │  Product             Order / OrderItem     Coupon                       │
//! │  Category            BankAccount           ProcurementOrder             │
//! │  Recipe              CouponDiscount        Report rows                  │
//! │  LoyaltyProduct      DeliveryZone          SiteSettings                 │
//! │  User / Message      Redemption                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown fields from the API are ignored; optional fields default so a
//! partial response deserializes instead of failing the whole screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// English display name.
    pub name: String,

    /// Arabic display name.
    pub name_ar: String,

    /// Optional English description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional Arabic description.
    #[serde(default)]
    pub description_ar: Option<String>,

    /// Unit price in whole currency units.
    pub price: Money,

    /// Primary image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Category this product is listed under.
    #[serde(default)]
    pub category_id: Option<String>,

    /// Units in stock.
    #[serde(default)]
    pub stock: i64,

    /// Loyalty points earned per unit purchased.
    #[serde(default)]
    pub loyalty_points_rate: i64,

    /// Whether the product is visible in the storefront.
    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Display name for the given locale.
    pub fn display_name(&self, locale: crate::Locale) -> &str {
        crate::locale::pick(&self.name, &self.name_ar, locale)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category. Categories form a forest via `parent_id`; the remote
/// API serves them either hierarchically (with `children` populated) or flat
/// (`?flat=true`, `children` empty).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,

    /// English name.
    pub name_en: String,

    /// Arabic name.
    pub name_ar: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Parent category, or `None` for a root.
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Child categories (hierarchical responses only).
    #[serde(default)]
    pub children: Vec<Category>,

    /// Relation counts as reported by the API.
    #[serde(default, rename = "_count")]
    pub counts: Option<CategoryCounts>,
}

/// Relation counts attached to a category by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    #[serde(default)]
    pub products: i64,
    #[serde(default)]
    pub children: i64,
}

impl Category {
    /// Display name for the given locale.
    pub fn display_name(&self, locale: crate::Locale) -> &str {
        crate::locale::pick(&self.name_en, &self.name_ar, locale)
    }
}

// =============================================================================
// User
// =============================================================================

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Customer
    }
}

/// An authenticated user as returned by `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Redeemable loyalty point balance (1 point = 1 currency unit).
    #[serde(default)]
    pub loyalty_points: i64,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Order / Invoice
// =============================================================================

/// Payment/delivery status of a sales order.
///
/// Payment is a manual bank transfer: the customer places the order, uploads
/// a transfer screenshot, and an admin confirms it. The workflow itself is
/// enforced server-side; the client only renders and requests transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, waiting for the customer's transfer proof.
    Pending,
    /// Transfer screenshot uploaded, waiting for admin confirmation.
    PaymentSubmitted,
    /// Payment confirmed by an admin.
    Confirmed,
    /// Handed to delivery.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled (by customer or admin).
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A line item on an order. Uses the snapshot pattern: name and unit price
/// are frozen at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// English name at time of purchase (frozen).
    pub name: String,
    /// Arabic name at time of purchase (frozen).
    pub name_ar: String,
    /// Unit price at time of purchase (frozen).
    pub unit_price: Money,
    pub quantity: i64,
    #[serde(default)]
    pub image: Option<String>,
}

impl OrderItem {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// A sales order; "invoice" is the customer-facing term for the same record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-readable invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub delivery: Money,
    /// Coupon discount applied at checkout.
    #[serde(default)]
    pub discount: Money,
    /// Loyalty points redeemed at checkout.
    #[serde(default)]
    pub loyalty_discount: Money,
    pub total: Money,
    #[serde(default)]
    pub status: OrderStatus,
    /// URL of the uploaded bank-transfer screenshot, once submitted.
    #[serde(default)]
    pub payment_proof: Option<String>,
    /// Bank account the customer chose to transfer to.
    #[serde(default)]
    pub bank_account_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CouponKind {
    /// Fixed amount off, in currency units.
    Fixed,
    /// Percentage off the subtotal.
    Percentage,
}

/// An admin-managed discount code. Validation (minimum purchase, usage count,
/// expiry) is enforced server-side; the client only submits codes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub kind: CouponKind,
    /// Fixed amount in units, or percentage points, per `kind`.
    pub value: i64,
    #[serde(default)]
    pub min_purchase: Option<Money>,
    #[serde(default)]
    pub max_uses: Option<i64>,
    #[serde(default)]
    pub used_count: i64,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Result of validating a coupon code against a subtotal.
///
/// The server resolves fixed vs. percentage and returns the absolute
/// discount; the client never re-derives it. Not persisted beyond the active
/// checkout session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CouponDiscount {
    pub discount: Money,
}

// =============================================================================
// Bank Account
// =============================================================================

/// A bank account customers can transfer to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    #[serde(default)]
    pub bank_name_ar: Option<String>,
    pub account_holder: String,
    pub account_number: String,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

// =============================================================================
// Messaging
// =============================================================================

/// A message in the support inbox.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub recipient_id: Option<String>,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Loyalty Shop
// =============================================================================

/// A catalog item redeemable with loyalty points.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyProduct {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    /// Cost in loyalty points.
    pub points_cost: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Status of a loyalty-shop redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionStatus {
    Pending,
    Fulfilled,
    Cancelled,
}

/// A placed loyalty-shop redemption.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: String,
    pub user_id: String,
    pub loyalty_product_id: String,
    pub points_spent: i64,
    pub status: RedemptionStatus,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Loyalty shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Minimum point balance before the shop unlocks for a user.
    #[serde(default)]
    pub min_points_to_unlock: i64,
}

// =============================================================================
// Procurement
// =============================================================================

/// A line on a procurement (stock-in) order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementItem {
    pub product_id: String,
    pub quantity: i64,
    /// Cost per unit paid to the supplier.
    pub unit_cost: Money,
}

impl ProcurementItem {
    /// Cost of this line (unit cost × quantity).
    #[inline]
    pub fn line_cost(&self) -> Money {
        self.unit_cost.multiply_quantity(self.quantity)
    }
}

/// An admin-entered batch purchase used to increase stock and track
/// cost-of-goods. Distinct from customer sales orders.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementOrder {
    pub id: String,
    pub supplier: String,
    #[serde(default)]
    pub invoice_ref: Option<String>,
    pub items: Vec<ProcurementItem>,
    pub total_cost: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Recipes
// =============================================================================

/// A component of a recipe (a product assembled from other products).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecipeComponent {
    pub component_product_id: String,
    pub quantity: i64,
}

/// A recipe linking a sellable product to the component products it is
/// assembled from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    /// The sellable product this recipe produces.
    pub product_id: String,
    pub components: Vec<RecipeComponent>,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Result of checking whether a recipe's components are in stock.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCheck {
    pub can_fulfill: bool,
    /// Component product ids that are short on stock.
    #[serde(default)]
    pub missing: Vec<String>,
}

// =============================================================================
// Delivery Zones
// =============================================================================

/// A delivery zone with its quoted price.
///
/// These exist in the system but are NOT consulted by the checkout flow,
/// which charges the flat fee constant instead. See `DELIVERY_FEE_UNITS`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: String,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    pub price: Money,
}

// =============================================================================
// Site Settings
// =============================================================================

/// Site-wide settings edited in the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub store_name: Option<String>,
    /// Homepage banner image URL (uploaded via `/settings/banner`).
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub announcement_en: Option<String>,
    #[serde(default)]
    pub announcement_ar: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_address: Option<String>,
}

// =============================================================================
// Reports
// =============================================================================

/// A row in the top-products report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub quantity_sold: i64,
    pub revenue: Money,
}

/// A row in the top-customers report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub user_id: String,
    pub name: String,
    pub orders_count: i64,
    pub total_spent: Money,
}

/// Aggregate profit/loss figures over a reporting window.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossReport {
    pub revenue: Money,
    pub cost_of_goods: Money,
    pub profit: Money,
}

/// Sales figures for a single product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductReport {
    pub product_id: String,
    pub quantity_sold: i64,
    pub revenue: Money,
    pub cost: Money,
    pub profit: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    #[test]
    fn test_product_deserializes_from_partial_response() {
        // Optional fields default; unknown fields are ignored.
        let json = r#"{
            "id": "p1",
            "name": "Rose Serum",
            "nameAr": "سيروم الورد",
            "price": 12000,
            "somethingNew": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price.units(), 12000);
        assert_eq!(product.stock, 0);
        assert!(product.is_active);
        assert_eq!(product.display_name(Locale::Ar), "سيروم الورد");
    }

    #[test]
    fn test_category_count_field_uses_api_name() {
        let json = r#"{
            "id": "c1",
            "nameEn": "Skincare",
            "nameAr": "العناية بالبشرة",
            "_count": { "products": 7 }
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.counts.unwrap().products, 7);
        assert!(category.children.is_empty());
        assert!(category.parent_id.is_none());
    }

    #[test]
    fn test_order_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PaymentSubmitted).unwrap(),
            "\"payment_submitted\""
        );
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            product_id: "p1".to_string(),
            name: "Lip Tint".to_string(),
            name_ar: "تينت شفاه".to_string(),
            unit_price: Money::from_units(1000),
            quantity: 2,
            image: None,
        };
        assert_eq!(item.line_total().units(), 2000);
    }

    #[test]
    fn test_money_fields_serialize_as_plain_numbers() {
        let zone = DeliveryZone {
            id: "z1".to_string(),
            country: "IQ".to_string(),
            state: Some("Baghdad".to_string()),
            price: Money::from_units(5000),
        };
        let json = serde_json::to_value(&zone).unwrap();
        assert_eq!(json["price"], 5000);
    }
}
