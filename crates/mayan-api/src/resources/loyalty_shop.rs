//! Loyalty shop endpoints - the points-redemption catalog.
//!
//! The customer-facing routes live under `/loyalty-shop`; the management
//! variants live under `/admin/loyalty-shop`. Both share the same shapes.

use mayan_core::{LoyaltyProduct, LoyaltySettings, Redemption, RedemptionStatus};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /loyalty-shop/redemptions` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRedemption {
    pub loyalty_product_id: String,
}

/// `POST/PUT /admin/loyalty-shop/products` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLoyaltyProduct {
    pub name: String,
    pub name_ar: String,
    pub points_cost: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub stock: i64,
    pub is_active: bool,
}

/// `PUT /admin/loyalty-shop/redemptions/:id` body.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRedemption {
    pub status: RedemptionStatus,
}

/// Accessor for loyalty-shop endpoints (user and admin variants).
#[derive(Debug)]
pub struct LoyaltyShopApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl LoyaltyShopApi<'_> {
    // =========================================================================
    // Customer-facing
    // =========================================================================

    /// `GET /loyalty-shop/settings`.
    pub async fn settings(&self) -> ApiResult<LoyaltySettings> {
        self.client.get("/loyalty-shop/settings").await
    }

    /// `GET /loyalty-shop/products`.
    pub async fn products(&self) -> ApiResult<Vec<LoyaltyProduct>> {
        self.client.get("/loyalty-shop/products").await
    }

    /// `POST /loyalty-shop/redemptions` - spend points on a catalog item.
    pub async fn redeem(&self, request: &CreateRedemption) -> ApiResult<Redemption> {
        self.client.post("/loyalty-shop/redemptions", request).await
    }

    /// `GET /loyalty-shop/redemptions` - the current user's history.
    pub async fn redemptions(&self) -> ApiResult<Vec<Redemption>> {
        self.client.get("/loyalty-shop/redemptions").await
    }

    // =========================================================================
    // Admin variants
    // =========================================================================

    /// `PUT /admin/loyalty-shop/settings`.
    pub async fn update_settings(&self, settings: &LoyaltySettings) -> ApiResult<LoyaltySettings> {
        self.client
            .put("/admin/loyalty-shop/settings", settings)
            .await
    }

    /// `POST /admin/loyalty-shop/products`.
    pub async fn create_product(
        &self,
        request: &UpsertLoyaltyProduct,
    ) -> ApiResult<LoyaltyProduct> {
        self.client
            .post("/admin/loyalty-shop/products", request)
            .await
    }

    /// `PUT /admin/loyalty-shop/products/:id`.
    pub async fn update_product(
        &self,
        id: &str,
        request: &UpsertLoyaltyProduct,
    ) -> ApiResult<LoyaltyProduct> {
        self.client
            .put(&format!("/admin/loyalty-shop/products/{id}"), request)
            .await
    }

    /// `DELETE /admin/loyalty-shop/products/:id`.
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/admin/loyalty-shop/products/{id}"))
            .await
    }

    /// `GET /admin/loyalty-shop/redemptions` - all users' redemptions.
    pub async fn all_redemptions(&self) -> ApiResult<Vec<Redemption>> {
        self.client.get("/admin/loyalty-shop/redemptions").await
    }

    /// `PUT /admin/loyalty-shop/redemptions/:id` - fulfil or cancel.
    pub async fn update_redemption(
        &self,
        id: &str,
        request: &UpdateRedemption,
    ) -> ApiResult<Redemption> {
        self.client
            .put(&format!("/admin/loyalty-shop/redemptions/{id}"), request)
            .await
    }
}
