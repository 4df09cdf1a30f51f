//! Coupon endpoints: the checkout validator plus admin CRUD.

use chrono::{DateTime, Utc};
use mayan_core::{Coupon, CouponDiscount, CouponKind, Money};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /coupons/validate` body. The server checks expiry, usage counts and
/// minimum purchase against the supplied subtotal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCoupon {
    pub code: String,
    pub subtotal: Money,
}

/// `POST /coupons` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoupon {
    pub code: String,
    pub kind: CouponKind,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// `PUT /coupons/:id` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoupon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CouponKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Accessor for `/coupons` endpoints.
#[derive(Debug)]
pub struct CouponsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CouponsApi<'_> {
    /// `POST /coupons/validate` - returns the absolute discount for this
    /// subtotal. Fails with the server's business-rule message on an
    /// invalid, expired or below-minimum code.
    pub async fn validate(&self, code: &str, subtotal: Money) -> ApiResult<CouponDiscount> {
        self.client
            .post(
                "/coupons/validate",
                &ValidateCoupon {
                    code: code.to_string(),
                    subtotal,
                },
            )
            .await
    }

    /// `GET /coupons`.
    pub async fn list(&self) -> ApiResult<Vec<Coupon>> {
        self.client.get("/coupons").await
    }

    /// `POST /coupons`.
    pub async fn create(&self, request: &CreateCoupon) -> ApiResult<Coupon> {
        self.client.post("/coupons", request).await
    }

    /// `PUT /coupons/:id`.
    pub async fn update(&self, id: &str, request: &UpdateCoupon) -> ApiResult<Coupon> {
        self.client.put(&format!("/coupons/{id}"), request).await
    }

    /// `DELETE /coupons/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/coupons/{id}")).await
    }
}
