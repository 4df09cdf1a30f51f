//! # Coupon Administration
//!
//! Coupon CRUD. This screen keeps its list in memory and patches it locally
//! after a delete instead of re-fetching - the one place the original traded
//! a round-trip for a snappier list. Creates and updates still re-fetch.

use mayan_api::resources::coupons::{CreateCoupon, UpdateCoupon};
use mayan_api::ApiClient;
use mayan_core::{validation, Coupon};
use tracing::info;

use crate::error::StorefrontResult;

/// The coupon administration flow, holding the screen's list.
#[derive(Debug)]
pub struct CouponAdmin {
    api: ApiClient,
    coupons: Vec<Coupon>,
}

impl CouponAdmin {
    pub fn new(api: ApiClient) -> Self {
        CouponAdmin {
            api,
            coupons: Vec::new(),
        }
    }

    /// The list as currently displayed.
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Re-fetches the list.
    pub async fn load(&mut self) -> StorefrontResult<&[Coupon]> {
        self.coupons = self.api.coupons().list().await?;
        Ok(&self.coupons)
    }

    /// Creates a coupon, then re-fetches.
    pub async fn create(&mut self, request: &CreateCoupon) -> StorefrontResult<&[Coupon]> {
        validation::validate_coupon_code(&request.code)
            .map_err(mayan_core::CoreError::from)?;

        let created = self.api.coupons().create(request).await?;
        info!(coupon = %created.code, "coupon created");
        self.load().await
    }

    /// Updates a coupon, then re-fetches.
    pub async fn update(
        &mut self,
        id: &str,
        request: &UpdateCoupon,
    ) -> StorefrontResult<&[Coupon]> {
        self.api.coupons().update(id, request).await?;
        self.load().await
    }

    /// Deletes a coupon and patches the local list - no re-fetch.
    pub async fn delete(&mut self, id: &str) -> StorefrontResult<&[Coupon]> {
        self.api.coupons().delete(id).await?;
        self.coupons.retain(|c| c.id != id);
        info!(coupon = %id, "coupon deleted");
        Ok(&self.coupons)
    }
}
