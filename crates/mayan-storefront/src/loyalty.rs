//! # Loyalty Shop
//!
//! The points-redemption shop. It stays locked until the user's balance
//! reaches the configured threshold; redemptions are checked against the
//! balance client-side before the request, and the balance is re-fetched
//! afterwards (the server is authoritative).

use mayan_api::resources::loyalty_shop::CreateRedemption;
use mayan_api::ApiClient;
use mayan_core::{LoyaltyProduct, LoyaltySettings, Redemption, User};
use tracing::info;

use crate::error::{StorefrontError, StorefrontResult};

/// Whether the shop has unlocked for this user.
pub fn is_unlocked(settings: &LoyaltySettings, user: &User) -> bool {
    settings.enabled && user.loyalty_points >= settings.min_points_to_unlock
}

/// Customer-facing loyalty shop flow.
#[derive(Debug, Clone)]
pub struct LoyaltyShop {
    api: ApiClient,
}

impl LoyaltyShop {
    pub fn new(api: ApiClient) -> Self {
        LoyaltyShop { api }
    }

    /// Shop settings (threshold, enabled flag).
    pub async fn settings(&self) -> StorefrontResult<LoyaltySettings> {
        Ok(self.api.loyalty_shop().settings().await?)
    }

    /// The redeemable catalog, gated on the unlock threshold.
    pub async fn catalog(&self, user: &User) -> StorefrontResult<Vec<LoyaltyProduct>> {
        let settings = self.settings().await?;
        if !is_unlocked(&settings, user) {
            return Err(StorefrontError::LoyaltyLocked {
                required: settings.min_points_to_unlock,
                balance: user.loyalty_points,
            });
        }
        Ok(self.api.loyalty_shop().products().await?)
    }

    /// Spends points on a catalog item. The balance is checked client-side
    /// first so an obviously unaffordable redemption never hits the network.
    pub async fn redeem(
        &self,
        user: &User,
        product: &LoyaltyProduct,
    ) -> StorefrontResult<Redemption> {
        if user.loyalty_points < product.points_cost {
            return Err(StorefrontError::InsufficientPoints {
                required: product.points_cost,
                balance: user.loyalty_points,
            });
        }

        let redemption = self
            .api
            .loyalty_shop()
            .redeem(&CreateRedemption {
                loyalty_product_id: product.id.clone(),
            })
            .await?;

        info!(
            redemption = %redemption.id,
            points = product.points_cost,
            "redemption placed"
        );
        Ok(redemption)
    }

    /// The user's redemption history.
    pub async fn history(&self) -> StorefrontResult<Vec<Redemption>> {
        Ok(self.api.loyalty_shop().redemptions().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_core::UserRole;

    fn user_with_points(points: i64) -> User {
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

    #[test]
    fn test_unlock_threshold() {
        let settings = LoyaltySettings {
            enabled: true,
            min_points_to_unlock: 500,
        };
        assert!(!is_unlocked(&settings, &user_with_points(499)));
        assert!(is_unlocked(&settings, &user_with_points(500)));
        assert!(is_unlocked(&settings, &user_with_points(10_000)));
    }

    #[test]
    fn test_disabled_shop_never_unlocks() {
        let settings = LoyaltySettings {
            enabled: false,
            min_points_to_unlock: 0,
        };
        assert!(!is_unlocked(&settings, &user_with_points(1_000_000)));
    }
}
