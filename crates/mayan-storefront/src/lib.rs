//! # mayan-storefront: Page-Level Flows
//!
//! The orchestration layer the storefront UI binds to. Every screen of the
//! shop and the admin panel corresponds to a flow/service here, each a thin
//! composition of the three lower crates:
//!
//! - [`mayan_core`] - pure business logic (pricing, cart rules, category
//!   tree composition)
//! - [`mayan_api`] - the remote REST API client
//! - [`mayan_store`] - the persisted cart, session and locale
//!
//! ## Screens → Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront                         Admin panel                         │
//! │  ──────────                         ───────────                         │
//! │  home / shop      CatalogService    categories   CategoryAdmin          │
//! │  cart / checkout  CheckoutSession   orders       OrderAdmin             │
//! │  sign in / out    StorefrontSession coupons      CouponAdmin            │
//! │  invoices         InvoicesService   procurement  ProcurementAdmin       │
//! │  reward shop      LoyaltyShop       users        UserAdmin              │
//! │  inbox            MessagingService  (bank accounts, recipes, reports,   │
//! │                                      settings bind ApiClient directly)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wiring
//! [`Storefront::open`] builds the whole stack: config from the environment,
//! the shared [`ApiClient`](mayan_api::ApiClient), and the three persisted
//! stores, restoring any previous session's cart, token and locale.

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod invoices;
pub mod loyalty;
pub mod messaging;
pub mod session;

pub use catalog::{CatalogService, HomePage};
pub use checkout::{AppliedCoupon, CheckoutSession, DeliveryDetails};
pub use error::{StorefrontError, StorefrontResult};
pub use invoices::InvoicesService;
pub use loyalty::LoyaltyShop;
pub use messaging::MessagingService;
pub use session::StorefrontSession;

use std::sync::Arc;

use mayan_api::{ApiClient, ApiConfig};
use mayan_store::{AuthStore, CartStore, LocaleStore, Storage};
use tracing::info;

/// The fully wired storefront: shared client, stores and entry points for
/// every flow.
#[derive(Debug, Clone)]
pub struct Storefront {
    api: ApiClient,
    cart: Arc<CartStore>,
    session: StorefrontSession,
}

impl Storefront {
    /// Opens the storefront with config from the environment and state from
    /// the default profile directory.
    pub fn open() -> StorefrontResult<Self> {
        let config = ApiConfig::from_env()?;
        let storage = Storage::open_default()?;
        Self::open_with(config, storage)
    }

    /// Opens the storefront with explicit config and storage (tests,
    /// embedders).
    pub fn open_with(config: ApiConfig, storage: Storage) -> StorefrontResult<Self> {
        let api = ApiClient::new(config)?;

        let cart = Arc::new(CartStore::open(storage.clone())?);
        let auth = Arc::new(AuthStore::open(storage.clone())?);
        let locale = Arc::new(LocaleStore::open(storage)?);

        // Reinstall a persisted token immediately so the first requests are
        // authenticated; session.restore() then verifies it against /auth/me.
        if let Some(token) = auth.token() {
            api.set_token(token);
        }

        let session = StorefrontSession::new(api.clone(), auth, locale);

        info!(base_url = api.base_url(), "storefront opened");
        Ok(Storefront { api, cart, session })
    }

    /// The shared API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The sign-in/locale session.
    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    /// The persisted cart store.
    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    // =========================================================================
    // Flow Constructors
    // =========================================================================

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.api.clone())
    }

    pub fn checkout(&self) -> CheckoutSession {
        CheckoutSession::new(self.api.clone(), Arc::clone(&self.cart))
    }

    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.api.clone())
    }

    pub fn loyalty_shop(&self) -> LoyaltyShop {
        LoyaltyShop::new(self.api.clone())
    }

    pub fn messaging(&self) -> MessagingService {
        MessagingService::new(self.api.clone())
    }

    pub fn category_admin(&self) -> admin::CategoryAdmin {
        admin::CategoryAdmin::new(self.api.clone())
    }

    pub fn order_admin(&self) -> admin::OrderAdmin {
        admin::OrderAdmin::new(self.api.clone())
    }

    pub fn coupon_admin(&self) -> admin::CouponAdmin {
        admin::CouponAdmin::new(self.api.clone())
    }

    pub fn procurement_admin(&self) -> admin::ProcurementAdmin {
        admin::ProcurementAdmin::new(self.api.clone())
    }

    pub fn user_admin(&self) -> admin::UserAdmin {
        admin::UserAdmin::new(self.api.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_core::Locale;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[test]
    fn test_open_with_restores_persisted_token() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = Storage::open(dir.path()).unwrap();
            let auth = AuthStore::open(storage).unwrap();
            auth.set_session(mayan_store::Session {
                token: "jwt-persisted".to_string(),
                user: mayan_core::User {
                    id: "u1".to_string(),
                    name: "Dunya".to_string(),
                    email: "dunya@example.com".to_string(),
                    phone: None,
                    role: mayan_core::UserRole::Customer,
                    loyalty_points: 0,
                    created_at: None,
                },
            })
            .unwrap();
        }

        let storefront = Storefront::open_with(
            ApiConfig::default(),
            Storage::open(dir.path()).unwrap(),
        )
        .unwrap();

        assert_eq!(storefront.api().token().as_deref(), Some("jwt-persisted"));
        assert!(storefront.session().current_user().is_some());
    }

    #[test]
    fn test_open_with_fresh_state_is_signed_out() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let storefront = Storefront::open_with(
            ApiConfig::default(),
            Storage::open(dir.path()).unwrap(),
        )
        .unwrap();

        assert!(!storefront.api().has_token());
        assert!(storefront.session().current_user().is_none());
        assert_eq!(storefront.session().locale(), Locale::Ar);
        assert!(storefront.cart().snapshot().is_empty());
    }
}
