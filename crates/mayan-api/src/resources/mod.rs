//! # Resource Modules
//!
//! One module per endpoint family of the remote API. Each module exposes a
//! borrowed accessor struct created by [`crate::ApiClient`] (e.g.
//! `client.products()`), keeping request paths and body shapes in one place
//! per resource.

pub mod auth;
pub mod bank_accounts;
pub mod categories;
pub mod coupons;
pub mod delivery;
pub mod loyalty_shop;
pub mod messages;
pub mod orders;
pub mod procurement;
pub mod products;
pub mod recipes;
pub mod reports;
pub mod settings;
pub mod support;
pub mod users;

pub use auth::AuthApi;
pub use bank_accounts::BankAccountsApi;
pub use categories::CategoriesApi;
pub use coupons::CouponsApi;
pub use delivery::DeliveryApi;
pub use loyalty_shop::LoyaltyShopApi;
pub use messages::MessagesApi;
pub use orders::OrdersApi;
pub use procurement::ProcurementApi;
pub use products::ProductsApi;
pub use recipes::RecipesApi;
pub use reports::ReportsApi;
pub use settings::SettingsApi;
pub use support::SupportApi;
pub use users::UsersApi;
