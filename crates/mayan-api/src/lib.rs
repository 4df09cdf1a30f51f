//! # mayan-api: Remote REST API Client
//!
//! Typed client for the Mayan REST API. All traffic from the storefront goes
//! through [`ApiClient`]: one request wrapper handling the base URL, bearer
//! token, `no-store` caching, JSON/multipart bodies and error-body
//! extraction, plus a resource module per endpoint family.
//!
//! ## Usage
//! ```rust,no_run
//! use mayan_api::{ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), mayan_api::ApiError> {
//! let client = ApiClient::new(ApiConfig::from_env()?)?;
//!
//! let response = client.auth().login(&mayan_api::resources::auth::LoginRequest {
//!     email: "user@example.com".to_string(),
//!     password: "secret".to_string(),
//! }).await?;
//! client.set_token(response.token);
//!
//! let products = client.products().list(&Default::default()).await?;
//! # let _ = products;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//! Non-2xx responses become [`ApiError::Status`] carrying the `error` field
//! of the JSON body when present (business-rule rejections are shown to the
//! user verbatim), or a generic message otherwise.

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

pub use client::ApiClient;
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
