//! # API Client
//!
//! The single request wrapper every resource module goes through.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Pipeline                                   │
//! │                                                                         │
//! │  resource call (e.g. client.products().list())                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build URL: base_url + path (+ query)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  attach headers:                                                       │
//! │    Authorization: Bearer <token>   (only when a token is set)          │
//! │    Cache-Control: no-store                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send (JSON body, or multipart for file uploads)                       │
//! │       │                                                                 │
//! │       ├── 2xx ──► deserialize JSON body                                │
//! │       │                                                                 │
//! │       └── non-2xx ──► extract `error` field from the JSON body,        │
//! │                       fall back to a generic message                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Token Handling
//! The bearer token lives in an `Arc<RwLock<Option<String>>>`: written by the
//! auth flows on login/logout, read by every request. One browser-tab
//! equivalent - a single writer at a time by construction.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::multipart;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::resources::{
    AuthApi, BankAccountsApi, CategoriesApi, CouponsApi, DeliveryApi, LoyaltyShopApi, MessagesApi,
    OrdersApi, ProcurementApi, ProductsApi, RecipesApi, ReportsApi, SettingsApi, SupportApi,
    UsersApi,
};

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the Mayan REST API.
///
/// Cheap to clone; clones share the same token slot.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // =========================================================================
    // Token Management
    // =========================================================================

    /// Installs the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().expect("token lock poisoned");
        *guard = Some(token.into());
    }

    /// Drops the bearer token (logout).
    pub fn clear_token(&self) {
        let mut guard = self.token.write().expect("token lock poisoned");
        *guard = None;
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Whether a bearer token is installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    // =========================================================================
    // Resource Accessors
    // =========================================================================

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi { client: self }
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }

    pub fn coupons(&self) -> CouponsApi<'_> {
        CouponsApi { client: self }
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi { client: self }
    }

    pub fn bank_accounts(&self) -> BankAccountsApi<'_> {
        BankAccountsApi { client: self }
    }

    pub fn support(&self) -> SupportApi<'_> {
        SupportApi { client: self }
    }

    pub fn delivery(&self) -> DeliveryApi<'_> {
        DeliveryApi { client: self }
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }

    pub fn procurement(&self) -> ProcurementApi<'_> {
        ProcurementApi { client: self }
    }

    pub fn recipes(&self) -> RecipesApi<'_> {
        RecipesApi { client: self }
    }

    pub fn loyalty_shop(&self) -> LoyaltyShopApi<'_> {
        LoyaltyShopApi { client: self }
    }

    pub fn settings(&self) -> SettingsApi<'_> {
        SettingsApi { client: self }
    }

    // =========================================================================
    // Request Helpers (used by the resource modules)
    // =========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%method, %url, "api request");

        let mut builder = self
            .http
            .request(method, url)
            .header("Cache-Control", "no-store");

        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.decode(self.request(Method::GET, path).send().await?)
            .await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.decode(
            self.request(Method::GET, path)
                .query(query)
                .send()
                .await?,
        )
        .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.decode(self.request(Method::POST, path).json(body).send().await?)
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.decode(self.request(Method::PUT, path).json(body).send().await?)
            .await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.decode(self.request(Method::PUT, path).send().await?)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        self.decode(
            self.request(Method::POST, path)
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }

    /// Checks the status and returns the response for further decoding.
    async fn check_status(&self, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let (message, server_message) = extract_error_message(status, &body);
        warn!(status = status.as_u16(), %message, "api request rejected");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
            server_message,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        let response = self.check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// =============================================================================
// Error Body Extraction
// =============================================================================

/// Shape of the remote API's error responses: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pulls the `error` field out of a non-2xx JSON body; falls back to a
/// generic message when the body is empty, malformed, or missing the field.
///
/// Returns the message and whether it came from the server.
pub(crate) fn extract_error_message(status: StatusCode, body: &str) -> (String, bool) {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(error) = parsed.error {
            let error = error.trim().to_string();
            if !error.is_empty() {
                return (error, true);
            }
        }
    }

    (format!("request failed with status {}", status.as_u16()), false)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_server_error_message() {
        let (message, from_server) = extract_error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error": "Coupon has expired"}"#,
        );
        assert_eq!(message, "Coupon has expired");
        assert!(from_server);
    }

    #[test]
    fn test_extract_falls_back_on_malformed_body() {
        let (message, from_server) =
            extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(message, "request failed with status 500");
        assert!(!from_server);
    }

    #[test]
    fn test_extract_falls_back_on_missing_field() {
        let (message, from_server) =
            extract_error_message(StatusCode::BAD_REQUEST, r#"{"detail": "nope"}"#);
        assert_eq!(message, "request failed with status 400");
        assert!(!from_server);
    }

    #[test]
    fn test_extract_falls_back_on_blank_error() {
        let (_, from_server) =
            extract_error_message(StatusCode::BAD_REQUEST, r#"{"error": "  "}"#);
        assert!(!from_server);
    }

    #[test]
    fn test_token_roundtrip() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        assert!(!client.has_token());

        client.set_token("jwt-abc");
        assert_eq!(client.token().as_deref(), Some("jwt-abc"));

        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_clones_share_token_slot() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        let clone = client.clone();

        client.set_token("jwt-abc");
        assert_eq!(clone.token().as_deref(), Some("jwt-abc"));
    }
}
