//! # Storefront Session
//!
//! Sign-in state and locale for one running storefront instance.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                                  │
//! │                                                                         │
//! │  startup ──► restore(): persisted token → ApiClient, then /auth/me      │
//! │                         refreshes the user snapshot (a rejected token   │
//! │                         clears the session instead of erroring)         │
//! │                                                                         │
//! │  login/register ──► token installed + session persisted                 │
//! │                                                                         │
//! │  logout ──► token dropped + session file removed                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use mayan_api::resources::auth::{LoginRequest, RegisterRequest};
use mayan_api::ApiClient;
use mayan_core::{validation, Locale, User};
use mayan_store::{AuthStore, LocaleStore, Session};
use tracing::{info, warn};

use crate::error::StorefrontResult;

/// Sign-in and locale state shared by every flow.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    api: ApiClient,
    auth: Arc<AuthStore>,
    locale: Arc<LocaleStore>,
}

impl StorefrontSession {
    /// Wires the session over the shared client and stores.
    pub fn new(api: ApiClient, auth: Arc<AuthStore>, locale: Arc<LocaleStore>) -> Self {
        StorefrontSession { api, auth, locale }
    }

    /// The shared API client (token slot included).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // =========================================================================
    // Restore
    // =========================================================================

    /// Restores a persisted session at startup: installs the stored token
    /// and refreshes the user snapshot from `/auth/me`.
    ///
    /// A token the server no longer accepts clears the session - the user
    /// simply lands signed out.
    pub async fn restore(&self) -> StorefrontResult<Option<User>> {
        let Some(session) = self.auth.session() else {
            return Ok(None);
        };

        self.api.set_token(session.token.as_str());

        match self.api.auth().me().await {
            Ok(user) => {
                self.auth.update_user(user.clone())?;
                info!(user = %user.id, "session restored");
                Ok(Some(user))
            }
            Err(e) if e.is_auth_error() => {
                warn!("persisted token rejected; clearing session");
                self.api.clear_token();
                self.auth.clear()?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    // =========================================================================
    // Login / Register / Logout
    // =========================================================================

    /// `POST /auth/login`, then installs and persists the session.
    pub async fn login(&self, email: &str, password: &str) -> StorefrontResult<User> {
        validation::validate_email(email).map_err(mayan_core::CoreError::from)?;

        let response = self
            .api
            .auth()
            .login(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;

        self.api.set_token(response.token.as_str());
        self.auth.set_session(Session {
            token: response.token,
            user: response.user.clone(),
        })?;

        info!(user = %response.user.id, "signed in");
        Ok(response.user)
    }

    /// `POST /auth/register`, then installs and persists the session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> StorefrontResult<User> {
        validation::validate_name("name", name).map_err(mayan_core::CoreError::from)?;
        validation::validate_email(email).map_err(mayan_core::CoreError::from)?;

        let response = self
            .api
            .auth()
            .register(&RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
                phone: phone.map(str::to_string),
            })
            .await?;

        self.api.set_token(response.token.as_str());
        self.auth.set_session(Session {
            token: response.token,
            user: response.user.clone(),
        })?;

        info!(user = %response.user.id, "registered");
        Ok(response.user)
    }

    /// Drops the token and removes the persisted session.
    pub fn logout(&self) -> StorefrontResult<()> {
        self.api.clear_token();
        self.auth.clear()?;
        info!("signed out");
        Ok(())
    }

    // =========================================================================
    // User / Locale Accessors
    // =========================================================================

    /// The signed-in user snapshot, if any.
    pub fn current_user(&self) -> Option<User> {
        self.auth.session().map(|s| s.user)
    }

    /// Re-fetches `/auth/me` and refreshes the snapshot. Used after
    /// operations that change the loyalty balance.
    pub async fn refresh_user(&self) -> StorefrontResult<User> {
        let user = self.api.auth().me().await?;
        self.auth.update_user(user.clone())?;
        Ok(user)
    }

    /// The active display locale.
    pub fn locale(&self) -> Locale {
        self.locale.locale()
    }

    /// Switches and persists the display locale.
    pub fn set_locale(&self, locale: Locale) -> StorefrontResult<()> {
        self.locale.set_locale(locale)?;
        Ok(())
    }
}
