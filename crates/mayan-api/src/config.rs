//! # API Client Configuration
//!
//! Configuration for the remote API connection.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit value passed by the embedder                              │
//! │     ApiConfig::new("https://staging.api.mayan.store/api")              │
//! │                                                                         │
//! │  2. Environment variable                                               │
//! │     MAYAN_API_URL=https://api.example.com/api                          │
//! │                                                                         │
//! │  3. Default value                                                      │
//! │     https://api.mayan.store/api                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "MAYAN_API_URL";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mayan.store/api";

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all request paths are appended to. No trailing slash.
    pub base_url: String,

    /// Overall request timeout (seconds).
    pub timeout_secs: u64,

    /// Connection timeout (seconds).
    pub connect_timeout_secs: u64,
}

impl ApiConfig {
    /// Creates a config for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let config = ApiConfig {
            base_url: normalize_base_url(base_url.into()),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config from `MAYAN_API_URL`, falling back to the default.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Validates the base URL shape.
    pub fn validate(&self) -> ApiResult<()> {
        let parsed = Url::parse(&self.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Strips trailing slashes so `base_url + "/path"` never doubles up.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("https://api.example.com/api/").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/api");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("ftp://files.example.com").is_err());
    }
}
