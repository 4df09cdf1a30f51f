//! # API Error Types
//!
//! Error types for requests against the remote REST API.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Rejection    │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Http (reqwest) │  │  Status         │  │  InvalidBaseUrl         │ │
//! │  │  timeouts, DNS  │  │  (non-2xx with  │  │                         │ │
//! │  │  connect errors │  │   server text)  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business-rule rejections ("coupon expired", "category has children") come
//! back as [`ApiError::Status`] carrying the server's message verbatim when
//! the JSON body has an `error` field - the flows display it as-is.

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type covering all request failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failure (connection, DNS, timeout) or a body that
    /// could not be decoded.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the JSON body, or a generic fallback.
        message: String,
        /// Whether the body actually carried a server-provided message.
        server_message: bool,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// The HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidBaseUrl { .. } => None,
        }
    }

    /// True for 401/403 responses - the session should be considered dead.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// The server's own message, when the response body carried one.
    /// Used by the flows to show business-rule rejections verbatim.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message,
                server_message: true,
                ..
            } => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 422,
            message: "coupon expired".to_string(),
            server_message: true,
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.server_message(), Some("coupon expired"));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_auth_error_detection() {
        let err = ApiError::Status {
            status: 401,
            message: "unauthorized".to_string(),
            server_message: false,
        };
        assert!(err.is_auth_error());
        assert_eq!(err.server_message(), None);
    }
}
