//! # Storefront Error Type
//!
//! The single error type the UI sees from every flow.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  flow method (e.g. checkout.apply_coupon)                              │
//! │       │                                                                 │
//! │       ├── CoreError   (cart rules)        ──┐                           │
//! │       ├── ApiError    (network/rejection) ──┼──► StorefrontError        │
//! │       └── StoreError  (persisted state)   ──┘        │                  │
//! │                                                      ▼                  │
//! │                                        toast(locale) - one bilingual    │
//! │                                        string for the notification      │
//! │                                                                         │
//! │  Server business-rule rejections keep the server's message verbatim;    │
//! │  everything else falls back to a generic localized message.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures never escape a flow as a panic; every method returns `Result`
//! and the embedding UI turns the error into a toast.

use mayan_api::ApiError;
use mayan_core::{CoreError, Locale};
use mayan_store::StoreError;
use thiserror::Error;

/// Result type alias for storefront flows.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Unified error for every flow in this crate.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart/business-rule violation from mayan-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Remote API failure or rejection.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Persisted state failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Checkout attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// An operation that needs a signed-in user ran without a session.
    #[error("not signed in")]
    NotSignedIn,

    /// The loyalty shop has not unlocked for this user yet.
    #[error("loyalty shop locked: {required} points required, balance is {balance}")]
    LoyaltyLocked { required: i64, balance: i64 },

    /// A redemption costs more points than the user has.
    #[error("insufficient points: {required} required, balance is {balance}")]
    InsufficientPoints { required: i64, balance: i64 },

    /// Category deletion rejected upstream. The server gives no finer
    /// diagnosis, so neither do we.
    #[error("category may contain subcategories or products")]
    CategoryNotDeletable,
}

impl StorefrontError {
    /// The toast text for the active locale.
    ///
    /// Business-rule rejections carrying a server message are shown
    /// verbatim; all other failures collapse to a generic localized message.
    pub fn toast(&self, locale: Locale) -> String {
        match self {
            StorefrontError::Api(api) => {
                if let Some(message) = api.server_message() {
                    return message.to_string();
                }
                bilingual(
                    locale,
                    "Something went wrong. Please try again.",
                    "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
                )
            }
            StorefrontError::EmptyCart => {
                bilingual(locale, "Your cart is empty.", "سلة التسوق فارغة.")
            }
            StorefrontError::NotSignedIn => bilingual(
                locale,
                "Please sign in to continue.",
                "يرجى تسجيل الدخول للمتابعة.",
            ),
            StorefrontError::LoyaltyLocked { required, .. } => match locale {
                Locale::En => format!("The reward shop unlocks at {required} points."),
                Locale::Ar => format!("يفتح متجر المكافآت عند {required} نقطة."),
            },
            StorefrontError::InsufficientPoints { required, balance } => match locale {
                Locale::En => {
                    format!("You need {required} points but have {balance}.")
                }
                Locale::Ar => format!("تحتاج إلى {required} نقطة ولديك {balance} فقط."),
            },
            StorefrontError::CategoryNotDeletable => bilingual(
                locale,
                "Cannot delete: the category may contain subcategories or products.",
                "لا يمكن الحذف: قد تحتوي الفئة على فئات فرعية أو منتجات.",
            ),
            StorefrontError::Core(core) => match locale {
                Locale::En => core.to_string(),
                Locale::Ar => "تعذر تحديث سلة التسوق. يرجى المحاولة مرة أخرى.".to_string(),
            },
            StorefrontError::Store(_) => bilingual(
                locale,
                "Could not save your changes on this device.",
                "تعذر حفظ التغييرات على هذا الجهاز.",
            ),
        }
    }
}

fn bilingual(locale: Locale, en: &str, ar: &str) -> String {
    match locale {
        Locale::En => en.to_string(),
        Locale::Ar => ar.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_shown_verbatim() {
        let err = StorefrontError::Api(ApiError::Status {
            status: 422,
            message: "Coupon requires a minimum purchase of 10,000".to_string(),
            server_message: true,
        });
        assert_eq!(
            err.toast(Locale::En),
            "Coupon requires a minimum purchase of 10,000"
        );
        // Verbatim regardless of locale - the server already localized it.
        assert_eq!(
            err.toast(Locale::Ar),
            "Coupon requires a minimum purchase of 10,000"
        );
    }

    #[test]
    fn test_generic_fallback_is_localized() {
        let err = StorefrontError::Api(ApiError::Status {
            status: 500,
            message: "request failed with status 500".to_string(),
            server_message: false,
        });
        assert_eq!(
            err.toast(Locale::En),
            "Something went wrong. Please try again."
        );
        assert_eq!(
            err.toast(Locale::Ar),
            "حدث خطأ ما. يرجى المحاولة مرة أخرى."
        );
    }

    #[test]
    fn test_category_delete_message() {
        let err = StorefrontError::CategoryNotDeletable;
        assert!(err.toast(Locale::En).contains("subcategories or products"));
        assert!(err.toast(Locale::Ar).contains("فئات فرعية"));
    }

    #[test]
    fn test_loyalty_locked_message_carries_threshold() {
        let err = StorefrontError::LoyaltyLocked {
            required: 500,
            balance: 120,
        };
        assert!(err.toast(Locale::En).contains("500"));
        assert!(err.toast(Locale::Ar).contains("500"));
    }
}
