//! # Locale Module
//!
//! The storefront is bilingual (Arabic/English). Every user-visible record
//! carries both an Arabic and an English name; the active locale picks which
//! one is displayed, and user-facing error messages come in pairs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Locale
// =============================================================================

/// The active display language.
///
/// Persisted client-side (`locale-storage`) and mirrored into a `locale`
/// cookie so the server can pick the right translation bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Arabic - the storefront's primary audience.
    #[default]
    Ar,
    /// English.
    En,
}

impl Locale {
    /// Cookie / storage value for this locale.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Whether this locale renders right-to-left.
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(crate::error::ValidationError::NotAllowed {
                field: "locale".to_string(),
                allowed: vec!["ar".to_string(), "en".to_string()],
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Bilingual text selection
// =============================================================================

/// Picks the display name for the active locale, falling back to the other
/// language when the preferred one is empty.
///
/// ## Example
/// ```rust
/// use mayan_core::locale::{pick, Locale};
///
/// assert_eq!(pick("Lipstick", "أحمر شفاه", Locale::Ar), "أحمر شفاه");
/// assert_eq!(pick("Lipstick", "", Locale::Ar), "Lipstick");
/// ```
pub fn pick<'a>(en: &'a str, ar: &'a str, locale: Locale) -> &'a str {
    let (preferred, fallback) = match locale {
        Locale::Ar => (ar, en),
        Locale::En => (en, ar),
    };
    if preferred.trim().is_empty() {
        fallback
    } else {
        preferred
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Locale::default(), Locale::Ar);
        assert!(Locale::default().is_rtl());
    }

    #[test]
    fn test_parsing() {
        assert_eq!("ar".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_pick_prefers_active_locale() {
        assert_eq!(pick("Serum", "سيروم", Locale::En), "Serum");
        assert_eq!(pick("Serum", "سيروم", Locale::Ar), "سيروم");
    }

    #[test]
    fn test_pick_falls_back_on_empty() {
        assert_eq!(pick("", "سيروم", Locale::En), "سيروم");
        assert_eq!(pick("Serum", "  ", Locale::Ar), "Serum");
    }
}
