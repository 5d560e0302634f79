//! Paginator configuration.
//!
//! [`Settings`] is an immutable record constructed once and validated
//! eagerly; nothing re-reads configuration after construction. Partial
//! config files merge over the documented defaults through serde's
//! per-struct default.

use serde::{Deserialize, Serialize};

use crate::error::PaginatorError;

/// Configuration for one paginator instance.
///
/// Field names serialize in camelCase, so a config file reads:
///
/// ```json
/// { "amount": 5, "paddles": false, "prevText": "Back" }
/// ```
///
/// Unspecified keys take the defaults listed per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Items per page. Must be at least 1; default `3`.
    ///
    /// Unsigned on purpose: a negative amount is unrepresentable and gets
    /// rejected at the deserialization boundary, leaving only zero for
    /// [`Settings::validate`] to catch.
    pub amount: usize,

    /// Show the numbered page links. Default `true`.
    pub numbers: bool,

    /// Show the previous/next paddle controls. Default `true`.
    pub paddles: bool,

    /// Label of the previous paddle. Default `"Previous"`.
    pub prev_text: String,

    /// Label of the next paddle. Default `"Next"`.
    pub next_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            amount: 3,
            numbers: true,
            paddles: true,
            prev_text: "Previous".to_string(),
            next_text: "Next".to_string(),
        }
    }
}

impl Settings {
    /// Check the configuration for values that cannot paginate.
    ///
    /// # Errors
    /// Returns [`PaginatorError::InvalidAmount`] when `amount` is zero.
    pub const fn validate(&self) -> Result<(), PaginatorError> {
        if self.amount == 0 {
            return Err(PaginatorError::InvalidAmount(self.amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let settings = Settings::default();
        assert_eq!(settings.amount, 3);
        assert!(settings.numbers);
        assert!(settings.paddles);
        assert_eq!(settings.prev_text, "Previous");
        assert_eq!(settings.next_text, "Next");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let settings = Settings {
            amount: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(PaginatorError::InvalidAmount(0)));
    }

    #[test]
    fn partial_config_merges_over_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "amount": 5, "prevText": "Back" }"#).unwrap();
        assert_eq!(settings.amount, 5);
        assert_eq!(settings.prev_text, "Back");
        // Everything unspecified stays at its default.
        assert!(settings.numbers);
        assert!(settings.paddles);
        assert_eq!(settings.next_text, "Next");
    }
}
