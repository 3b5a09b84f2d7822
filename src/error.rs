//! Error types for the transaction pricer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the pricer reports to its caller. Unknown regions and
//! unknown categories are not errors; they resolve to documented defaults.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::MAX_AMOUNT;

/// The main error type for the transaction pricer.
///
/// # Example
///
/// ```
/// use transaction_pricer::error::PricingError;
///
/// let error = PricingError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PricingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the pricer cannot use.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },

    /// A line item carried a negative amount or one above [`MAX_AMOUNT`].
    #[error(
        "Invalid amount {amount} for item '{description}': amount must be between 0 and {max}",
        max = MAX_AMOUNT
    )]
    InvalidAmount {
        /// The description of the offending item.
        description: String,
        /// The rejected amount.
        amount: Decimal,
    },

    /// A line item record was malformed.
    #[error("Invalid item at index {index}: {message}")]
    InvalidItem {
        /// Zero-based position of the item in the transaction.
        index: usize,
        /// A description of what made the item invalid.
        message: String,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PricingError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PricingError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = PricingError::InvalidConfig {
            message: "default_rate must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: default_rate must not be negative"
        );
    }

    #[test]
    fn test_invalid_amount_displays_description_and_amount() {
        let error = PricingError::InvalidAmount {
            description: "Gaming Laptop".to_string(),
            amount: Decimal::from_str("-5.00").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount -5.00 for item 'Gaming Laptop': amount must be between 0 and 1000000000000"
        );
    }

    #[test]
    fn test_invalid_item_displays_index_and_message() {
        let error = PricingError::InvalidItem {
            index: 2,
            message: "category must not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid item at index 2: category must not be blank"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PricingError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_item() -> PricingResult<()> {
            Err(PricingError::InvalidItem {
                index: 0,
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> PricingResult<()> {
            returns_invalid_item()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
