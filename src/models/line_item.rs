//! Line item model.
//!
//! A [`LineItem`] is one validated purchase within a transaction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::normalize_category;
use crate::error::{PricingError, PricingResult};

use super::transaction::LineItemInput;

/// Description used when an input item omits one.
pub const DEFAULT_DESCRIPTION: &str = "Item";

/// Category used when an input item omits one.
pub const DEFAULT_CATEGORY: &str = "standard";

/// Largest accepted item amount (one trillion).
///
/// Keeps every sum and product the pricer forms well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// A single purchased item.
///
/// Construct through [`LineItem::new`] or deserialize from the same shape as
/// [`LineItemInput`]; either way the amount lies in `0..=MAX_AMOUNT` and the
/// category is stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemInput")]
pub struct LineItem {
    description: String,
    amount: Decimal,
    category: String,
}

impl LineItem {
    /// Creates a validated line item.
    ///
    /// Errors from this constructor report item index 0; when items are
    /// built from a transaction record the error carries the item's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use transaction_pricer::models::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = LineItem::new("Accessories", Decimal::new(7500, 2), "Standard").unwrap();
    /// assert_eq!(item.category(), "standard");
    ///
    /// assert!(LineItem::new("Refund", Decimal::new(-100, 2), "standard").is_err());
    /// ```
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl AsRef<str>,
    ) -> PricingResult<Self> {
        Self::validated(0, description.into(), amount, category.as_ref())
    }

    pub(crate) fn validated(
        index: usize,
        description: String,
        amount: Decimal,
        category: &str,
    ) -> PricingResult<Self> {
        if description.trim().is_empty() {
            return Err(PricingError::InvalidItem {
                index,
                message: "description must not be blank".to_string(),
            });
        }

        let category = normalize_category(category);
        if category.is_empty() {
            return Err(PricingError::InvalidItem {
                index,
                message: "category must not be blank".to_string(),
            });
        }

        if (amount.is_sign_negative() && !amount.is_zero()) || amount > MAX_AMOUNT {
            return Err(PricingError::InvalidAmount {
                description,
                amount,
            });
        }

        Ok(Self {
            description,
            amount,
            category,
        })
    }

    /// Returns the item description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the pre-discount amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the normalized category.
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = PricingError;

    fn try_from(input: LineItemInput) -> PricingResult<Self> {
        input.into_line_item(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_normalizes_category() {
        let item = LineItem::new("Gaming Laptop", dec("2500.00"), "  LUXURY ").unwrap();

        assert_eq!(item.description(), "Gaming Laptop");
        assert_eq!(item.amount(), dec("2500.00"));
        assert_eq!(item.category(), "luxury");
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let item = LineItem::new("Free Sample", Decimal::ZERO, "food").unwrap();
        assert_eq!(item.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let item = LineItem::new("Free Sample", dec("-0.00"), "food");
        assert!(item.is_ok());
    }

    #[test]
    fn test_negative_amount_returns_invalid_amount() {
        let result = LineItem::new("Refund", dec("-0.01"), "standard");

        match result {
            Err(PricingError::InvalidAmount {
                description,
                amount,
            }) => {
                assert_eq!(description, "Refund");
                assert_eq!(amount, dec("-0.01"));
            }
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_max_amount_is_accepted() {
        let item = LineItem::new("Yacht", MAX_AMOUNT, "luxury").unwrap();
        assert_eq!(item.amount(), dec("1000000000000"));
    }

    #[test]
    fn test_amount_above_max_returns_invalid_amount() {
        let result = LineItem::new("Overflow", Decimal::MAX, "standard");

        match result {
            Err(PricingError::InvalidAmount { amount, .. }) => assert_eq!(amount, Decimal::MAX),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
        assert!(LineItem::new("Just Over", MAX_AMOUNT + dec("0.01"), "standard").is_err());
    }

    #[test]
    fn test_deserialize_validates_and_normalizes() {
        let item: LineItem =
            serde_json::from_str(r#"{ "description": "Watch", "amount": "50.00", "type": "  LUXURY " }"#)
                .unwrap();

        assert_eq!(item.category(), "luxury");
        assert_eq!(item.amount(), dec("50.00"));
    }

    #[test]
    fn test_deserialize_rejects_negative_amount() {
        let result = serde_json::from_str::<LineItem>(
            r#"{ "description": "Refund", "amount": "-50.00", "category": "standard" }"#,
        );

        let error = result.unwrap_err().to_string();
        assert!(error.contains("Invalid amount -50.00"), "unexpected error: {}", error);
    }

    #[test]
    fn test_deserialize_rejects_blank_description() {
        let result = serde_json::from_str::<LineItem>(
            r#"{ "description": "", "amount": "5.00", "category": "standard" }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_item_deserializes_to_itself() {
        let item = LineItem::new("Import Fees", dec("150.00"), "Imported").unwrap();
        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(serde_json::from_str::<LineItem>(&json).unwrap(), item);
    }

    #[test]
    fn test_blank_category_returns_invalid_item() {
        let result = LineItem::new("Widget", dec("1.00"), "   ");
        assert!(matches!(
            result,
            Err(PricingError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_blank_description_returns_invalid_item() {
        let result = LineItem::validated(3, "".to_string(), dec("1.00"), "standard");

        match result {
            Err(PricingError::InvalidItem { index, message }) => {
                assert_eq!(index, 3);
                assert!(message.contains("description"));
            }
            other => panic!("Expected InvalidItem, got {:?}", other),
        }
    }
}
