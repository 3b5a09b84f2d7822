//! Transaction input records and their validated form.
//!
//! [`TransactionInput`] mirrors the loosely-shaped record callers hand in:
//! every field is optional and a few keys have legacy aliases. Converting it
//! into a [`Transaction`] applies the documented defaults and validates each
//! item, so the calculation functions only ever see well-formed data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_REGION;
use crate::error::{PricingError, PricingResult};

use super::line_item::{DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, LineItem};

/// A transaction record as received from a caller.
///
/// # Example
///
/// ```
/// use transaction_pricer::models::{Transaction, TransactionInput};
///
/// let input: TransactionInput = serde_json::from_str(r#"{
///     "region": "TX",
///     "isPremiumCustomer": true,
///     "items": [{ "description": "Import Fees", "amount": 150.0, "type": "imported" }]
/// }"#).unwrap();
///
/// let transaction = Transaction::try_from(input).unwrap();
/// assert!(transaction.is_premium_customer());
/// assert_eq!(transaction.items()[0].category(), "imported");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Region code; defaults to `CA`.
    #[serde(default)]
    pub region: Option<String>,
    /// Loyalty flag; defaults to false.
    #[serde(default, alias = "isPremiumCustomer", alias = "is_premium_customer")]
    pub premium_customer: bool,
    /// Purchased items in order.
    #[serde(default)]
    pub items: Vec<LineItemInput>,
}

/// A line item as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Defaults to `"Item"`.
    #[serde(default)]
    pub description: Option<String>,
    /// Accepts a JSON number or a decimal string; defaults to zero.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Also accepted under the key `type`; defaults to `"standard"`.
    #[serde(default, alias = "type")]
    pub category: Option<String>,
}

impl LineItemInput {
    pub(super) fn into_line_item(self, index: usize) -> PricingResult<LineItem> {
        LineItem::validated(
            index,
            self.description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            self.amount.unwrap_or(Decimal::ZERO),
            self.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
        )
    }
}

/// A validated transaction ready for pricing.
///
/// Deserializes from the [`TransactionInput`] shape, so a decoded
/// transaction has passed the same validation as [`Transaction::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionInput")]
pub struct Transaction {
    region: String,
    is_premium_customer: bool,
    items: Vec<LineItem>,
}

impl Transaction {
    /// Creates a transaction from already-validated items.
    pub fn new(region: impl Into<String>, is_premium_customer: bool, items: Vec<LineItem>) -> Self {
        Self {
            region: region.into(),
            is_premium_customer,
            items,
        }
    }

    /// Returns the region code as supplied.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns true if the customer is marked premium.
    pub fn is_premium_customer(&self) -> bool {
        self.is_premium_customer
    }

    /// Returns the items in input order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

impl TryFrom<TransactionInput> for Transaction {
    type Error = PricingError;

    fn try_from(input: TransactionInput) -> PricingResult<Self> {
        let items = input
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_line_item(index))
            .collect::<PricingResult<Vec<_>>>()?;

        let region = match input.region {
            Some(region) if !region.trim().is_empty() => region,
            _ => DEFAULT_REGION.to_string(),
        };

        Ok(Self::new(region, input.premium_customer, items))
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
    fn test_deserialize_legacy_keys() {
        let json = r#"{
            "region": "CA",
            "premium_customer": true,
            "items": [
                { "description": "Gaming Laptop", "amount": 2500.0, "type": "luxury" },
                { "description": "Software License", "amount": "199.99", "category": "digital" }
            ]
        }"#;

        let input: TransactionInput = serde_json::from_str(json).unwrap();
        assert!(input.premium_customer);
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items[0].category.as_deref(), Some("luxury"));
        assert_eq!(input.items[1].amount, Some(dec("199.99")));
    }

    #[test]
    fn test_deserialize_camel_case_premium_flag() {
        let input: TransactionInput =
            serde_json::from_str(r#"{ "isPremiumCustomer": true }"#).unwrap();
        assert!(input.premium_customer);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let input: TransactionInput = serde_json::from_str(r#"{ "items": [{}] }"#).unwrap();
        let transaction = Transaction::try_from(input).unwrap();

        assert_eq!(transaction.region(), "CA");
        assert!(!transaction.is_premium_customer());

        let item = &transaction.items()[0];
        assert_eq!(item.description(), "Item");
        assert_eq!(item.amount(), Decimal::ZERO);
        assert_eq!(item.category(), "standard");
    }

    #[test]
    fn test_blank_region_uses_default() {
        let input = TransactionInput {
            region: Some("  ".to_string()),
            ..Default::default()
        };

        let transaction = Transaction::try_from(input).unwrap();
        assert_eq!(transaction.region(), "CA");
    }

    #[test]
    fn test_item_order_is_preserved() {
        let input = TransactionInput {
            region: Some("TX".to_string()),
            premium_customer: false,
            items: ["first", "second", "third"]
                .iter()
                .map(|d| LineItemInput {
                    description: Some(d.to_string()),
                    amount: Some(dec("1.00")),
                    category: None,
                })
                .collect(),
        };

        let transaction = Transaction::try_from(input).unwrap();
        let descriptions: Vec<&str> = transaction.items().iter().map(|i| i.description()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_invalid_item_reports_its_index() {
        let input = TransactionInput {
            region: None,
            premium_customer: false,
            items: vec![
                LineItemInput::default(),
                LineItemInput {
                    category: Some("".to_string()),
                    ..Default::default()
                },
            ],
        };

        match Transaction::try_from(input) {
            Err(PricingError::InvalidItem { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidItem, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let input = TransactionInput {
            items: vec![LineItemInput {
                description: Some("Refund".to_string()),
                amount: Some(dec("-10.00")),
                category: None,
            }],
            ..Default::default()
        };

        assert!(matches!(
            Transaction::try_from(input),
            Err(PricingError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_deserialize_transaction_rejects_negative_amount() {
        let result = serde_json::from_str::<Transaction>(
            r#"{ "region": "TX", "items": [{ "description": "Refund", "amount": "-50.00" }] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_transaction_applies_defaults() {
        let transaction: Transaction =
            serde_json::from_str(r#"{ "items": [{ "amount": "5.00", "type": " Food " }] }"#).unwrap();

        assert_eq!(transaction.region(), "CA");
        assert_eq!(transaction.items()[0].category(), "food");
    }

    #[test]
    fn test_serialized_transaction_deserializes_to_itself() {
        let items = vec![LineItem::new("Watch", dec("300.00"), "luxury").unwrap()];
        let transaction = Transaction::new("TX", true, items);
        let json = serde_json::to_string(&transaction).unwrap();

        assert_eq!(serde_json::from_str::<Transaction>(&json).unwrap(), transaction);
    }

    #[test]
    fn test_non_numeric_amount_fails_to_deserialize() {
        let result: Result<TransactionInput, _> =
            serde_json::from_str(r#"{ "items": [{ "amount": "ten dollars" }] }"#);
        assert!(result.is_err());
    }
}
