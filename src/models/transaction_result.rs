//! Transaction result models.
//!
//! This module contains the [`TransactionResult`] type and its associated
//! structures: priced line items, the rules that applied to them, and the
//! audit trace recording every decision.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which discount rule applied to a line item.
///
/// # Example
///
/// ```
/// use transaction_pricer::models::DiscountRule;
///
/// let rule = DiscountRule::HappyHour;
/// assert_eq!(serde_json::to_string(&rule).unwrap(), "\"happy_hour\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// The happy-hour window rate.
    HappyHour,
    /// The premium-customer rate.
    Premium,
    /// The amount-threshold rate.
    Threshold,
    /// No discount.
    None,
}

/// How a line item was taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxTreatment {
    /// Category is exempt; tax is zero.
    Exempt,
    /// Base rate only.
    Standard,
    /// Base rate with the category surcharge.
    Surcharged,
}

/// A line item after discount and tax have been applied.
///
/// `discounted_amount + discount == amount` holds exactly; only `tax` is
/// rounded to the currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    /// The item description.
    pub description: String,
    /// The normalized category.
    pub category: String,
    /// The original, pre-discount amount.
    pub amount: Decimal,
    /// The discount taken off the amount.
    pub discount: Decimal,
    /// The amount after discount.
    pub discounted_amount: Decimal,
    /// Tax on the discounted amount, rounded to 2 decimal places.
    pub tax: Decimal,
    /// The discount rule that applied.
    pub discount_rule: DiscountRule,
    /// The tax treatment that applied.
    pub tax_treatment: TaxTreatment,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag recovered-by-default cases that still deserve attention,
/// such as a region missing from the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of pricing a transaction.
///
/// Every field is a deterministic function of the transaction, the
/// evaluation time and the configuration.
///
/// Invariants: `subtotal == round(sum(discounted_amount), 2)` and
/// `grand_total == round(subtotal + total_tax, 2)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// The region code as supplied.
    pub region: String,
    /// Whether the customer was marked premium.
    pub is_premium_customer: bool,
    /// The resolved base tax rate.
    pub tax_rate: Decimal,
    /// The clock time the discount policy was evaluated at.
    pub evaluated_at: NaiveTime,
    /// Sum of discounted amounts, rounded to 2 decimal places.
    pub subtotal: Decimal,
    /// Sum of per-item tax, rounded to 2 decimal places.
    pub total_tax: Decimal,
    /// Subtotal plus total tax, rounded to 2 decimal places.
    pub grand_total: Decimal,
    /// Priced items in input order.
    pub items: Vec<PricedLineItem>,
    /// Every rule decision taken while pricing.
    pub audit_trace: AuditTrace,
}

impl TransactionResult {
    /// Total discount across all items, rounded to 2 decimal places.
    pub fn total_discount(&self) -> Decimal {
        crate::calculation::round_currency(self.items.iter().map(|i| i.discount).sum())
    }
}
