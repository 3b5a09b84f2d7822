//! Transaction aggregation.
//!
//! Runs the per-item pipeline (discount, then tax) over a transaction and
//! accumulates the subtotal, tax total and grand total.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::clock::Clock;
use crate::config::PricingConfig;
use crate::error::PricingResult;
use crate::models::{
    AuditTrace, AuditWarning, PricedLineItem, Transaction, TransactionInput, TransactionResult,
};

use super::discount::apply_discount;
use super::rate_resolver::{RateSource, resolve_tax_rate};
use super::rounding::round_currency;
use super::tax::calculate_tax;

/// Prices a validated transaction at the given time of day.
///
/// The base rate is resolved once, then every item is discounted and taxed
/// in input order. Subtotal and tax total are each rounded to the currency
/// unit, and the grand total is the rounded sum of those two rounded terms.
///
/// The function is pure: identical arguments always produce an identical
/// result.
///
/// # Examples
///
/// ```
/// use transaction_pricer::calculation::price_transaction;
/// use transaction_pricer::config::PricingConfig;
/// use transaction_pricer::models::{LineItem, Transaction};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let item = LineItem::new("Widget", Decimal::new(10000, 2), "standard").unwrap();
/// let transaction = Transaction::new("TX", false, vec![item]);
/// let ten_am = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
///
/// let result = price_transaction(&transaction, &PricingConfig::default(), ten_am);
/// assert_eq!(result.subtotal, Decimal::new(10000, 2));
/// assert_eq!(result.total_tax, Decimal::new(600, 2));
/// assert_eq!(result.grand_total, Decimal::new(10600, 2));
/// ```
pub fn price_transaction(
    transaction: &Transaction,
    config: &PricingConfig,
    evaluated_at: NaiveTime,
) -> TransactionResult {
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let resolution = resolve_tax_rate(transaction.region(), config, step_number);
    let rate = resolution.rate;
    if resolution.source == RateSource::Default {
        trace.warnings.push(AuditWarning {
            code: "UNKNOWN_REGION".to_string(),
            message: format!(
                "Region '{}' is not configured; default rate {} applied",
                transaction.region(),
                rate
            ),
            severity: "low".to_string(),
        });
    }
    trace.steps.push(resolution.audit_step);
    step_number += 1;

    let mut subtotal = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    let mut items = Vec::with_capacity(transaction.items().len());

    for item in transaction.items() {
        let discount = apply_discount(
            item.amount(),
            transaction.is_premium_customer(),
            evaluated_at,
            config,
            step_number,
        );
        trace.steps.push(discount.audit_step);
        step_number += 1;

        let tax = calculate_tax(
            discount.discounted_amount,
            item.category(),
            rate,
            config,
            step_number,
        );
        trace.steps.push(tax.audit_step);
        step_number += 1;

        subtotal += discount.discounted_amount;
        total_tax += tax.tax;

        items.push(PricedLineItem {
            description: item.description().to_string(),
            category: item.category().to_string(),
            amount: item.amount(),
            discount: discount.discount,
            discounted_amount: discount.discounted_amount,
            tax: tax.tax,
            discount_rule: discount.rule,
            tax_treatment: tax.treatment,
        });
    }

    let subtotal = round_currency(subtotal);
    let total_tax = round_currency(total_tax);
    let grand_total = round_currency(subtotal + total_tax);

    debug!(
        region = %transaction.region(),
        items = items.len(),
        %subtotal,
        %total_tax,
        %grand_total,
        "Priced transaction"
    );

    TransactionResult {
        region: transaction.region().to_string(),
        is_premium_customer: transaction.is_premium_customer(),
        tax_rate: rate,
        evaluated_at,
        subtotal,
        total_tax,
        grand_total,
        items,
        audit_trace: trace,
    }
}

/// Validates a transaction record and prices it at the clock's current time.
///
/// Returns `InvalidAmount` or `InvalidItem` if any item fails validation;
/// nothing is priced in that case.
pub fn calculate_transaction_total(
    input: TransactionInput,
    config: &PricingConfig,
    clock: &dyn Clock,
) -> PricingResult<TransactionResult> {
    let transaction = Transaction::try_from(input)?;
    Ok(price_transaction(&transaction, config, clock.now()))
}
