//! Discount policy.
//!
//! This module applies the configured discount policy to a line item amount.
//!
//! In [`DiscountMode::Promotional`] the rules are evaluated in order and the
//! first match wins:
//!
//! 1. the evaluation hour falls inside the happy-hour window,
//! 2. the customer is premium,
//! 3. otherwise no discount.
//!
//! In [`DiscountMode::Threshold`] only the amount matters: amounts at or above
//! the threshold get `min(amount * rate, amount * max_rate)` off.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::config::{DiscountMode, PricingConfig};
use crate::models::{AuditStep, DiscountRule};

/// The result of applying the discount policy, including the audit step.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// The amount after discount.
    pub discounted_amount: Decimal,
    /// The discount taken off.
    pub discount: Decimal,
    /// The effective discount rate.
    pub rate: Decimal,
    /// The rule that applied.
    pub rule: DiscountRule,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Applies the configured discount policy to an amount.
///
/// `discounted_amount + discount == amount` holds exactly; neither value is
/// rounded here.
///
/// # Arguments
///
/// * `amount` - The pre-discount line item amount
/// * `is_premium_customer` - The customer's loyalty flag
/// * `evaluated_at` - The time of day the transaction is priced at
/// * `config` - The pricing configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use transaction_pricer::calculation::apply_discount;
/// use transaction_pricer::config::PricingConfig;
/// use transaction_pricer::models::DiscountRule;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let three_pm = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
///
/// let result = apply_discount(Decimal::new(10000, 2), true, three_pm, &config, 1);
/// assert_eq!(result.rule, DiscountRule::HappyHour);
/// assert_eq!(result.discount, Decimal::new(15, 0));
/// ```
pub fn apply_discount(
    amount: Decimal,
    is_premium_customer: bool,
    evaluated_at: NaiveTime,
    config: &PricingConfig,
    step_number: u32,
) -> DiscountResult {
    let settings = config.discount();
    let hour = evaluated_at.hour();

    let (rate, discount, rule, reasoning) = match settings.mode {
        DiscountMode::Promotional => {
            let happy_hour = &settings.happy_hour;
            if happy_hour.contains(hour) {
                (
                    happy_hour.rate,
                    amount * happy_hour.rate,
                    DiscountRule::HappyHour,
                    format!(
                        "Hour {} is inside happy hour {}-{}; rate {} applies",
                        hour, happy_hour.start_hour, happy_hour.end_hour, happy_hour.rate
                    ),
                )
            } else if is_premium_customer {
                (
                    settings.premium_rate,
                    amount * settings.premium_rate,
                    DiscountRule::Premium,
                    format!(
                        "Outside happy hour; premium customer rate {} applies",
                        settings.premium_rate
                    ),
                )
            } else {
                (
                    Decimal::ZERO,
                    Decimal::ZERO,
                    DiscountRule::None,
                    "Outside happy hour and not a premium customer; no discount".to_string(),
                )
            }
        }
        DiscountMode::Threshold => {
            let threshold = &settings.threshold;
            if amount >= threshold.minimum_amount {
                let rate = threshold.rate.min(threshold.max_rate);
                (
                    rate,
                    (amount * threshold.rate).min(amount * threshold.max_rate),
                    DiscountRule::Threshold,
                    format!(
                        "${} is at or above the ${} threshold; rate {} applies",
                        amount, threshold.minimum_amount, rate
                    ),
                )
            } else {
                (
                    Decimal::ZERO,
                    Decimal::ZERO,
                    DiscountRule::None,
                    format!(
                        "${} is below the ${} threshold; no discount",
                        amount, threshold.minimum_amount
                    ),
                )
            }
        }
    };
    let discounted_amount = amount - discount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "discount".to_string(),
        rule_name: "Discount Policy".to_string(),
        input: serde_json::json!({
            "amount": amount.to_string(),
            "is_premium_customer": is_premium_customer,
            "hour": hour,
            "mode": settings.mode
        }),
        output: serde_json::json!({
            "rule": rule,
            "rate": rate.to_string(),
            "discount": discount.to_string(),
            "discounted_amount": discounted_amount.to_string()
        }),
        reasoning,
    };

    DiscountResult {
        discounted_amount,
        discount,
        rate,
        rule,
        audit_step,
    }
}
