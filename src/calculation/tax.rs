//! Tax calculation.
//!
//! Tax is computed on the post-discount amount. Exempt categories are taxed
//! at zero whatever the rate or surcharge membership; surcharged categories
//! have their tax multiplied by the configured surcharge multiplier. The
//! result is rounded with [`round_currency`].

use rust_decimal::Decimal;

use crate::config::{PricingConfig, normalize_category};
use crate::models::{AuditStep, TaxTreatment};

use super::rounding::round_currency;

/// The result of a tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax amount, rounded to 2 decimal places.
    pub tax: Decimal,
    /// How the category was treated.
    pub treatment: TaxTreatment,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates tax on a discounted amount.
///
/// # Arguments
///
/// * `amount` - The post-discount amount
/// * `category` - The item category (matched case-insensitively)
/// * `rate` - The resolved base tax rate
/// * `config` - The pricing configuration supplying category sets
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use transaction_pricer::calculation::calculate_tax;
/// use transaction_pricer::config::PricingConfig;
/// use transaction_pricer::models::TaxTreatment;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let rate = Decimal::new(8, 2);
///
/// let luxury = calculate_tax(Decimal::new(10000, 2), "luxury", rate, &config, 1);
/// assert_eq!(luxury.tax, Decimal::new(1000, 2));
/// assert_eq!(luxury.treatment, TaxTreatment::Surcharged);
///
/// let food = calculate_tax(Decimal::new(10000, 2), "food", rate, &config, 1);
/// assert!(food.tax.is_zero());
/// ```
pub fn calculate_tax(
    amount: Decimal,
    category: &str,
    rate: Decimal,
    config: &PricingConfig,
    step_number: u32,
) -> TaxResult {
    let category = normalize_category(category);
    let multiplier = config.surcharge_multiplier();

    let (tax, treatment, reasoning) = if config.is_exempt(&category) {
        (
            round_currency(Decimal::ZERO),
            TaxTreatment::Exempt,
            format!("Category '{}' is exempt; no tax", category),
        )
    } else if config.is_surcharged(&category) {
        let raw = amount * rate * multiplier;
        let tax = round_currency(raw);
        (
            tax,
            TaxTreatment::Surcharged,
            format!(
                "${} x {} x {} surcharge = ${} (rounded to ${})",
                amount,
                rate,
                multiplier,
                raw.normalize(),
                tax
            ),
        )
    } else {
        let raw = amount * rate;
        let tax = round_currency(raw);
        (
            tax,
            TaxTreatment::Standard,
            format!("${} x {} = ${} (rounded to ${})", amount, rate, raw.normalize(), tax),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax".to_string(),
        rule_name: "Sales Tax".to_string(),
        input: serde_json::json!({
            "amount": amount.to_string(),
            "category": category,
            "rate": rate.to_string()
        }),
        output: serde_json::json!({
            "tax": tax.to_string(),
            "treatment": treatment
        }),
        reasoning,
    };

    TaxResult {
        tax,
        treatment,
        audit_step,
    }
}
