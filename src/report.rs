//! Plain-text rendering of a transaction result.
//!
//! The layout is for people, not parsers: labeled lines with amounts shown
//! to two decimal places.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::models::TransactionResult;

/// Renders a human-readable report of a priced transaction.
///
/// # Example
///
/// ```
/// use transaction_pricer::calculation::price_transaction;
/// use transaction_pricer::config::PricingConfig;
/// use transaction_pricer::models::{LineItem, Transaction};
/// use transaction_pricer::report::render_report;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let item = LineItem::new("Widget", Decimal::new(10000, 2), "standard").unwrap();
/// let transaction = Transaction::new("TX", false, vec![item]);
/// let at = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let result = price_transaction(&transaction, &PricingConfig::default(), at);
///
/// let report = render_report(&result);
/// assert!(report.contains("Grand Total: $106.00"));
/// ```
pub fn render_report(result: &TransactionResult) -> String {
    Report(result).to_string()
}

/// Display adapter that lays out a [`TransactionResult`] as a report.
pub struct Report<'a>(pub &'a TransactionResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Region: {}", result.region)?;
        writeln!(f, "Premium Customer: {}", result.is_premium_customer)?;
        writeln!(f, "Tax Rate: {}", result.tax_rate.normalize())?;
        writeln!(f, "Evaluated At: {}", result.evaluated_at.format("%H:%M:%S"))?;
        writeln!(f, "Subtotal: ${}", money(result.subtotal))?;
        writeln!(f, "Total Discount: ${}", money(result.total_discount()))?;
        writeln!(f, "Total Tax: ${}", money(result.total_tax))?;
        writeln!(f, "Grand Total: ${}", money(result.grand_total))?;

        writeln!(f)?;
        writeln!(f, "Item Breakdown:")?;
        for item in &result.items {
            writeln!(
                f,
                "Item: {} - Original: ${}, Discount: ${}, Final: ${}, Tax: ${}",
                item.description,
                money(item.amount),
                money(item.discount),
                money(item.discounted_amount),
                money(item.tax)
            )?;
        }

        for warning in &result.audit_trace.warnings {
            writeln!(f, "Warning [{}]: {}", warning.code, warning.message)?;
        }

        Ok(())
    }
}

fn money(value: Decimal) -> String {
    round_currency(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::price_transaction;
    use crate::config::PricingConfig;
    use crate::models::{LineItem, Transaction};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn render(region: &str, premium: bool, hour: u32) -> String {
        let items = vec![
            LineItem::new("Software License", dec("199.99"), "digital").unwrap(),
            LineItem::new("Bread", dec("4"), "food").unwrap(),
        ];
        let transaction = Transaction::new(region, premium, items);
        let at = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        render_report(&price_transaction(&transaction, &PricingConfig::default(), at))
    }

    #[test]
    fn test_report_contains_totals() {
        let report = render("TX", true, 10);

        assert!(report.contains("Region: TX"));
        assert!(report.contains("Premium Customer: true"));
        assert!(report.contains("Tax Rate: 0.06"));
        assert!(report.contains("Evaluated At: 10:00:00"));
        // 179.991 + 3.6
        assert!(report.contains("Subtotal: $183.59"));
        assert!(report.contains("Total Discount: $20.40"));
    }

    #[test]
    fn test_report_lists_items_with_two_decimals() {
        let report = render("TX", true, 10);

        assert!(report.contains(
            "Item: Software License - Original: $199.99, Discount: $20.00, Final: $179.99, Tax: $10.80"
        ));
        assert!(report.contains(
            "Item: Bread - Original: $4.00, Discount: $0.40, Final: $3.60, Tax: $0.00"
        ));
    }

    #[test]
    fn test_display_adapter_matches_rendered_report() {
        let items = vec![LineItem::new("Widget", dec("10.00"), "standard").unwrap()];
        let transaction = Transaction::new("CA", false, items);
        let at = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let result = price_transaction(&transaction, &PricingConfig::default(), at);

        assert_eq!(format!("{}", Report(&result)), render_report(&result));
        assert!(render_report(&result).ends_with("Tax: $0.80\n"));
    }

    #[test]
    fn test_report_includes_unknown_region_warning() {
        let report = render("ZZ", false, 10);
        assert!(report.contains("Warning [UNKNOWN_REGION]"));
    }
}
