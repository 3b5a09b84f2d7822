//! Base tax rate resolution.
//!
//! This module resolves a region code to its base tax rate. Resolution is
//! total: a region missing from the table falls back to the configured
//! default rate rather than failing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::models::AuditStep;

/// Where a resolved rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The region was found in the rate table.
    RegionTable,
    /// The region was unknown; the default rate applies.
    Default,
}

/// The result of resolving a region's base rate, including the audit step.
#[derive(Debug, Clone)]
pub struct RateResolution {
    /// The resolved base tax rate.
    pub rate: Decimal,
    /// Whether the rate came from the table or the fallback.
    pub source: RateSource,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the base tax rate for a region.
///
/// Region codes are matched case-insensitively after trimming.
///
/// # Examples
///
/// ```
/// use transaction_pricer::calculation::{RateSource, resolve_tax_rate};
/// use transaction_pricer::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
///
/// let tx = resolve_tax_rate("TX", &config, 1);
/// assert_eq!(tx.rate, Decimal::new(6, 2));
/// assert_eq!(tx.source, RateSource::RegionTable);
///
/// let unknown = resolve_tax_rate("ZZ", &config, 1);
/// assert_eq!(unknown.rate, Decimal::new(8, 2));
/// assert_eq!(unknown.source, RateSource::Default);
/// ```
pub fn resolve_tax_rate(region: &str, config: &PricingConfig, step_number: u32) -> RateResolution {
    let (rate, source) = match config.region_rate(region) {
        Some(rate) => (rate, RateSource::RegionTable),
        None => (config.default_rate(), RateSource::Default),
    };

    let reasoning = match source {
        RateSource::RegionTable => format!("Region '{}' has base tax rate {}", region, rate),
        RateSource::Default => format!(
            "Region '{}' is not in the rate table; using default rate {}",
            region, rate
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_rate_lookup".to_string(),
        rule_name: "Tax Rate Lookup".to_string(),
        input: serde_json::json!({
            "region": region
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "source": source
        }),
        reasoning,
    };

    RateResolution {
        rate,
        source,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PricingSettings, RegionsConfig};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RR-001: known region uses the table rate
    #[test]
    fn test_known_region_uses_table_rate() {
        let result = resolve_tax_rate("TX", &PricingConfig::default(), 1);

        assert_eq!(result.rate, dec("0.06"));
        assert_eq!(result.source, RateSource::RegionTable);
        assert_eq!(result.audit_step.rule_id, "tax_rate_lookup");
        assert_eq!(result.audit_step.input["region"].as_str().unwrap(), "TX");
        assert_eq!(result.audit_step.output["rate"].as_str().unwrap(), "0.06");
        assert_eq!(
            result.audit_step.output["source"].as_str().unwrap(),
            "region_table"
        );
    }

    /// RR-002: unknown region falls back to the default rate
    #[test]
    fn test_unknown_region_falls_back_to_default() {
        let result = resolve_tax_rate("ZZ", &PricingConfig::default(), 1);

        assert_eq!(result.rate, dec("0.08"));
        assert_eq!(result.source, RateSource::Default);
        assert!(result.audit_step.reasoning.contains("not in the rate table"));
    }

    /// RR-003: lookup ignores case and surrounding whitespace
    #[test]
    fn test_lookup_is_case_insensitive() {
        let result = resolve_tax_rate(" tx ", &PricingConfig::default(), 1);

        assert_eq!(result.rate, dec("0.06"));
        assert_eq!(result.source, RateSource::RegionTable);
    }

    /// RR-004: a zero-rate region is a table hit, not a fallback
    #[test]
    fn test_zero_rate_region_is_table_hit() {
        let defaults = PricingConfig::default();
        let settings = PricingSettings {
            default_rate: defaults.default_rate(),
            surcharge_multiplier: defaults.surcharge_multiplier(),
            exempt_categories: vec!["food".to_string()],
            surcharged_categories: vec!["luxury".to_string()],
            discount: defaults.discount().clone(),
        };
        let regions = RegionsConfig {
            regions: HashMap::from([("OR".to_string(), Decimal::ZERO)]),
        };
        let config = PricingConfig::new(settings, regions).unwrap();

        let result = resolve_tax_rate("OR", &config, 1);

        assert_eq!(result.rate, Decimal::ZERO);
        assert_eq!(result.source, RateSource::RegionTable);
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = resolve_tax_rate("CA", &PricingConfig::default(), 5);
        assert_eq!(result.audit_step.step_number, 5);
    }
}
