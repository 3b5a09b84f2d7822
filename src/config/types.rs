//! Configuration types for transaction pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PricingConfig`] the calculation functions read from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{PricingError, PricingResult};

/// Region used when a transaction does not name one.
pub const DEFAULT_REGION: &str = "CA";

/// Largest accepted tax surcharge multiplier.
pub const MAX_SURCHARGE_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Selects which discount policy the pricer applies.
///
/// The two policies never compose: a configuration runs exactly one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMode {
    /// Happy-hour window first, then the premium-customer tier.
    #[default]
    Promotional,
    /// Amount-based discount for large line items.
    Threshold,
}

/// The happy-hour window, expressed as inclusive clock hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HappyHourConfig {
    /// First clock hour (0-23) inside the window.
    pub start_hour: u32,
    /// Last clock hour (0-23) inside the window.
    pub end_hour: u32,
    /// Discount rate applied inside the window.
    pub rate: Decimal,
}

impl HappyHourConfig {
    /// Returns true if the given clock hour falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// The amount-based discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Amounts at or above this value qualify.
    pub minimum_amount: Decimal,
    /// Discount rate for qualifying amounts.
    pub rate: Decimal,
    /// Upper bound on the effective discount rate.
    pub max_rate: Decimal,
}

/// Discount section of `pricing.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Which policy is active.
    #[serde(default)]
    pub mode: DiscountMode,
    /// Happy-hour window settings.
    pub happy_hour: HappyHourConfig,
    /// Discount rate for premium customers outside happy hour.
    pub premium_rate: Decimal,
    /// Amount-based rule settings.
    pub threshold: ThresholdConfig,
}

/// Contents of `pricing.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    /// Rate for regions missing from the region table.
    pub default_rate: Decimal,
    /// Multiplier applied to tax on surcharged categories.
    pub surcharge_multiplier: Decimal,
    /// Categories taxed at zero.
    pub exempt_categories: Vec<String>,
    /// Categories whose tax is multiplied by the surcharge multiplier.
    pub surcharged_categories: Vec<String>,
    /// Discount policy settings.
    pub discount: DiscountConfig,
}

/// Contents of `regions.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// Map of region code to base tax rate.
    pub regions: HashMap<String, Decimal>,
}

/// The complete, validated pricing configuration.
///
/// Built once and shared read-only. Region codes and category names are
/// stored normalized (trimmed; regions upper-cased, categories lower-cased).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    region_rates: HashMap<String, Decimal>,
    default_rate: Decimal,
    exempt_categories: HashSet<String>,
    surcharged_categories: HashSet<String>,
    surcharge_multiplier: Decimal,
    discount: DiscountConfig,
}

impl PricingConfig {
    /// Creates a validated configuration from the parsed YAML files.
    ///
    /// Rejects tax or discount rates outside 0..=1, a happy-hour window
    /// outside 0..=23 or with its bounds inverted, and a surcharge multiplier
    /// outside (0, 10].
    pub fn new(settings: PricingSettings, regions: RegionsConfig) -> PricingResult<Self> {
        let config = Self {
            region_rates: regions
                .regions
                .into_iter()
                .map(|(code, rate)| (normalize_region(&code), rate))
                .collect(),
            default_rate: settings.default_rate,
            exempt_categories: normalize_categories(settings.exempt_categories),
            surcharged_categories: normalize_categories(settings.surcharged_categories),
            surcharge_multiplier: settings.surcharge_multiplier,
            discount: settings.discount,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> PricingResult<()> {
        if let Some((code, rate)) = self.region_rates.iter().find(|(_, r)| !is_fraction(**r)) {
            return Err(invalid(format!(
                "rate {} for region '{}' must be between 0 and 1",
                rate, code
            )));
        }
        if !is_fraction(self.default_rate) {
            return Err(invalid("default_rate must be between 0 and 1"));
        }
        let multiplier = self.surcharge_multiplier;
        if multiplier <= Decimal::ZERO || multiplier > MAX_SURCHARGE_MULTIPLIER {
            return Err(invalid(format!(
                "surcharge_multiplier must be positive and at most {}",
                MAX_SURCHARGE_MULTIPLIER
            )));
        }

        let happy_hour = &self.discount.happy_hour;
        if happy_hour.start_hour > 23 || happy_hour.end_hour > 23 {
            return Err(invalid("happy_hour bounds must be clock hours 0-23"));
        }
        if happy_hour.start_hour > happy_hour.end_hour {
            return Err(invalid("happy_hour start_hour is after end_hour"));
        }

        let rates = [
            ("happy_hour.rate", happy_hour.rate),
            ("premium_rate", self.discount.premium_rate),
            ("threshold.rate", self.discount.threshold.rate),
            ("threshold.max_rate", self.discount.threshold.max_rate),
        ];
        for (name, rate) in rates {
            if !is_fraction(rate) {
                return Err(invalid(format!("{} must be between 0 and 1, got {}", name, rate)));
            }
        }
        if self.discount.threshold.minimum_amount.is_sign_negative() {
            return Err(invalid("threshold.minimum_amount must not be negative"));
        }

        Ok(())
    }

    /// Returns the configured rate for a region, if the region is in the table.
    pub fn region_rate(&self, region: &str) -> Option<Decimal> {
        self.region_rates.get(&normalize_region(region)).copied()
    }

    /// Returns the full region table.
    pub fn region_rates(&self) -> &HashMap<String, Decimal> {
        &self.region_rates
    }

    /// Returns the fallback rate for unknown regions.
    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    /// Returns true if the category is tax exempt.
    pub fn is_exempt(&self, category: &str) -> bool {
        self.exempt_categories.contains(category)
    }

    /// Returns true if the category carries the tax surcharge.
    pub fn is_surcharged(&self, category: &str) -> bool {
        self.surcharged_categories.contains(category)
    }

    /// Returns the tax surcharge multiplier.
    pub fn surcharge_multiplier(&self) -> Decimal {
        self.surcharge_multiplier
    }

    /// Returns the discount settings.
    pub fn discount(&self) -> &DiscountConfig {
        &self.discount
    }

    /// Returns a copy of this configuration running the given discount mode.
    pub fn with_discount_mode(mut self, mode: DiscountMode) -> Self {
        self.discount.mode = mode;
        self
    }

    /// Returns a copy of this configuration with a different premium rate.
    pub fn with_premium_rate(mut self, rate: Decimal) -> PricingResult<Self> {
        self.discount.premium_rate = rate;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy of this configuration with a different surcharge set.
    pub fn with_surcharged_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surcharged_categories =
            normalize_categories(categories.into_iter().map(Into::into).collect());
        self
    }
}

impl Default for PricingConfig {
    /// The canonical rate table, identical to `config/default/`.
    fn default() -> Self {
        let region_rates = [("CA", Decimal::new(8, 2)), ("TX", Decimal::new(6, 2))]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            region_rates,
            default_rate: Decimal::new(8, 2),
            exempt_categories: normalize_categories(vec!["food".into(), "medicine".into()]),
            surcharged_categories: normalize_categories(vec![
                "luxury".into(),
                "imported".into(),
            ]),
            surcharge_multiplier: Decimal::new(125, 2),
            discount: DiscountConfig {
                mode: DiscountMode::Promotional,
                happy_hour: HappyHourConfig {
                    start_hour: 14,
                    end_hour: 16,
                    rate: Decimal::new(15, 2),
                },
                premium_rate: Decimal::new(10, 2),
                threshold: ThresholdConfig {
                    minimum_amount: Decimal::new(100000, 2),
                    rate: Decimal::new(10, 2),
                    max_rate: Decimal::new(15, 2),
                },
            },
        }
    }
}

/// Normalizes a region code for table lookup.
pub(crate) fn normalize_region(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalizes a category name for set membership.
pub(crate) fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

fn normalize_categories(categories: Vec<String>) -> HashSet<String> {
    categories.iter().map(|c| normalize_category(c)).collect()
}

fn is_fraction(rate: Decimal) -> bool {
    !rate.is_sign_negative() && rate <= Decimal::ONE
}

fn invalid(message: impl Into<String>) -> PricingError {
    PricingError::InvalidConfig {
        message: message.into(),
    }
}
