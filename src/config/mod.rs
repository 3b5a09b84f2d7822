//! Configuration loading and management for the transaction pricer.
//!
//! This module provides functionality to load pricing configurations from
//! YAML files: the region rate table, exempt and surcharged category sets,
//! and the discount policy.
//!
//! # Example
//!
//! ```no_run
//! use transaction_pricer::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Default rate: {}", loader.config().default_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub(crate) use types::normalize_category;
pub use types::{
    DEFAULT_REGION, DiscountConfig, DiscountMode, HappyHourConfig, MAX_SURCHARGE_MULTIPLIER,
    PricingConfig, PricingSettings, RegionsConfig, ThresholdConfig,
};
