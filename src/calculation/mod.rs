//! Calculation logic for the transaction pricer.
//!
//! This module contains the pricing pipeline: base tax rate resolution,
//! the discount policy, tax calculation with exemptions and surcharges,
//! currency rounding, and aggregation of a whole transaction.

mod aggregator;
mod discount;
mod rate_resolver;
mod rounding;
mod tax;

pub use aggregator::{calculate_transaction_total, price_transaction};
pub use discount::{DiscountResult, apply_discount};
pub use rate_resolver::{RateResolution, RateSource, resolve_tax_rate};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use tax::{TaxResult, calculate_tax};
