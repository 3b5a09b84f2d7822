//! Currency rounding.
//!
//! All rounding in the pricer goes through [`round_currency`], which rounds
//! half to even (banker's rounding) and always yields exactly two decimal
//! places. Ties therefore alternate direction instead of always rounding up,
//! so summing many rounded taxes carries no upward bias.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to the currency unit using round-half-to-even.
///
/// # Examples
///
/// ```
/// use transaction_pricer::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()).to_string(), "0.12");
/// assert_eq!(round_currency(Decimal::from_str("0.135").unwrap()).to_string(), "0.14");
/// assert_eq!(round_currency(Decimal::from(106)).to_string(), "106.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
