//! Request types for the transaction pricer API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{LineItemInput, TransactionInput};

/// Request body for the `/calculate` endpoint.
///
/// Carries a transaction record plus an optional evaluation time. When
/// `evaluated_at` is absent the server clock supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Region code; defaults to `CA`.
    #[serde(default)]
    pub region: Option<String>,
    /// Loyalty flag; also accepted as `isPremiumCustomer`.
    #[serde(default, alias = "isPremiumCustomer")]
    pub premium_customer: bool,
    /// Purchased items in order.
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    /// Time of day to price at, as `HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<NaiveTime>,
}

impl CalculationRequest {
    /// Splits the request into the transaction record and the requested time.
    pub fn into_parts(self) -> (TransactionInput, Option<NaiveTime>) {
        let input = TransactionInput {
            region: self.region,
            premium_customer: self.premium_customer,
            items: self.items,
        };
        (input, self.evaluated_at)
    }
}
