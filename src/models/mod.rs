//! Core data models for the transaction pricer.
//!
//! This module contains all the domain models used throughout the pricer.

mod line_item;
mod transaction;
mod transaction_result;

pub use line_item::{DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, LineItem, MAX_AMOUNT};
pub use transaction::{LineItemInput, Transaction, TransactionInput};
pub use transaction_result::{
    AuditStep, AuditTrace, AuditWarning, DiscountRule, PricedLineItem, TaxTreatment,
    TransactionResult,
};
