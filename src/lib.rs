//! Retail transaction pricer.
//!
//! This crate prices a retail transaction: it resolves a regional tax rate,
//! applies a time-of-day, loyalty-tier or amount-threshold discount to each
//! item, taxes the discounted amount with category exemptions and surcharges,
//! and aggregates subtotal, tax total and grand total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
