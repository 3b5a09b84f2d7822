//! HTTP API module for the transaction pricer.
//!
//! This module provides the REST endpoint for pricing a transaction.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
