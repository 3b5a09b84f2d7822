//! Application state for the transaction pricer API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigLoader, PricingConfig};

/// Shared application state.
///
/// Holds the read-only pricing configuration and the clock used when a
/// request does not name its own evaluation time.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PricingConfig>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state reading the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config.into_config()),
            clock: Arc::new(clock),
        }
    }

    /// Returns the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Timelike;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_with_clock_uses_given_clock() {
        let state = AppState::with_clock(
            ConfigLoader::from(PricingConfig::default()),
            FixedClock::at_hour(15).unwrap(),
        );
        assert_eq!(state.clock().now().hour(), 15);
    }
}
