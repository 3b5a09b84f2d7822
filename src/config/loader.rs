//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PricingError, PricingResult};

use super::types::{PricingConfig, PricingSettings, RegionsConfig};

/// Loads and provides access to a pricing configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── pricing.yaml   # Default rate, category sets, discount policy
/// └── regions.yaml   # Region code -> base tax rate
/// ```
///
/// # Example
///
/// ```no_run
/// use transaction_pricer::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let rate = loader.config().region_rate("TX");
/// println!("TX rate: {:?}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values rejected by [`PricingConfig::new`].
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PricingSettings>(&path.join("pricing.yaml"))?;
        let regions = Self::load_yaml::<RegionsConfig>(&path.join("regions.yaml"))?;

        let config = PricingConfig::new(settings, regions)?;
        debug!(
            path = %path.display(),
            regions = config.region_rates().len(),
            mode = ?config.discount().mode,
            "Loaded pricing configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PricingConfig {
        self.config
    }
}

impl From<PricingConfig> for ConfigLoader {
    fn from(config: PricingConfig) -> Self {
        Self { config }
    }
}
