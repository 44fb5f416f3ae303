//! Configuration management for the WaterWise core
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WW_ prefix

use config::{Environment, File};
use serde::Deserialize;

use crate::analyzer::RiskThresholds;
use crate::error::{Error, Result};
use crate::store::DEFAULT_MAX_READINGS;

/// Main configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Risk analyzer thresholds
    pub analyzer: RiskThresholds,

    /// Reading log configuration
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the JSON reading log
    pub path: String,

    /// Rolling retention cap for stored readings
    pub max_readings: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self> {
        let environment = std::env::var("WW_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let thresholds = RiskThresholds::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("analyzer.soil_drought_percent", thresholds.soil_drought_percent)?
            .set_default("analyzer.soil_dry_percent", thresholds.soil_dry_percent)?
            .set_default("analyzer.soil_moderate_percent", thresholds.soil_moderate_percent)?
            .set_default(
                "analyzer.rain_torrential_percent",
                thresholds.rain_torrential_percent,
            )?
            .set_default("analyzer.rain_heavy_percent", thresholds.rain_heavy_percent)?
            .set_default("analyzer.rain_moderate_percent", thresholds.rain_moderate_percent)?
            .set_default("analyzer.rain_light_percent", thresholds.rain_light_percent)?
            .set_default(
                "analyzer.extreme_temperature_celsius",
                thresholds.extreme_temperature_celsius,
            )?
            .set_default("analyzer.critical_soil_percent", thresholds.critical_soil_percent)?
            .set_default("analyzer.critical_rain_percent", thresholds.critical_rain_percent)?
            .set_default("store.path", "waterwise_data.json")?
            .set_default("store.max_readings", DEFAULT_MAX_READINGS as i64)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WW_ prefix)
            .add_source(
                Environment::with_prefix("WW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize().map_err(Error::Configuration)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold sets whose bands are not strictly ordered.
    pub fn validate(&self) -> Result<()> {
        let t = &self.analyzer;
        if t.soil_drought_percent >= t.soil_dry_percent
            || t.soil_dry_percent >= t.soil_moderate_percent
        {
            return Err(Error::Validation("Soil thresholds must be strictly increasing"));
        }
        if t.rain_light_percent >= t.rain_moderate_percent
            || t.rain_moderate_percent >= t.rain_heavy_percent
            || t.rain_heavy_percent >= t.rain_torrential_percent
        {
            return Err(Error::Validation("Rain thresholds must be strictly increasing"));
        }
        if self.store.max_readings == 0 {
            return Err(Error::Validation("store.max_readings must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            analyzer: RiskThresholds::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "waterwise_data.json".to_string(),
            max_readings: DEFAULT_MAX_READINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn unordered_soil_thresholds_rejected() {
        let mut config = Config::default();
        config.analyzer.soil_drought_percent = 30.0;
        config.analyzer.soil_dry_percent = 30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unordered_rain_thresholds_rejected() {
        let mut config = Config::default();
        config.analyzer.rain_heavy_percent = 90.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_retention_rejected() {
        let mut config = Config::default();
        config.store.max_readings = 0;
        assert!(config.validate().is_err());
    }
}
