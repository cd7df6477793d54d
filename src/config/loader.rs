//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! policy from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AllowancePolicy, EngineConfig, ShiftPolicy};

/// Name of the policy file inside a configuration directory.
const POLICY_FILE: &str = "policy.yaml";

/// Loads, validates and provides access to the engine policy.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// └── policy.yaml   # Night allowance and break deduction policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// println!("Night allowance: {}", loader.allowance_policy().rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attendance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing
    /// - `policy.yaml` contains invalid YAML
    /// - a policy value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let config = Self::load_yaml::<EngineConfig>(&policy_path)?;

        let loader = Self::from_config(config)?;
        info!(
            path = %policy_path.display(),
            allowance_rate = %loader.config.night_allowance.rate,
            min_effective_hours = %loader.config.night_allowance.min_effective_hours,
            "Loaded engine policy"
        );
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.night_allowance.rate < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "night_allowance.rate".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.night_allowance.min_effective_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "night_allowance.min_effective_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if config.shift.night_break_deduction < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "shift.night_break_deduction".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the night allowance policy.
    pub fn allowance_policy(&self) -> &AllowancePolicy {
        &self.config.night_allowance
    }

    /// Returns the shift deduction policy.
    pub fn shift_policy(&self) -> &ShiftPolicy {
        &self.config.shift
    }
}
