//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading employee
//! policy configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EmployeeConfig, RawEmployeeConfig};

/// Loads the employee policy configuration.
///
/// The `ConfigLoader` reads a single YAML file and validates that every
/// required key is present, reporting the first absent key by name.
///
/// # File format
///
/// ```text
/// age_at_year_end: 35
/// bonus_pretax_rate: "0.15"
/// max_match_rate: "0.05"
/// prior_year_annual_bonus: "12000.00"
/// prior_year_quarterly_bonus: "4000.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use contrib_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./employee.yaml").unwrap();
/// println!("Max match rate: {}", config.max_match_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Returns
    ///
    /// Returns the validated [`EmployeeConfig`] on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - Any required key is absent (`MissingConfigValue`, naming the key)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<EmployeeConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let raw: RawEmployeeConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(raw, &path_str)
    }

    /// Validates a raw config, reporting the first missing required key.
    fn validate(raw: RawEmployeeConfig, path: &str) -> EngineResult<EmployeeConfig> {
        fn require<T>(value: Option<T>, key: &str, path: &str) -> EngineResult<T> {
            value.ok_or_else(|| EngineError::MissingConfigValue {
                key: key.to_string(),
                path: path.to_string(),
            })
        }

        Ok(EmployeeConfig {
            age_at_year_end: require(raw.age_at_year_end, "age_at_year_end", path)?,
            bonus_pretax_rate: require(raw.bonus_pretax_rate, "bonus_pretax_rate", path)?,
            max_match_rate: require(raw.max_match_rate, "max_match_rate", path)?,
            prior_year_annual_bonus: require(
                raw.prior_year_annual_bonus,
                "prior_year_annual_bonus",
                path,
            )?,
            prior_year_quarterly_bonus: require(
                raw.prior_year_quarterly_bonus,
                "prior_year_quarterly_bonus",
                path,
            )?,
        })
    }
}
