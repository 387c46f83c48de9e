//! Config-style paystub source.
//!
//! This module loads a paystub from a YAML file with explicit fields.
//! Bonus-related fields are optional and default to zero; every other
//! field is required and reported by name when absent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Paystub;

/// Raw paystub file structure before required-key validation.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawPaystub {
    pay_date: Option<NaiveDate>,
    current_base_wages: Option<Decimal>,
    ytd_base_wages: Option<Decimal>,
    ytd_annual_bonus: Option<Decimal>,
    ytd_quarterly_bonus: Option<Decimal>,
    current_pretax: Option<Decimal>,
    ytd_pretax: Option<Decimal>,
    ytd_pretax_bonus: Option<Decimal>,
    ytd_employer_match: Option<Decimal>,
    ytd_employer_match_bonus: Option<Decimal>,
    current_aftertax: Option<Decimal>,
    ytd_aftertax: Option<Decimal>,
    ytd_aftertax_bonus: Option<Decimal>,
}

/// Loads a paystub from a YAML file with explicit fields.
///
/// # Arguments
///
/// * `path` - Path to the YAML paystub file
///
/// # Returns
///
/// Returns the validated [`Paystub`] on success, or an error if the file
/// is missing (`ConfigNotFound`), malformed (`ConfigParseError`), missing
/// a required key (`MissingConfigValue`), or carries a negative amount
/// (`InvalidPaystub`).
pub fn load_paystub_file<P: AsRef<Path>>(path: P) -> EngineResult<Paystub> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let raw: RawPaystub =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let paystub = build(raw, &path_str)?;
    paystub.validate()?;
    Ok(paystub)
}

fn build(raw: RawPaystub, path: &str) -> EngineResult<Paystub> {
    fn require<T>(value: Option<T>, key: &str, path: &str) -> EngineResult<T> {
        value.ok_or_else(|| EngineError::MissingConfigValue {
            key: key.to_string(),
            path: path.to_string(),
        })
    }

    Ok(Paystub {
        pay_date: require(raw.pay_date, "pay_date", path)?,
        current_base_wages: require(raw.current_base_wages, "current_base_wages", path)?,
        ytd_base_wages: require(raw.ytd_base_wages, "ytd_base_wages", path)?,
        ytd_annual_bonus: raw.ytd_annual_bonus.unwrap_or_default(),
        ytd_quarterly_bonus: raw.ytd_quarterly_bonus.unwrap_or_default(),
        current_pretax: require(raw.current_pretax, "current_pretax", path)?,
        ytd_pretax: require(raw.ytd_pretax, "ytd_pretax", path)?,
        ytd_pretax_bonus: raw.ytd_pretax_bonus.unwrap_or_default(),
        ytd_employer_match: require(raw.ytd_employer_match, "ytd_employer_match", path)?,
        ytd_employer_match_bonus: raw.ytd_employer_match_bonus.unwrap_or_default(),
        current_aftertax: require(raw.current_aftertax, "current_aftertax", path)?,
        ytd_aftertax: require(raw.ytd_aftertax, "ytd_aftertax", path)?,
        ytd_aftertax_bonus: raw.ytd_aftertax_bonus.unwrap_or_default(),
    })
}
