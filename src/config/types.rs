//! Configuration types for the projection engine.
//!
//! This module contains the strongly-typed employer-policy configuration
//! and the raw deserialization struct it is validated from.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Employer-specific 401(k) policy for one employee and plan year.
///
/// Loaded once per run from a YAML config file and treated as read-only
/// for the remainder of execution. Rates are decimal fractions of eligible
/// pay (0.05 means 5%).
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeConfig {
    /// The employee's age at calendar year end, used for catch-up
    /// eligibility.
    pub age_at_year_end: u32,
    /// Contribution rate applied to bonus pay for pretax deferral.
    pub bonus_pretax_rate: Decimal,
    /// Maximum employer match rate as a fraction of eligible pay.
    pub max_match_rate: Decimal,
    /// Prior-year annual bonus amount, used to estimate unpaid bonus.
    pub prior_year_annual_bonus: Decimal,
    /// Prior-year quarterly bonus total, used to estimate unpaid bonus.
    pub prior_year_quarterly_bonus: Decimal,
}

/// Raw config file structure before required-key validation.
///
/// Every field is optional at the serde level so that a missing key can be
/// reported as `MissingConfigValue` naming the key, rather than as an
/// opaque deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEmployeeConfig {
    /// The employee's age at calendar year end.
    pub age_at_year_end: Option<u32>,
    /// Contribution rate applied to bonus pay.
    pub bonus_pretax_rate: Option<Decimal>,
    /// Maximum employer match rate.
    pub max_match_rate: Option<Decimal>,
    /// Prior-year annual bonus amount.
    pub prior_year_annual_bonus: Option<Decimal>,
    /// Prior-year quarterly bonus total.
    pub prior_year_quarterly_bonus: Option<Decimal>,
}
