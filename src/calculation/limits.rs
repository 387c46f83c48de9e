//! IRS contribution limit resolution.
//!
//! This module maps a tax year to the IRS-published 401(k) limits and
//! applies the catch-up allowance for employees aged 50 or older at
//! calendar year end.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ContributionLimits;

/// The age at which the catch-up contribution allowance begins.
pub const CATCH_UP_AGE: u32 = 50;

/// `(tax_year, deferral, aggregate, catch_up)` in whole dollars, as
/// published by the IRS. Years outside this table are a hard error since
/// all downstream math depends on the limits.
const LIMIT_TABLE: &[(i32, i64, i64, i64)] = &[
    (2020, 19_500, 57_000, 6_500),
    (2021, 19_500, 58_000, 6_500),
    (2022, 20_500, 61_000, 6_500),
    (2023, 22_500, 66_000, 7_500),
    (2024, 23_000, 69_000, 7_500),
    (2025, 23_500, 70_000, 7_500),
];

/// Resolves the IRS contribution limits for a tax year and employee age.
///
/// The catch-up allowance is granted only when `age_at_year_end` is 50 or
/// older; the age-adjusted limits are the base limits plus the granted
/// catch-up amount. The function is pure and idempotent.
///
/// # Arguments
///
/// * `tax_year` - The calendar year of the paystub's pay date
/// * `age_at_year_end` - The employee's age at the end of that year
///
/// # Returns
///
/// Returns the resolved [`ContributionLimits`], or `UnsupportedTaxYear`
/// if the year has no entry in the limit table.
///
/// # Examples
///
/// ```
/// use contrib_engine::calculation::resolve_limits;
/// use rust_decimal::Decimal;
///
/// let limits = resolve_limits(2022, 52).unwrap();
/// assert_eq!(limits.deferral, Decimal::from(20_500));
/// assert_eq!(limits.deferral_age_adjusted, Decimal::from(27_000));
/// ```
pub fn resolve_limits(tax_year: i32, age_at_year_end: u32) -> EngineResult<ContributionLimits> {
    let (_, deferral, aggregate, catch_up) = LIMIT_TABLE
        .iter()
        .find(|(year, _, _, _)| *year == tax_year)
        .copied()
        .ok_or(EngineError::UnsupportedTaxYear { year: tax_year })?;

    let deferral = Decimal::from(deferral);
    let aggregate = Decimal::from(aggregate);
    let catch_up = if age_at_year_end >= CATCH_UP_AGE {
        Decimal::from(catch_up)
    } else {
        Decimal::ZERO
    };

    Ok(ContributionLimits {
        tax_year,
        deferral,
        aggregate,
        catch_up,
        deferral_age_adjusted: deferral + catch_up,
        aggregate_age_adjusted: aggregate + catch_up,
    })
}
