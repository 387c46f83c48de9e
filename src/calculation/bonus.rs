//! Remaining-bonus estimation.
//!
//! This module estimates bonus compensation not yet reflected in a
//! paystub's year-to-date figures, so that pretax deferral from bonus pay
//! can be projected. The estimate is a policy, not a prediction: it
//! assumes the prior year's bonus amounts roughly repeat.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::EmployeeConfig;
use crate::models::Paystub;

/// Month from which all bonuses for the year are assumed already paid.
pub const BONUS_SEASON_END_MONTH: u32 = 10;

/// Fraction of the prior-year quarterly bonus total below which a
/// shortfall is assumed still owed. The margin absorbs normal
/// bonus-amount volatility.
pub fn quarterly_shortfall_threshold() -> Decimal {
    Decimal::new(85, 2)
}

/// Estimates bonus compensation still unpaid for the year.
///
/// Policy:
/// - From October onward, the estimate is zero.
/// - If no annual bonus has posted year-to-date, the prior year's annual
///   bonus amount is assumed to repeat.
/// - If the year-to-date quarterly total is below 85% of the prior year's
///   quarterly total, the full shortfall against the prior-year total is
///   added.
///
/// The two estimates are independent assumptions and are summed.
///
/// # Examples
///
/// ```
/// use contrib_engine::calculation::estimate_remaining_bonus;
/// use contrib_engine::config::EmployeeConfig;
/// use contrib_engine::models::Paystub;
/// use rust_decimal::Decimal;
///
/// let paystub = Paystub::zeroed("2022-07-15".parse().unwrap());
/// let config = EmployeeConfig {
///     age_at_year_end: 35,
///     bonus_pretax_rate: Decimal::new(15, 2),
///     max_match_rate: Decimal::new(5, 2),
///     prior_year_annual_bonus: Decimal::from(12_000),
///     prior_year_quarterly_bonus: Decimal::from(4_000),
/// };
/// // No bonus posted yet: annual repeats and the quarterly shortfall is owed.
/// assert_eq!(estimate_remaining_bonus(&paystub, &config), Decimal::from(16_000));
/// ```
pub fn estimate_remaining_bonus(paystub: &Paystub, config: &EmployeeConfig) -> Decimal {
    if paystub.pay_date.month() >= BONUS_SEASON_END_MONTH {
        return Decimal::ZERO;
    }

    let mut estimate = Decimal::ZERO;

    if paystub.ytd_annual_bonus.is_zero() {
        estimate += config.prior_year_annual_bonus;
    }

    let quarterly_floor = config.prior_year_quarterly_bonus * quarterly_shortfall_threshold();
    if paystub.ytd_quarterly_bonus < quarterly_floor {
        estimate += config.prior_year_quarterly_bonus - paystub.ytd_quarterly_bonus;
    }

    estimate
}
