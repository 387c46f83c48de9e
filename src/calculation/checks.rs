//! Advisory pass/fail check evaluation.
//!
//! This module derives the four named checks from a completed projection.
//! The checks are advisory: they are all evaluated and reported every run
//! and never affect the process exit status.

use rust_decimal::Decimal;

use crate::config::EmployeeConfig;
use crate::models::{CheckReport, ProjectedResult};

use super::pay_periods::PERIODS_PER_YEAR;

/// First pay-period index of the year's final two periods.
///
/// A deferral limit reached in the last two periods forfeits at most a
/// sliver of match, so no employer true-up is considered at risk.
pub const TRUE_UP_SAFE_PERIOD: u32 = PERIODS_PER_YEAR - 1;

/// Evaluates the advisory checks for a projection.
///
/// The checks are independent and order-insensitive:
/// - **Maxed pretax deferral**: projected employee pretax total reaches
///   the base deferral limit.
/// - **Avoided true-up**: the limit-crossing period (if any) falls within
///   the last two pay periods of the year, or the limit is never hit.
/// - **Maxed employer match**: projected employee pretax total over
///   projected base wages reaches the configured max match rate.
/// - **Maxed after-tax**: projected after-tax total fills the computed
///   after-tax limit.
pub fn evaluate_checks(result: &ProjectedResult, config: &EmployeeConfig) -> CheckReport {
    let total_pretax = result.total_pretax();
    let base_wages = result.total_base_wages();

    let contribution_rate = if base_wages.is_zero() {
        Decimal::ZERO
    } else {
        total_pretax / base_wages
    };

    CheckReport {
        maxed_pretax_deferral: total_pretax >= result.limits.deferral,
        avoided_true_up: result
            .true_up_period
            .is_none_or(|period| period >= TRUE_UP_SAFE_PERIOD),
        maxed_employer_match: contribution_rate >= config.max_match_rate,
        maxed_after_tax: result.total_aftertax() >= result.after_tax_limit,
    }
}
