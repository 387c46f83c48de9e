//! Year-end contribution projection.
//!
//! This module contains the core projection algorithm: given one paystub,
//! the employer policy configuration, and the resolved IRS limits, it
//! simulates the remaining semi-monthly pay periods to estimate year-end
//! contribution totals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EmployeeConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Paystub, ProjectedResult};

use super::bonus::estimate_remaining_bonus;
use super::limits::resolve_limits;
use super::pay_periods::{periods_consumed, periods_remaining};

/// Projects year-end contribution totals from a single paystub.
///
/// The projection assumes the current period's contribution rates hold for
/// every remaining period, sums in the estimated unpaid bonuses, and caps
/// the simulated employee pretax contribution at the age-adjusted deferral
/// limit. Employer match accrues for every remaining period at the capped
/// match rate, and after-tax contributions accrue without any
/// employer-imposed ceiling. Year-to-date figures are projected forward
/// as stated, never reconciled against anomalies.
///
/// # Arguments
///
/// * `paystub` - The pay-period snapshot to project from
/// * `config` - The employer policy configuration
///
/// # Returns
///
/// Returns the populated [`ProjectedResult`], or an error if:
/// - Any monetary field is negative (`InvalidPaystub`)
/// - Current base wages are zero, which makes the contribution rates
///   undefined (`InvalidPaystub`)
/// - The pay date's year has no limit-table entry (`UnsupportedTaxYear`)
pub fn project(paystub: &Paystub, config: &EmployeeConfig) -> EngineResult<ProjectedResult> {
    paystub.validate()?;

    let limits = resolve_limits(paystub.tax_year(), config.age_at_year_end)?;
    let consumed = periods_consumed(paystub.pay_date);
    let remaining = periods_remaining(paystub.pay_date);

    if paystub.current_base_wages.is_zero() {
        return Err(EngineError::InvalidPaystub {
            field: "current_base_wages".to_string(),
            message: "must be greater than zero to derive contribution rates".to_string(),
        });
    }

    let pretax_rate = paystub.current_pretax / paystub.current_base_wages;
    let aftertax_rate = paystub.current_aftertax / paystub.current_base_wages;
    // The employer only matches up to its cap, no matter how much the
    // employee defers.
    let match_rate = pretax_rate.min(config.max_match_rate);

    debug!(
        %pretax_rate,
        %aftertax_rate,
        %match_rate,
        consumed,
        remaining,
        "derived current-period contribution rates"
    );

    let ytd_pretax = paystub.ytd_pretax + paystub.ytd_pretax_bonus;
    let ytd_match = paystub.ytd_employer_match + paystub.ytd_employer_match_bonus;
    let ytd_aftertax = paystub.ytd_aftertax + paystub.ytd_aftertax_bonus;
    let ytd_eligible_wages =
        paystub.ytd_base_wages + paystub.ytd_annual_bonus + paystub.ytd_quarterly_bonus;

    let bonus_remaining = estimate_remaining_bonus(paystub, config);
    let bonus_pretax = (bonus_remaining * config.bonus_pretax_rate).round_dp(2);
    let bonus_match = (bonus_remaining * match_rate).round_dp(2);
    debug!(%bonus_remaining, %bonus_pretax, %bonus_match, "estimated unpaid bonus");

    let period_pretax = paystub.current_pretax;
    let period_match = (paystub.current_base_wages * match_rate).round_dp(2);
    let period_aftertax = paystub.current_aftertax;

    let deferral_cap = limits.deferral_age_adjusted;
    let mut employee_total = ytd_pretax + bonus_pretax;
    let mut remaining_pretax = bonus_pretax;
    let mut remaining_match = bonus_match;
    let mut remaining_aftertax = Decimal::ZERO;
    let mut remaining_base_wages = Decimal::ZERO;
    let mut remaining_eligible_wages = bonus_remaining;
    let mut true_up_period = None;

    // The deferral limit is already exhausted at the snapshot period; any
    // remaining period can no longer contribute.
    if remaining > 0 && employee_total >= deferral_cap {
        true_up_period = Some(consumed);
    }

    for offset in 1..=remaining {
        let period_index = consumed + offset;
        remaining_base_wages += paystub.current_base_wages;
        remaining_eligible_wages += paystub.current_base_wages;

        if employee_total < deferral_cap {
            let headroom = deferral_cap - employee_total;
            if period_pretax >= headroom {
                // Partial contribution that exactly reaches the limit;
                // later periods carry no employee contribution.
                employee_total += headroom;
                remaining_pretax += headroom;
                true_up_period = Some(period_index);
                debug!(period_index, "deferral limit reached mid-year");
            } else {
                employee_total += period_pretax;
                remaining_pretax += period_pretax;
            }
        }

        // Match and after-tax are not subject to the period-level cutoff.
        remaining_match += period_match;
        remaining_aftertax += period_aftertax;
    }

    let total_pretax = ytd_pretax + remaining_pretax;
    let total_match = ytd_match + remaining_match;
    let after_tax_limit = limits.aggregate_age_adjusted - total_pretax - total_match;

    Ok(ProjectedResult {
        limits,
        after_tax_limit,
        ytd_pretax,
        remaining_pretax,
        ytd_match,
        remaining_match,
        ytd_aftertax,
        remaining_aftertax,
        ytd_base_wages: paystub.ytd_base_wages,
        remaining_base_wages,
        ytd_eligible_wages,
        remaining_eligible_wages,
        true_up_period,
        remaining_periods: remaining,
    })
}
