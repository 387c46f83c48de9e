//! Projection result models.
//!
//! This module defines the [`ContributionLimits`] and [`ProjectedResult`]
//! types produced by the projection engine. Both are derived, read-only
//! values: recomputed every run, never persisted.

use rust_decimal::Decimal;
use serde::Serialize;

/// IRS contribution limits resolved for one tax year and employee age.
///
/// The age-adjusted limits equal the base limits plus the catch-up limit
/// when the employee is 50 or older at year end, and the base limits
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContributionLimits {
    /// The tax year these limits apply to.
    pub tax_year: i32,
    /// Employee deferral limit (IRC 402(g)).
    pub deferral: Decimal,
    /// Aggregate employer + employee limit (IRC 415(c)).
    pub aggregate: Decimal,
    /// Catch-up allowance granted; zero when the employee is under 50.
    pub catch_up: Decimal,
    /// Deferral limit including any catch-up allowance.
    pub deferral_age_adjusted: Decimal,
    /// Aggregate limit including any catch-up allowance.
    pub aggregate_age_adjusted: Decimal,
}

/// The projection engine's output for one paystub.
///
/// Year-to-date figures are taken from the paystub as stated; the
/// `remaining_*` fields are the engine's estimate of activity in the pay
/// periods left in the year, including expected bonus payments. The
/// combining accessors are the totals the check evaluator consumes; they
/// are always exactly `ytd + remaining` with no double counting.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedResult {
    /// The limits this projection was evaluated against.
    pub limits: ContributionLimits,
    /// Remaining room for after-tax contributions once projected pretax
    /// and employer match are accounted for.
    pub after_tax_limit: Decimal,
    /// Year-to-date employee pretax contribution (salary + bonus sourced).
    pub ytd_pretax: Decimal,
    /// Estimated pretax contribution over the remaining periods and
    /// expected bonuses.
    pub remaining_pretax: Decimal,
    /// Year-to-date employer match (salary + bonus sourced).
    pub ytd_match: Decimal,
    /// Estimated employer match over the remaining periods and expected
    /// bonuses.
    pub remaining_match: Decimal,
    /// Year-to-date after-tax contribution (salary + bonus sourced).
    pub ytd_aftertax: Decimal,
    /// Estimated after-tax contribution over the remaining periods.
    pub remaining_aftertax: Decimal,
    /// Year-to-date base salary wages, excluding bonuses.
    pub ytd_base_wages: Decimal,
    /// Base salary wages over the remaining simulated periods, excluding
    /// the bonus estimate.
    pub remaining_base_wages: Decimal,
    /// Year-to-date eligible wages (base plus bonuses paid).
    pub ytd_eligible_wages: Decimal,
    /// Estimated eligible wages over the remaining periods and expected
    /// bonuses.
    pub remaining_eligible_wages: Decimal,
    /// The 1-based pay-period index (of 24) at which the employee deferral
    /// limit is first reached, if the simulation hits it.
    pub true_up_period: Option<u32>,
    /// The number of remaining pay periods that were simulated.
    pub remaining_periods: u32,
}

impl ProjectedResult {
    /// Projected year-end employee pretax contribution.
    pub fn total_pretax(&self) -> Decimal {
        self.ytd_pretax + self.remaining_pretax
    }

    /// Projected year-end employer match.
    pub fn total_match(&self) -> Decimal {
        self.ytd_match + self.remaining_match
    }

    /// Projected year-end after-tax contribution.
    pub fn total_aftertax(&self) -> Decimal {
        self.ytd_aftertax + self.remaining_aftertax
    }

    /// Projected year-end base salary wages.
    pub fn total_base_wages(&self) -> Decimal {
        self.ytd_base_wages + self.remaining_base_wages
    }

    /// Projected year-end eligible wages.
    pub fn total_eligible_wages(&self) -> Decimal {
        self.ytd_eligible_wages + self.remaining_eligible_wages
    }
}
