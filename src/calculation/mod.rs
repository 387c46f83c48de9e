//! Calculation logic for the contribution projection engine.
//!
//! This module contains all the projection functions: IRS limit
//! resolution, semi-monthly pay-period counting, remaining-bonus
//! estimation, the year-end projection simulation, and the advisory
//! pass/fail check evaluation.

mod bonus;
mod checks;
mod limits;
mod pay_periods;
mod projection;

pub use bonus::{BONUS_SEASON_END_MONTH, estimate_remaining_bonus, quarterly_shortfall_threshold};
pub use checks::{TRUE_UP_SAFE_PERIOD, evaluate_checks};
pub use limits::{CATCH_UP_AGE, resolve_limits};
pub use pay_periods::{
    MID_MONTH_SPLIT_DAY, PERIODS_PER_YEAR, periods_consumed, periods_remaining,
};
pub use projection::project;
