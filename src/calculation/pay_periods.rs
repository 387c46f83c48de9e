//! Semi-monthly pay-period counting.
//!
//! This module encodes a fixed scheduling policy, not a generic calendar
//! computation: pay is semi-monthly with 24 periods per year, two per
//! month, and the mid-month/month-end split falls at day 20. A pay date on
//! or before the 20th is the month's first period; after the 20th it is
//! the second.

use chrono::{Datelike, NaiveDate};

/// Number of pay periods in a calendar year under the semi-monthly
/// schedule.
pub const PERIODS_PER_YEAR: u32 = 24;

/// Day of month separating the mid-month period from the month-end period.
pub const MID_MONTH_SPLIT_DAY: u32 = 20;

/// Returns how many pay periods have been consumed by the given pay date,
/// inclusive.
///
/// # Examples
///
/// ```
/// use contrib_engine::calculation::periods_consumed;
/// use chrono::NaiveDate;
///
/// let mid_july = NaiveDate::from_ymd_opt(2022, 7, 15).unwrap();
/// assert_eq!(periods_consumed(mid_july), 13);
/// ```
pub fn periods_consumed(pay_date: NaiveDate) -> u32 {
    let month_periods = if pay_date.day() <= MID_MONTH_SPLIT_DAY { 1 } else { 2 };
    2 * (pay_date.month() - 1) + month_periods
}

/// Returns how many pay periods remain in the calendar year after the
/// given pay date.
///
/// Monotonically non-increasing as the pay date advances through the
/// year; zero for a date in the year's final period (December, after the
/// 20th).
pub fn periods_remaining(pay_date: NaiveDate) -> u32 {
    PERIODS_PER_YEAR - periods_consumed(pay_date)
}
