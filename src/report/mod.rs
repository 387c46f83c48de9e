//! Report rendering for the projection engine.
//!
//! This module formats a [`ProjectedResult`] and its [`CheckReport`] as a
//! plain-text summary: an aligned table of limits and totals followed by
//! PASS/FAIL lines for each check in fixed order.

use rust_decimal::Decimal;

use crate::models::{CheckReport, ProjectedResult};

/// Renders the full plain-text report for one paystub.
///
/// The output ends with one line per check, each prefixed with its
/// literal `PASS` or `FAIL` result tag.
pub fn render_report(result: &ProjectedResult, checks: &CheckReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = format!(
        "401(k) contribution projection for tax year {}",
        result.limits.tax_year
    );
    lines.push(title.clone());
    lines.push("=".repeat(title.len()));
    lines.push(String::new());

    lines.push("IRS limits".to_string());
    lines.push(limit_line("Employee deferral", result.limits.deferral));
    lines.push(limit_line("Aggregate", result.limits.aggregate));
    lines.push(limit_line("Catch-up allowance", result.limits.catch_up));
    lines.push(limit_line(
        "Deferral (age-adjusted)",
        result.limits.deferral_age_adjusted,
    ));
    lines.push(limit_line(
        "Aggregate (age-adjusted)",
        result.limits.aggregate_age_adjusted,
    ));
    lines.push(limit_line("After-tax room", result.after_tax_limit));
    lines.push(String::new());

    lines.push(format!(
        "{:<26}{:>14}{:>16}{:>14}",
        "Contributions", "YTD", "Remaining est.", "Projected"
    ));
    lines.push(total_line(
        "Employee pretax",
        result.ytd_pretax,
        result.remaining_pretax,
    ));
    lines.push(total_line(
        "Employer match",
        result.ytd_match,
        result.remaining_match,
    ));
    lines.push(total_line(
        "After-tax",
        result.ytd_aftertax,
        result.remaining_aftertax,
    ));
    lines.push(total_line(
        "Base wages",
        result.ytd_base_wages,
        result.remaining_base_wages,
    ));
    lines.push(total_line(
        "Eligible wages",
        result.ytd_eligible_wages,
        result.remaining_eligible_wages,
    ));
    lines.push(String::new());

    lines.push(format!(
        "Remaining pay periods simulated: {}",
        result.remaining_periods
    ));
    lines.push(match result.true_up_period {
        Some(period) => format!("Deferral limit reached in period {} of 24", period),
        None => "Deferral limit not reached this year".to_string(),
    });
    lines.push(String::new());

    for (name, passed) in checks.entries() {
        let tag = if passed { "PASS" } else { "FAIL" };
        lines.push(format!("{} {}", tag, name));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn limit_line(label: &str, value: Decimal) -> String {
    format!("  {:<24}{:>14}", label, money(value))
}

fn total_line(label: &str, ytd: Decimal, remaining: Decimal) -> String {
    format!(
        "  {:<24}{:>14}{:>16}{:>14}",
        label,
        money(ytd),
        money(remaining),
        money(ytd + remaining)
    )
}
