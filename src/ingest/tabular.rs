//! Tabular paystub source.
//!
//! This module parses one spreadsheet/CSV payslip export layout. Rows are
//! matched by case-insensitive substring against known labels, and the
//! amount columns for a matched row are fixed per label: column 1 holds
//! the current-period amount and column 2 the year-to-date amount. The
//! pay date sits two rows below the "payslip information" header row.

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::models::Paystub;
use tracing::debug;

/// Column index of the current-period amount in a matched row.
const CURRENT_COL: usize = 1;
/// Column index of the year-to-date amount in a matched row.
const YTD_COL: usize = 2;
/// Row offset from the "payslip information" header to the pay date row.
const PAY_DATE_ROW_OFFSET: usize = 2;

/// Where a labeled row's amounts land in the paystub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CurrentBaseWages,
    YtdBaseWages,
    YtdAnnualBonus,
    YtdQuarterlyBonus,
    CurrentPretax,
    YtdPretax,
    YtdPretaxBonus,
    YtdEmployerMatch,
    YtdEmployerMatchBonus,
    CurrentAftertax,
    YtdAftertax,
    YtdAftertaxBonus,
}

/// One row-matching rule: a lowercase label substring and the
/// `(column, field)` assignments it carries.
struct LabelRule {
    label: &'static str,
    assignments: &'static [(usize, Field)],
    required: bool,
}

/// The supported payslip layout. Order matters: the first matching rule
/// wins, so bonus variants precede their plain-label counterparts.
const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        label: "base wages for salary pay",
        assignments: &[
            (CURRENT_COL, Field::CurrentBaseWages),
            (YTD_COL, Field::YtdBaseWages),
        ],
        required: true,
    },
    LabelRule {
        label: "annual bonus",
        assignments: &[(YTD_COL, Field::YtdAnnualBonus)],
        required: false,
    },
    LabelRule {
        label: "quarterly bonus",
        assignments: &[(YTD_COL, Field::YtdQuarterlyBonus)],
        required: false,
    },
    LabelRule {
        label: "401k bonus deduction",
        assignments: &[(YTD_COL, Field::YtdPretaxBonus)],
        required: false,
    },
    LabelRule {
        label: "401k deduction",
        assignments: &[
            (CURRENT_COL, Field::CurrentPretax),
            (YTD_COL, Field::YtdPretax),
        ],
        required: true,
    },
    LabelRule {
        label: "401k employer match bonus",
        assignments: &[(YTD_COL, Field::YtdEmployerMatchBonus)],
        required: false,
    },
    LabelRule {
        label: "401k employer match",
        assignments: &[(YTD_COL, Field::YtdEmployerMatch)],
        required: true,
    },
    LabelRule {
        label: "after tax bonus pay",
        assignments: &[(YTD_COL, Field::YtdAftertaxBonus)],
        required: false,
    },
    LabelRule {
        label: "after tax base pay",
        assignments: &[
            (CURRENT_COL, Field::CurrentAftertax),
            (YTD_COL, Field::YtdAftertax),
        ],
        required: true,
    },
];

/// Header label marking the payslip metadata section; the pay date is two
/// rows below it.
const PAY_DATE_LABEL: &str = "payslip information";

/// Loads a paystub from a tabular CSV export.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Returns
///
/// Returns the validated [`Paystub`] on success, or an error if the file
/// is missing (`ConfigNotFound`), a required label or the pay date cannot
/// be found, or a matched cell is not a currency amount (`ParseError`).
/// Rows for optional bonus labels may be absent; those fields default to
/// zero.
pub fn load_paystub_csv<P: AsRef<Path>>(path: P) -> EngineResult<Paystub> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

    let mut rows: Vec<StringRecord> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::ParseError {
            context: path_str.clone(),
            message: e.to_string(),
        })?;
        rows.push(record);
    }

    let mut amounts: Vec<(Field, Decimal)> = Vec::new();
    let mut pay_date: Option<NaiveDate> = None;

    for (index, row) in rows.iter().enumerate() {
        let text = row_text(row);

        if pay_date.is_none() && text.contains(PAY_DATE_LABEL) {
            pay_date = Some(extract_pay_date(&rows, index, &path_str)?);
            continue;
        }

        let Some(rule) = LABEL_RULES.iter().find(|r| text.contains(r.label)) else {
            continue;
        };
        if amounts.iter().any(|(f, _)| rule.assignments.iter().any(|(_, rf)| rf == f)) {
            // Only the first occurrence of a label is read.
            continue;
        }

        debug!(row = index + 1, label = rule.label, "matched payslip row");
        for &(column, field) in rule.assignments {
            let cell = row.get(column).unwrap_or("");
            let amount = parse_money(cell).ok_or_else(|| EngineError::ParseError {
                context: format!("{} row {}", path_str, index + 1),
                message: format!(
                    "column {} for '{}' is not a currency amount: '{}'",
                    column, rule.label, cell
                ),
            })?;
            amounts.push((field, amount));
        }
    }

    let pay_date = pay_date.ok_or_else(|| EngineError::ParseError {
        context: path_str.clone(),
        message: format!("no '{}' row found", PAY_DATE_LABEL),
    })?;

    for rule in LABEL_RULES.iter().filter(|r| r.required) {
        let satisfied = rule
            .assignments
            .iter()
            .all(|(_, field)| amounts.iter().any(|(f, _)| f == field));
        if !satisfied {
            return Err(EngineError::ParseError {
                context: path_str.clone(),
                message: format!("required row '{}' not found", rule.label),
            });
        }
    }

    let mut paystub = Paystub::zeroed(pay_date);
    for (field, amount) in amounts {
        let slot = match field {
            Field::CurrentBaseWages => &mut paystub.current_base_wages,
            Field::YtdBaseWages => &mut paystub.ytd_base_wages,
            Field::YtdAnnualBonus => &mut paystub.ytd_annual_bonus,
            Field::YtdQuarterlyBonus => &mut paystub.ytd_quarterly_bonus,
            Field::CurrentPretax => &mut paystub.current_pretax,
            Field::YtdPretax => &mut paystub.ytd_pretax,
            Field::YtdPretaxBonus => &mut paystub.ytd_pretax_bonus,
            Field::YtdEmployerMatch => &mut paystub.ytd_employer_match,
            Field::YtdEmployerMatchBonus => &mut paystub.ytd_employer_match_bonus,
            Field::CurrentAftertax => &mut paystub.current_aftertax,
            Field::YtdAftertax => &mut paystub.ytd_aftertax,
            Field::YtdAftertaxBonus => &mut paystub.ytd_aftertax_bonus,
        };
        *slot = amount;
    }

    paystub.validate()?;
    Ok(paystub)
}

/// Lowercased, space-joined row text for substring matching.
fn row_text(row: &StringRecord) -> String {
    row.iter().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Parses a currency cell, tolerating `$`, thousands separators, and
/// surrounding whitespace. Empty cells are treated as absent.
fn parse_money(cell: &str) -> Option<Decimal> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Finds the pay date two rows below the payslip-information header.
fn extract_pay_date(
    rows: &[StringRecord],
    header_index: usize,
    path: &str,
) -> EngineResult<NaiveDate> {
    let date_index = header_index + PAY_DATE_ROW_OFFSET;
    let row = rows.get(date_index).ok_or_else(|| EngineError::ParseError {
        context: format!("{} row {}", path, header_index + 1),
        message: format!(
            "expected a pay date {} rows below '{}'",
            PAY_DATE_ROW_OFFSET, PAY_DATE_LABEL
        ),
    })?;

    row.iter()
        .filter_map(|cell| parse_date(cell.trim()))
        .next()
        .ok_or_else(|| EngineError::ParseError {
            context: format!("{} row {}", path, date_index + 1),
            message: "no parsable pay date found".to_string(),
        })
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(cell, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const EXPORT: &str = "\
Payslip Information,,
Field,Value,
Pay Date,07/15/2022,
Earnings,Current,YTD
Base Wages for Salary Pay,\"$4,166.67\",\"$54,166.71\"
Annual Bonus,$0.00,\"$11,000.00\"
Quarterly Bonus,$0.00,\"$2,000.00\"
Deductions,Current,YTD
401k Deduction,$625.00,\"$8,125.05\"
401k Bonus Deduction,$0.00,\"$1,650.00\"
Employer Contributions,Current,YTD
401k Employer Match Bonus,$0.00,$550.00
401k Employer Match,$208.33,\"$2,708.35\"
After Tax Base Pay,$500.00,\"$6,500.00\"
After Tax Bonus Pay,$0.00,$0.00
";

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parses_full_export() {
        let path = write_temp("contrib_engine_export_full.csv", EXPORT);
        let paystub = load_paystub_csv(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            paystub.pay_date,
            NaiveDate::from_ymd_opt(2022, 7, 15).unwrap()
        );
        assert_eq!(paystub.current_base_wages, dec("4166.67"));
        assert_eq!(paystub.ytd_base_wages, dec("54166.71"));
        assert_eq!(paystub.ytd_annual_bonus, dec("11000.00"));
        assert_eq!(paystub.ytd_quarterly_bonus, dec("2000.00"));
        assert_eq!(paystub.current_pretax, dec("625.00"));
        assert_eq!(paystub.ytd_pretax, dec("8125.05"));
        assert_eq!(paystub.ytd_pretax_bonus, dec("1650.00"));
        assert_eq!(paystub.ytd_employer_match, dec("2708.35"));
        assert_eq!(paystub.ytd_employer_match_bonus, dec("550.00"));
        assert_eq!(paystub.current_aftertax, dec("500.00"));
        assert_eq!(paystub.ytd_aftertax, dec("6500.00"));
        assert_eq!(paystub.ytd_aftertax_bonus, dec("0.00"));
    }

    #[test]
    fn test_label_match_is_case_insensitive_substring() {
        let export = EXPORT.replace(
            "Base Wages for Salary Pay",
            "REGULAR - BASE WAGES FOR SALARY PAY (BIWEEKLY)",
        );
        let path = write_temp("contrib_engine_export_caps.csv", &export);
        let paystub = load_paystub_csv(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(paystub.current_base_wages, dec("4166.67"));
    }

    #[test]
    fn test_missing_bonus_rows_default_to_zero() {
        let export: String = EXPORT
            .lines()
            .filter(|line| !line.to_lowercase().contains("bonus"))
            .collect::<Vec<_>>()
            .join("\n");
        let path = write_temp("contrib_engine_export_nobonus.csv", &export);
        let paystub = load_paystub_csv(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(paystub.ytd_annual_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_pretax_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_employer_match_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_aftertax_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_missing_required_row_is_parse_error() {
        let export: String = EXPORT
            .lines()
            .filter(|line| !line.starts_with("401k Deduction"))
            .collect::<Vec<_>>()
            .join("\n");
        let path = write_temp("contrib_engine_export_missing.csv", &export);
        let result = load_paystub_csv(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ParseError { message, .. }) => {
                assert!(message.contains("401k deduction"));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_pay_date_header_is_parse_error() {
        let export = EXPORT.replace("Payslip Information", "Preamble");
        let path = write_temp("contrib_engine_export_nodate.csv", &export);
        let result = load_paystub_csv(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ParseError { message, .. }) => {
                assert!(message.contains("payslip information"));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_amount_cell_is_parse_error() {
        let export = EXPORT.replace("$625.00", "n/a");
        let path = write_temp("contrib_engine_export_badcell.csv", &export);
        let result = load_paystub_csv(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::ParseError { .. })));
    }

    #[test]
    fn test_iso_pay_date_is_accepted() {
        let export = EXPORT.replace("07/15/2022", "2022-07-15");
        let path = write_temp("contrib_engine_export_iso.csv", &export);
        let paystub = load_paystub_csv(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            paystub.pay_date,
            NaiveDate::from_ymd_opt(2022, 7, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = load_paystub_csv("/nonexistent/export.csv");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_parse_money_strips_currency_noise() {
        assert_eq!(parse_money(" $1,234.56 "), Some(dec("1234.56")));
        assert_eq!(parse_money("0.00"), Some(Decimal::ZERO));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("n/a"), None);
    }
}
