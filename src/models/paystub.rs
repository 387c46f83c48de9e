//! Paystub model.
//!
//! This module defines the [`Paystub`] struct, a single pay-period snapshot
//! from which year-end contribution totals are projected.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The paystub field names accepted by [`Paystub::set_field`], in
/// declaration order.
pub const PAYSTUB_FIELDS: &[&str] = &[
    "pay_date",
    "current_base_wages",
    "ytd_base_wages",
    "ytd_annual_bonus",
    "ytd_quarterly_bonus",
    "current_pretax",
    "ytd_pretax",
    "ytd_pretax_bonus",
    "ytd_employer_match",
    "ytd_employer_match_bonus",
    "current_aftertax",
    "ytd_aftertax",
    "ytd_aftertax_bonus",
];

/// One pay period's snapshot of wages and 401(k) contribution activity.
///
/// All monetary fields are fixed-point decimals with two-decimal precision
/// and must be non-negative. A `Paystub` is constructed once per run from a
/// single ingestion source, optionally adjusted by command-line overrides,
/// and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paystub {
    /// The pay date of this pay period.
    pub pay_date: NaiveDate,
    /// Base salary wages for the current pay period.
    pub current_base_wages: Decimal,
    /// Year-to-date base salary wages.
    pub ytd_base_wages: Decimal,
    /// Year-to-date annual performance bonus paid.
    #[serde(default)]
    pub ytd_annual_bonus: Decimal,
    /// Year-to-date quarterly performance bonus paid.
    #[serde(default)]
    pub ytd_quarterly_bonus: Decimal,
    /// Pretax (traditional) 401(k) contribution for the current period.
    pub current_pretax: Decimal,
    /// Year-to-date pretax 401(k) contribution from salary pay.
    pub ytd_pretax: Decimal,
    /// Year-to-date pretax 401(k) contribution from bonus pay.
    #[serde(default)]
    pub ytd_pretax_bonus: Decimal,
    /// Year-to-date employer match on salary contributions.
    pub ytd_employer_match: Decimal,
    /// Year-to-date employer match on bonus contributions.
    #[serde(default)]
    pub ytd_employer_match_bonus: Decimal,
    /// After-tax (non-Roth) contribution for the current period.
    pub current_aftertax: Decimal,
    /// Year-to-date after-tax contribution from salary pay.
    pub ytd_aftertax: Decimal,
    /// Year-to-date after-tax contribution from bonus pay.
    #[serde(default)]
    pub ytd_aftertax_bonus: Decimal,
}

impl Paystub {
    /// Returns the tax year the pay date falls in.
    pub fn tax_year(&self) -> i32 {
        self.pay_date.year()
    }

    /// Validates that every monetary field is non-negative.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the paystub is valid, or `InvalidPaystub` naming
    /// the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in self.monetary_fields() {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPaystub {
                    field: field.to_string(),
                    message: format!("must be non-negative, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Sets a field by name from a string value.
    ///
    /// This is the explicit mapping behind command-line overrides of the
    /// form `key=value`. Unknown keys are rejected rather than silently
    /// ignored.
    ///
    /// # Arguments
    ///
    /// * `key` - One of the names in [`PAYSTUB_FIELDS`]
    /// * `value` - A decimal amount, or an ISO date for `pay_date`
    ///
    /// # Returns
    ///
    /// Returns `InvalidPaystub` for an unknown key and `ParseError` for a
    /// malformed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrib_engine::models::Paystub;
    /// use rust_decimal::Decimal;
    ///
    /// let mut paystub = Paystub::zeroed("2022-07-15".parse().unwrap());
    /// paystub.set_field("current_base_wages", "4166.67").unwrap();
    /// assert_eq!(paystub.current_base_wages, Decimal::new(416667, 2));
    /// assert!(paystub.set_field("no_such_field", "1.00").is_err());
    /// ```
    pub fn set_field(&mut self, key: &str, value: &str) -> EngineResult<()> {
        if key == "pay_date" {
            self.pay_date = NaiveDate::from_str(value).map_err(|e| EngineError::ParseError {
                context: format!("override '{}'", key),
                message: e.to_string(),
            })?;
            return Ok(());
        }

        let amount = Decimal::from_str(value).map_err(|e| EngineError::ParseError {
            context: format!("override '{}'", key),
            message: e.to_string(),
        })?;

        let slot = match key {
            "current_base_wages" => &mut self.current_base_wages,
            "ytd_base_wages" => &mut self.ytd_base_wages,
            "ytd_annual_bonus" => &mut self.ytd_annual_bonus,
            "ytd_quarterly_bonus" => &mut self.ytd_quarterly_bonus,
            "current_pretax" => &mut self.current_pretax,
            "ytd_pretax" => &mut self.ytd_pretax,
            "ytd_pretax_bonus" => &mut self.ytd_pretax_bonus,
            "ytd_employer_match" => &mut self.ytd_employer_match,
            "ytd_employer_match_bonus" => &mut self.ytd_employer_match_bonus,
            "current_aftertax" => &mut self.current_aftertax,
            "ytd_aftertax" => &mut self.ytd_aftertax,
            "ytd_aftertax_bonus" => &mut self.ytd_aftertax_bonus,
            _ => {
                return Err(EngineError::InvalidPaystub {
                    field: key.to_string(),
                    message: format!("unknown field; expected one of: {}", PAYSTUB_FIELDS.join(", ")),
                });
            }
        };
        *slot = amount;
        Ok(())
    }

    /// Creates a paystub with every monetary field at zero.
    ///
    /// Primarily useful as a base for overrides and in tests.
    pub fn zeroed(pay_date: NaiveDate) -> Self {
        Self {
            pay_date,
            current_base_wages: Decimal::ZERO,
            ytd_base_wages: Decimal::ZERO,
            ytd_annual_bonus: Decimal::ZERO,
            ytd_quarterly_bonus: Decimal::ZERO,
            current_pretax: Decimal::ZERO,
            ytd_pretax: Decimal::ZERO,
            ytd_pretax_bonus: Decimal::ZERO,
            ytd_employer_match: Decimal::ZERO,
            ytd_employer_match_bonus: Decimal::ZERO,
            current_aftertax: Decimal::ZERO,
            ytd_aftertax: Decimal::ZERO,
            ytd_aftertax_bonus: Decimal::ZERO,
        }
    }

    fn monetary_fields(&self) -> [(&'static str, Decimal); 12] {
        [
            ("current_base_wages", self.current_base_wages),
            ("ytd_base_wages", self.ytd_base_wages),
            ("ytd_annual_bonus", self.ytd_annual_bonus),
            ("ytd_quarterly_bonus", self.ytd_quarterly_bonus),
            ("current_pretax", self.current_pretax),
            ("ytd_pretax", self.ytd_pretax),
            ("ytd_pretax_bonus", self.ytd_pretax_bonus),
            ("ytd_employer_match", self.ytd_employer_match),
            ("ytd_employer_match_bonus", self.ytd_employer_match_bonus),
            ("current_aftertax", self.current_aftertax),
            ("ytd_aftertax", self.ytd_aftertax),
            ("ytd_aftertax_bonus", self.ytd_aftertax_bonus),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn sample_paystub() -> Paystub {
        let mut paystub = Paystub::zeroed(date("2022-07-15"));
        paystub.current_base_wages = dec("4166.67");
        paystub.ytd_base_wages = dec("54166.71");
        paystub.current_pretax = dec("625.00");
        paystub.ytd_pretax = dec("8125.05");
        paystub.ytd_employer_match = dec("2708.35");
        paystub
    }

    #[test]
    fn test_tax_year_comes_from_pay_date() {
        assert_eq!(sample_paystub().tax_year(), 2022);
    }

    #[test]
    fn test_validate_accepts_non_negative_fields() {
        assert!(sample_paystub().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_field() {
        let mut paystub = sample_paystub();
        paystub.ytd_employer_match = dec("-1.00");

        let result = paystub.validate();
        match result {
            Err(EngineError::InvalidPaystub { field, .. }) => {
                assert_eq!(field, "ytd_employer_match");
            }
            other => panic!("Expected InvalidPaystub, got {:?}", other),
        }
    }

    #[test]
    fn test_set_field_updates_monetary_field() {
        let mut paystub = sample_paystub();
        paystub.set_field("ytd_annual_bonus", "12000.00").unwrap();
        assert_eq!(paystub.ytd_annual_bonus, dec("12000.00"));
    }

    #[test]
    fn test_set_field_updates_pay_date() {
        let mut paystub = sample_paystub();
        paystub.set_field("pay_date", "2022-12-31").unwrap();
        assert_eq!(paystub.pay_date, date("2022-12-31"));
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let mut paystub = sample_paystub();
        let result = paystub.set_field("favorite_color", "blue");

        match result {
            Err(EngineError::InvalidPaystub { field, message }) => {
                assert_eq!(field, "favorite_color");
                assert!(message.contains("unknown field"));
                assert!(message.contains("current_base_wages"));
            }
            other => panic!("Expected InvalidPaystub, got {:?}", other),
        }
    }

    #[test]
    fn test_set_field_rejects_malformed_amount() {
        let mut paystub = sample_paystub();
        let result = paystub.set_field("ytd_pretax", "twelve");
        assert!(matches!(result, Err(EngineError::ParseError { .. })));
    }

    #[test]
    fn test_set_field_rejects_malformed_date() {
        let mut paystub = sample_paystub();
        let result = paystub.set_field("pay_date", "07/15/2022 or so");
        assert!(matches!(result, Err(EngineError::ParseError { .. })));
    }

    #[test]
    fn test_deserialize_defaults_optional_bonus_fields_to_zero() {
        let yaml = r#"
pay_date: 2022-07-15
current_base_wages: "4166.67"
ytd_base_wages: "54166.71"
current_pretax: "625.00"
ytd_pretax: "8125.05"
ytd_employer_match: "2708.35"
current_aftertax: "0.00"
ytd_aftertax: "0.00"
"#;
        let paystub: Paystub = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(paystub.ytd_annual_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_quarterly_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_pretax_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_employer_match_bonus, Decimal::ZERO);
        assert_eq!(paystub.ytd_aftertax_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_round_trips() {
        let paystub = sample_paystub();
        let json = serde_json::to_string(&paystub).unwrap();
        let back: Paystub = serde_json::from_str(&json).unwrap();
        assert_eq!(paystub, back);
    }

    #[test]
    fn test_field_name_list_matches_setters() {
        let mut paystub = sample_paystub();
        for field in PAYSTUB_FIELDS {
            let value = if *field == "pay_date" { "2022-01-15" } else { "1.00" };
            assert!(
                paystub.set_field(field, value).is_ok(),
                "setter missing for listed field '{}'",
                field
            );
        }
    }
}
