//! Error types for the contribution projection engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during projection.

use thiserror::Error;

/// The main error type for the contribution projection engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every
/// variant is fatal for the paystub being processed; there is no retry
/// or recovery.
///
/// # Example
///
/// ```
/// use contrib_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration key was absent.
    #[error("Missing required config value '{key}' in {path}")]
    MissingConfigValue {
        /// The required key that was absent.
        key: String,
        /// The file the key was expected in.
        path: String,
    },

    /// The paystub's tax year has no entry in the IRS limit table.
    #[error("No IRS contribution limits known for tax year {year}")]
    UnsupportedTaxYear {
        /// The unsupported tax year.
        year: i32,
    },

    /// A paystub field was missing, negative, or made a rate computation
    /// undefined.
    #[error("Invalid paystub field '{field}': {message}")]
    InvalidPaystub {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date or row in a paystub source could not be parsed.
    #[error("Parse error in {context}: {message}")]
    ParseError {
        /// Where the malformed input was encountered.
        context: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_missing_config_value_names_key_and_file() {
        let error = EngineError::MissingConfigValue {
            key: "max_match_rate".to_string(),
            path: "employee.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing required config value 'max_match_rate' in employee.yaml"
        );
    }

    #[test]
    fn test_unsupported_tax_year_displays_year() {
        let error = EngineError::UnsupportedTaxYear { year: 1999 };
        assert_eq!(
            error.to_string(),
            "No IRS contribution limits known for tax year 1999"
        );
    }

    #[test]
    fn test_invalid_paystub_displays_field_and_message() {
        let error = EngineError::InvalidPaystub {
            field: "current_base_wages".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid paystub field 'current_base_wages': must be greater than zero"
        );
    }

    #[test]
    fn test_parse_error_displays_context_and_message() {
        let error = EngineError::ParseError {
            context: "paystub.csv row 12".to_string(),
            message: "cell is not a currency amount".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parse error in paystub.csv row 12: cell is not a currency amount"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unsupported_year() -> EngineResult<()> {
            Err(EngineError::UnsupportedTaxYear { year: 1987 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unsupported_year()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
