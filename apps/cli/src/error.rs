//! # Application Error Types
//!
//! Errors of the terminal front end, and the serializable shape calculation
//! errors take in `--json` output.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in tipcalc                                │
//! │                                                                         │
//! │  CalcError (core) ──► rendered as "Error: ..."   exit code 0           │
//! │                  └──► ErrorResponse { code, message } with --json      │
//! │                                                                         │
//! │  AppError (here)                                                        │
//! │    UnknownCommand / InvalidArgument / PeopleOptionsHidden               │
//! │        └──► printed as a hint inside the form session, session goes on │
//! │    InvalidConfig / ConfigRead / Io / ...                                │
//! │        └──► returned from main, non-zero exit                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tipcalc_core::{CalcError, NumericField};

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised by the CLI itself.
#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config could not be encoded as TOML.
    #[error("Failed to encode config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// `config init` refused to overwrite an existing file.
    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    /// No platform config directory could be determined.
    #[error("Could not determine config directory; pass --config <path>")]
    NoConfigPath,

    // =========================================================================
    // Form Session Errors
    // =========================================================================
    /// The form session did not recognise a command word.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A form command had a bad argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// People were chosen while the people options are hidden.
    #[error("Number of people is only available when splitting the bill. Use 'split yes' first.")]
    PeopleOptionsHidden,

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Serializable Calculation Errors
// =============================================================================

/// Machine-readable codes for calculation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidNumber,
    MissingTipSelection,
    MissingSplitChoice,
    MissingPeopleSelection,
    InvalidPeopleCount,
}

/// What `--json` output carries for a failed calculation.
///
/// ```json
/// {
///   "code": "INVALID_NUMBER",
///   "field": "bill_amount",
///   "message": "Please enter a valid bill amount."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<NumericField>,

    pub message: String,
}

impl From<&CalcError> for ErrorResponse {
    fn from(err: &CalcError) -> Self {
        let (code, field) = match err {
            CalcError::InvalidNumber { field, .. } => (ErrorCode::InvalidNumber, Some(*field)),
            CalcError::MissingTipSelection => (ErrorCode::MissingTipSelection, None),
            CalcError::MissingSplitChoice => (ErrorCode::MissingSplitChoice, None),
            CalcError::MissingPeopleSelection => (ErrorCode::MissingPeopleSelection, None),
            CalcError::InvalidPeopleCount { .. } => (ErrorCode::InvalidPeopleCount, None),
        };

        ErrorResponse {
            code,
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_codes() {
        let resp = ErrorResponse::from(&CalcError::MissingSplitChoice);
        assert_eq!(resp.code, ErrorCode::MissingSplitChoice);
        assert_eq!(resp.message, "Please choose whether to split the bill.");

        let resp = ErrorResponse::from(&CalcError::InvalidPeopleCount { count: 0 });
        assert_eq!(resp.code, ErrorCode::InvalidPeopleCount);
    }

    #[test]
    fn test_error_response_json() {
        let err = CalcError::invalid_number(NumericField::BillAmount, "-5.00");
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(json["code"], "INVALID_NUMBER");
        assert_eq!(json["field"], "bill_amount");
        assert_eq!(json["message"], "Please enter a valid bill amount.");

        let json = serde_json::to_value(ErrorResponse::from(&CalcError::MissingTipSelection)).unwrap();
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_config_exists_message() {
        let err = AppError::ConfigExists(PathBuf::from("/tmp/tipcalc.toml"));
        assert_eq!(
            err.to_string(),
            "Config file already exists: /tmp/tipcalc.toml (use --force to overwrite)"
        );
    }
}
