//! # Error Types
//!
//! Domain-specific error types for tipcalc-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipcalc-core errors (this file)                                       │
//! │  └── CalcError        - Resolution and calculation failures            │
//! │                                                                         │
//! │  tipcalc-cli errors (in app)                                           │
//! │  ├── AppError         - Config, I/O, unknown form commands             │
//! │  └── ErrorResponse    - What `--json` output sees (serialized)         │
//! │                                                                         │
//! │  Flow: CalcError ──► report::render ──► "Error: <reason>"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of every variant IS the user-facing reason
//! 3. Every error is user-correctable; none is fatal

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Numeric Field
// =============================================================================

/// The free-text numeric field a [`CalcError::InvalidNumber`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// The bill amount entry.
    BillAmount,
    /// The custom tip percentage entry.
    TipPercentage,
    /// The custom number-of-people entry.
    PeopleCount,
}

impl NumericField {
    /// Human-readable noun used in error reasons.
    pub const fn noun(&self) -> &'static str {
        match self {
            NumericField::BillAmount => "bill amount",
            NumericField::TipPercentage => "tip percentage",
            NumericField::PeopleCount => "number of people",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors produced while resolving inputs or computing a bill split.
///
/// ## User Workflow
/// ```text
/// User presses "Calculate"
///      │
///      ▼
/// resolve(request) ──► CalcError::MissingTipSelection
///      │
///      ▼
/// UI shows: "Error: Please select or enter a tip percentage."
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A required numeric field is non-numeric, malformed, negative or
    /// non-finite.
    #[error("Please enter a valid {field}.")]
    InvalidNumber { field: NumericField, input: String },

    /// Neither a tip preset nor a custom tip was provided.
    #[error("Please select or enter a tip percentage.")]
    MissingTipSelection,

    /// The user never answered "Split bill?".
    #[error("Please choose whether to split the bill.")]
    MissingSplitChoice,

    /// Split was chosen but no people preset or custom count was given.
    #[error("Please select or enter number of people.")]
    MissingPeopleSelection,

    /// The people count parsed but is not a positive integer.
    #[error("Number of people must be greater than zero.")]
    InvalidPeopleCount { count: i64 },
}

impl CalcError {
    /// Shorthand for a [`CalcError::InvalidNumber`] on `field`.
    pub fn invalid_number(field: NumericField, input: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            field,
            input: input.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::MissingTipSelection.to_string(),
            "Please select or enter a tip percentage."
        );
        assert_eq!(
            CalcError::MissingSplitChoice.to_string(),
            "Please choose whether to split the bill."
        );
        assert_eq!(
            CalcError::MissingPeopleSelection.to_string(),
            "Please select or enter number of people."
        );
        assert_eq!(
            CalcError::InvalidPeopleCount { count: 0 }.to_string(),
            "Number of people must be greater than zero."
        );
    }

    #[test]
    fn test_invalid_number_names_the_field() {
        let err = CalcError::invalid_number(NumericField::BillAmount, "-5.00");
        assert_eq!(err.to_string(), "Please enter a valid bill amount.");

        let err = CalcError::invalid_number(NumericField::TipPercentage, "abc");
        assert_eq!(err.to_string(), "Please enter a valid tip percentage.");

        let err = CalcError::invalid_number(NumericField::PeopleCount, "2.5");
        assert_eq!(err.to_string(), "Please enter a valid number of people.");
    }
}
