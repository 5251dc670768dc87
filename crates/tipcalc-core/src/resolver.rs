//! # Input Resolver
//!
//! Turns the raw, possibly conflicting selections of a [`BillRequest`] into
//! [`ResolvedInputs`], or fails with the first [`CalcError`] found.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      resolve(request)                                   │
//! │                                                                         │
//! │  1. split choice ── Undecided? ─────────► MissingSplitChoice           │
//! │          │                                                              │
//! │  2. bill text ───── not a number / < 0 ─► InvalidNumber(bill)          │
//! │          │                                                              │
//! │  3. tip ─────────── custom text? ── parse ──► InvalidNumber(tip)       │
//! │          │          preset? ─────── use it                             │
//! │          │          neither ─────────────► MissingTipSelection         │
//! │          │                                                              │
//! │  4. people ──────── not split ──► 1                                    │
//! │                     custom text? ── not an integer ► InvalidNumber     │
//! │                                  ── <= 0 ──────────► InvalidPeopleCount│
//! │                     preset? ─────── use it                             │
//! │                     neither ─────────────► MissingPeopleSelection      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split choice is checked first so an undecided split is reported the
//! same way whatever else the form contains.
//!
//! ## Precedence
//! Custom text that is non-blank always beats a preset. The UI may also clear
//! the competing input, but nothing here relies on it.

use crate::error::{CalcError, CalcResult, NumericField};
use crate::types::{
    BillRequest, PeoplePreset, ResolvedInputs, Selection, SplitChoice, TipPreset,
};
use crate::NOT_SPLIT_PEOPLE_COUNT;

// =============================================================================
// Field Resolvers
// =============================================================================

/// Parses the bill entry as a non-negative amount.
///
/// ## Example
/// ```rust
/// use tipcalc_core::resolver::resolve_bill_amount;
///
/// assert_eq!(resolve_bill_amount(" 100.00 ").unwrap(), 100.0);
/// assert!(resolve_bill_amount("-5.00").is_err());
/// assert!(resolve_bill_amount("").is_err());
/// ```
pub fn resolve_bill_amount(raw_text: &str) -> CalcResult<f64> {
    parse_non_negative(raw_text, NumericField::BillAmount)
}

/// Resolves the tip percentage: custom text, then preset, then error.
///
/// A custom tip of `0` is a valid choice.
pub fn resolve_tip_percentage(custom_text: &str, preset: Option<TipPreset>) -> CalcResult<f64> {
    match Selection::from_inputs(custom_text, preset) {
        Selection::Custom(text) => parse_non_negative(&text, NumericField::TipPercentage),
        Selection::Preset(p) => Ok(p.percentage()),
        Selection::Unset => Err(CalcError::MissingTipSelection),
    }
}

/// Fails with [`CalcError::MissingSplitChoice`] if the user never answered.
pub fn resolve_split_choice(choice: SplitChoice) -> CalcResult<bool> {
    choice.as_bool().ok_or(CalcError::MissingSplitChoice)
}

/// Resolves the number of payers.
///
/// When `split` is false the inputs are ignored and the count is 1.
///
/// ## Example
/// ```rust
/// use tipcalc_core::resolver::resolve_people_count;
/// use tipcalc_core::types::PeoplePreset;
///
/// assert_eq!(resolve_people_count("", Some(PeoplePreset::Three), true).unwrap(), 3);
/// assert_eq!(resolve_people_count("5", Some(PeoplePreset::Three), true).unwrap(), 5);
/// assert_eq!(resolve_people_count("", None, false).unwrap(), 1);
/// assert!(resolve_people_count("0", None, true).is_err());
/// ```
pub fn resolve_people_count(
    custom_text: &str,
    preset: Option<PeoplePreset>,
    split: bool,
) -> CalcResult<i64> {
    if !split {
        return Ok(NOT_SPLIT_PEOPLE_COUNT);
    }

    match Selection::from_inputs(custom_text, preset) {
        Selection::Custom(text) => {
            let count = text
                .parse::<i64>()
                .map_err(|_| CalcError::invalid_number(NumericField::PeopleCount, text.as_str()))?;
            if count <= 0 {
                return Err(CalcError::InvalidPeopleCount { count });
            }
            Ok(count)
        }
        Selection::Preset(p) => Ok(i64::from(p.count())),
        Selection::Unset => Err(CalcError::MissingPeopleSelection),
    }
}

// =============================================================================
// Request Resolver
// =============================================================================

/// Resolves a whole request in the order shown in the module docs.
pub fn resolve(request: &BillRequest) -> CalcResult<ResolvedInputs> {
    let split = resolve_split_choice(request.split)?;
    let bill_amount = resolve_bill_amount(&request.bill_text)?;
    let tip_percentage = resolve_tip_percentage(&request.custom_tip, request.tip_preset)?;
    let people = resolve_people_count(&request.custom_people, request.people_preset, split)?;

    Ok(ResolvedInputs {
        bill_amount,
        tip_percentage,
        split,
        people,
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses trimmed text as a finite number `>= 0`.
fn parse_non_negative(text: &str, field: NumericField) -> CalcResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(CalcError::invalid_number(field, trimmed)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
