//! # Bill Calculator
//!
//! Pure arithmetic over resolved inputs. No state, no rounding.
//!
//! ```text
//! tip_amount       = bill × (tip% / 100)
//! total            = bill + tip_amount
//! total_per_person = total / people        (people > 0)
//! ```
//!
//! A bill that is not split goes through the same path with `people = 1`,
//! so its "per person" figure is the whole tip-inclusive total.
//!
//! A total that overflows `f64` is rejected as an invalid number rather than
//! shown as infinity.

use crate::error::{CalcError, CalcResult, NumericField};
use crate::resolver;
use crate::types::{BillBreakdown, BillRequest, ResolvedInputs};

/// Tip owed on `bill_amount` at `tip_percentage` percent.
///
/// ## Example
/// ```rust
/// use tipcalc_core::calculator::tip_amount;
///
/// assert_eq!(tip_amount(90.0, 10.0), 9.0);
/// assert_eq!(tip_amount(100.0, 0.0), 0.0);
/// ```
#[inline]
pub fn tip_amount(bill_amount: f64, tip_percentage: f64) -> f64 {
    bill_amount * (tip_percentage / 100.0)
}

/// Each payer's share of the tip-inclusive total.
///
/// ## Errors
/// [`CalcError::InvalidPeopleCount`] when `people_count <= 0`, and
/// [`CalcError::InvalidNumber`] when the total is too large for an `f64`.
///
/// ## Example
/// ```rust
/// use tipcalc_core::calculator::total_per_person;
///
/// assert_eq!(total_per_person(90.0, 10.0, 3).unwrap(), 33.0);
/// assert_eq!(total_per_person(100.0, 15.0, 1).unwrap(), 115.0);
/// assert!(total_per_person(40.0, 20.0, 0).is_err());
/// ```
pub fn total_per_person(bill_amount: f64, tip_percentage: f64, people_count: i64) -> CalcResult<f64> {
    if people_count <= 0 {
        return Err(CalcError::InvalidPeopleCount {
            count: people_count,
        });
    }

    let total = checked_total(bill_amount, tip_percentage)?;
    Ok(total / people_count as f64)
}

/// `bill + tip`, failing on the input that pushed it past `f64::MAX`.
fn checked_total(bill_amount: f64, tip_percentage: f64) -> CalcResult<f64> {
    let tip = tip_amount(bill_amount, tip_percentage);
    if !tip.is_finite() {
        return Err(CalcError::invalid_number(
            NumericField::TipPercentage,
            tip_percentage.to_string(),
        ));
    }

    let total = bill_amount + tip;
    if !total.is_finite() {
        return Err(CalcError::invalid_number(
            NumericField::BillAmount,
            bill_amount.to_string(),
        ));
    }

    Ok(total)
}

/// Computes the full breakdown for resolved inputs.
pub fn calculate(inputs: &ResolvedInputs) -> CalcResult<BillBreakdown> {
    let tip = tip_amount(inputs.bill_amount, inputs.tip_percentage);
    let per_person = total_per_person(inputs.bill_amount, inputs.tip_percentage, inputs.people)?;

    Ok(BillBreakdown {
        bill_amount: inputs.bill_amount,
        tip_percentage: inputs.tip_percentage,
        tip_amount: tip,
        total: inputs.bill_amount + tip,
        people: inputs.people,
        per_person,
        split: inputs.split,
    })
}

/// Resolves a raw request and calculates it in one step.
pub fn calculate_request(request: &BillRequest) -> CalcResult<BillBreakdown> {
    let inputs = resolver::resolve(request)?;
    calculate(&inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PeoplePreset, TipPreset};

    #[test]
    fn test_tip_amount() {
        assert_eq!(tip_amount(100.0, 15.0), 15.0);
        assert_eq!(tip_amount(0.0, 20.0), 0.0);
        assert!((tip_amount(33.33, 12.5) - 4.16625).abs() < 1e-9);
    }

    #[test]
    fn test_total_per_person_rejects_non_positive() {
        for n in [0, -1, i64::MIN] {
            assert_eq!(
                total_per_person(10.0, 10.0, n).unwrap_err(),
                CalcError::InvalidPeopleCount { count: n }
            );
        }
    }

    #[test]
    fn test_overflowing_total_rejected() {
        assert!(matches!(
            total_per_person(1.7e308, 20.0, 1).unwrap_err(),
            CalcError::InvalidNumber { field: NumericField::BillAmount, .. }
        ));
        assert!(matches!(
            total_per_person(1e20, 1e300, 2).unwrap_err(),
            CalcError::InvalidNumber { field: NumericField::TipPercentage, .. }
        ));
        // People are checked before the total.
        assert_eq!(
            total_per_person(1.7e308, 20.0, 0).unwrap_err(),
            CalcError::InvalidPeopleCount { count: 0 }
        );
    }

    #[test]
    fn test_large_finite_total_accepted() {
        assert_eq!(total_per_person(1e17, 15.0, 1).unwrap(), 1.15e17);
    }

    #[test]
    fn test_calculate_split() {
        let breakdown = calculate(&ResolvedInputs {
            bill_amount: 90.0,
            tip_percentage: 10.0,
            split: true,
            people: 3,
        })
        .unwrap();

        assert_eq!(breakdown.tip_amount, 9.0);
        assert_eq!(breakdown.total, 99.0);
        assert_eq!(breakdown.per_person, 33.0);
        assert_eq!(breakdown.headline_amount(), 33.0);
    }

    #[test]
    fn test_calculate_not_split_is_whole_total() {
        let breakdown = calculate(&ResolvedInputs {
            bill_amount: 100.0,
            tip_percentage: 15.0,
            split: false,
            people: 1,
        })
        .unwrap();

        assert_eq!(breakdown.total, 115.0);
        assert_eq!(breakdown.per_person, breakdown.total);
        assert_eq!(breakdown.headline_amount(), 115.0);
    }

    #[test]
    fn test_calculate_request() {
        let req = BillRequest::new("40")
            .with_tip_preset(TipPreset::Twenty)
            .with_split(true)
            .with_people_preset(PeoplePreset::Four);
        assert_eq!(calculate_request(&req).unwrap().per_person, 12.0);

        let req = req.with_custom_people("0");
        assert_eq!(
            calculate_request(&req).unwrap_err(),
            CalcError::InvalidPeopleCount { count: 0 }
        );
    }
}
