//! # Money Module
//!
//! Provides the `Money` type used to present calculated amounts.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CALCULATION (f64, unrounded)          PRESENTATION (Money, pence)      │
//! │                                                                         │
//! │  bill 90.00 ──┐                                                         │
//! │  tip  10%   ──┼─► 99.0 / 3 = 33.0 ──► Money::from_amount ──► "£33.00"   │
//! │  people 3   ──┘                       (half-up, once)                   │
//! │                                                                         │
//! │  Rounding intermediate values would drift: round(tip) + round(bill)    │
//! │  can differ from round(bill + tip) by a penny.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::money::Money;
//!
//! let share = Money::from_amount(33.0);
//! assert_eq!(share.cents(), 3300);
//! assert_eq!(share.format_with("£"), "£33.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DEFAULT_CURRENCY_SYMBOL;

/// Minor units (pence) per major unit (pound).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Scaled amounts are snapped to this many steps per minor unit before the
/// half-up decision, so `2.675` (stored as 2.67499999...) rounds to 268.
const SNAP_STEPS_PER_MINOR: f64 = 1_000_000.0;

/// From this many major units on, `f64` no longer holds every whole penny.
const EXACT_PENCE_LIMIT: f64 = (1u64 << 53) as f64 / MINOR_UNITS_PER_MAJOR as f64;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence for GBP).
///
/// ## Design Decisions
/// - **i64 (signed)**: Formatting must not panic on odd input, even though
///   resolved amounts are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an unrounded amount in major units using half-up rounding.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(115.0).cents(), 11500);
    /// assert_eq!(Money::from_amount(33.333333).cents(), 3333);
    /// assert_eq!(Money::from_amount(0.125).cents(), 13);  // half goes up
    /// assert_eq!(Money::from_amount(2.675).cents(), 268); // decimal half
    /// ```
    ///
    /// Non-finite input maps to zero; out-of-range amounts saturate. Use
    /// [`Money::try_from_amount`] when the amount may be that large.
    pub fn from_amount(amount: f64) -> Self {
        let scaled = amount * MINOR_UNITS_PER_MAJOR as f64;
        let snapped = (scaled * SNAP_STEPS_PER_MINOR).round() / SNAP_STEPS_PER_MINOR;
        Money((snapped + 0.5).floor() as i64)
    }

    /// Like [`Money::from_amount`], but `None` when the amount is not finite
    /// or too large for its pence to be represented exactly.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_amount(12.5).map(|m| m.cents()), Some(1250));
    /// assert_eq!(Money::try_from_amount(1e17), None);
    /// assert_eq!(Money::try_from_amount(f64::NAN), None);
    /// ```
    pub fn try_from_amount(amount: f64) -> Option<Self> {
        if amount.is_finite() && amount.abs() < EXACT_PENCE_LIMIT {
            Some(Money::from_amount(amount))
        } else {
            None
        }
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats as `<sign><symbol><major>.<minor:02>`.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(11500).format_with("£"), "£115.00");
    /// assert_eq!(Money::from_cents(-550).format_with("$"), "-$5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.major().abs(),
            self.minor_part()
        )
    }
}

/// Formats an unrounded amount to two decimal places with half-up rounding.
///
/// Amounts beyond the range of [`Money`] are rounded from the `f64` itself.
/// Their fractional part is a multiple of 1/64 at most, so the split into
/// whole units and pence below is exact.
///
/// ## Example
/// ```rust
/// use tipcalc_core::money::format_amount;
///
/// assert_eq!(format_amount(2.675, "£"), "£2.68");
/// assert_eq!(format_amount(1.15e17, "£"), "£115000000000000000.00");
/// ```
pub fn format_amount(amount: f64, symbol: &str) -> String {
    match Money::try_from_amount(amount) {
        Some(money) => money.format_with(symbol),
        None if !amount.is_finite() => format!("{}{}", symbol, amount),
        None => {
            let sign = if amount.is_sign_negative() { "-" } else { "" };
            let magnitude = amount.abs();
            let whole = magnitude.trunc();
            // at most 63/64 of a unit, so this never carries into `whole`
            let pence = ((magnitude - whole) * MINOR_UNITS_PER_MAJOR as f64 + 0.5).floor();
            format!("{}{}{:.0}.{:02}", sign, symbol, whole, pence as i64)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default currency symbol. Front ends with a configured
/// symbol call [`Money::format_with`] instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
