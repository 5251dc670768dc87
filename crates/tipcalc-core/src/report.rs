//! # Result Lines
//!
//! The exact strings a front end displays after "Calculate".
//!
//! ```text
//! split      ──► "Total per person: £33.00"
//! not split  ──► "Total: £115.00"
//! any error  ──► "Error: Please select or enter a tip percentage."
//! ```
//!
//! [`evaluate`] is the request boundary: every [`CalcError`] stops here and
//! becomes an error line. Nothing is partially shown.

use crate::calculator;
use crate::error::{CalcError, CalcResult};
use crate::money::{format_amount, Money};
use crate::types::{BillBreakdown, BillRequest};

/// Line shown before the first calculation.
pub fn initial_line(symbol: &str) -> String {
    format!("Total per person: {}", Money::zero().format_with(symbol))
}

/// Formats a successful calculation.
pub fn render_success(breakdown: &BillBreakdown, symbol: &str) -> String {
    let amount = format_amount(breakdown.headline_amount(), symbol);
    if breakdown.split {
        format!("Total per person: {amount}")
    } else {
        format!("Total: {amount}")
    }
}

/// Formats a failure.
pub fn render_error(err: &CalcError) -> String {
    format!("Error: {err}")
}

/// Formats either outcome.
pub fn render(outcome: &CalcResult<BillBreakdown>, symbol: &str) -> String {
    match outcome {
        Ok(breakdown) => render_success(breakdown, symbol),
        Err(err) => render_error(err),
    }
}

/// Resolves, calculates and renders a request. Never fails.
///
/// ## Example
/// ```rust
/// use tipcalc_core::report::evaluate;
/// use tipcalc_core::types::{BillRequest, TipPreset};
///
/// let req = BillRequest::new("100.00")
///     .with_tip_preset(TipPreset::Fifteen)
///     .with_split(false);
/// assert_eq!(evaluate(&req, "£"), "Total: £115.00");
/// ```
pub fn evaluate(request: &BillRequest, symbol: &str) -> String {
    render(&calculator::calculate_request(request), symbol)
}

/// Extra detail lines (tip and tip-inclusive total) for a success.
pub fn breakdown_lines(breakdown: &BillBreakdown, symbol: &str) -> Vec<String> {
    vec![
        format!("Tip: {}", format_amount(breakdown.tip_amount, symbol)),
        format!("Bill total: {}", format_amount(breakdown.total, symbol)),
    ]
}
