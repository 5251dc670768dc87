//! # tipcalc-core: Pure Bill-Splitting Logic
//!
//! This crate holds every rule of the tip calculator as pure functions with
//! zero I/O dependencies. Front ends own the selections; this crate only
//! turns them into a number or a reason.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tip Calculator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tipcalc-cli (front end)                      │   │
//! │  │    FormState: bill text, presets, custom entries, result line   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillRequest                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  resolver  │  │calculator │  │  report   │  │   │
//! │  │   │ Selection │─►│ precedence │─►│ tip, per  │─►│ "Total:   │  │   │
//! │  │   │ Request   │  │ validation │  │  person   │  │  £115.00" │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO UI STATE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Presets, selections, requests and breakdowns
//! - [`resolver`] - Raw selections → validated scalars
//! - [`calculator`] - Tip and per-person arithmetic
//! - [`money`] - Pence-based Money with half-up rounding for display
//! - [`report`] - Result and error lines
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tipcalc_core::report::evaluate;
//! use tipcalc_core::types::{BillRequest, PeoplePreset};
//!
//! let req = BillRequest::new("90.00")
//!     .with_custom_tip("10")
//!     .with_split(true)
//!     .with_people_preset(PeoplePreset::Three);
//!
//! assert_eq!(evaluate(&req, "£"), "Total per person: £33.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod report;
pub mod resolver;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CalcError, CalcResult, NumericField};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used when a front end does not configure one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// ISO 4217 code matching [`DEFAULT_CURRENCY_SYMBOL`].
pub const DEFAULT_CURRENCY_CODE: &str = "GBP";

/// People count used when the bill is not split.
pub const NOT_SPLIT_PEOPLE_COUNT: i64 = 1;
