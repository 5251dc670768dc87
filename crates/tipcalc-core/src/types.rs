//! # Domain Types
//!
//! Core domain types for a single bill-splitting calculation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Raw input (owned by the UI)        Resolved (owned by one calculation) │
//! │  ────────────────────────────        ─────────────────────────────────  │
//! │  ┌─────────────────┐                 ┌─────────────────┐                │
//! │  │  BillRequest    │ ── resolve() ──►│ ResolvedInputs  │                │
//! │  │  bill_text      │                 │  bill_amount    │                │
//! │  │  tip_preset     │                 │  tip_percentage │                │
//! │  │  custom_tip     │                 │  split          │                │
//! │  │  split          │                 │  people         │                │
//! │  │  people_preset  │                 └────────┬────────┘                │
//! │  │  custom_people  │                          │ calculate()             │
//! │  └─────────────────┘                          ▼                         │
//! │                                      ┌─────────────────┐                │
//! │  TipPreset    10 │ 15 │ 20           │  BillBreakdown  │                │
//! │  PeoplePreset  2 │  3 │  4           │  tip_amount     │                │
//! │  SplitChoice  Undecided│Split│No     │  total          │                │
//! │  Selection<P> Unset│Preset│Custom    │  per_person     │                │
//! │                                      └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here has identity beyond one calculation. Every request is
//! rebuilt from the UI's raw selections each time "Calculate" is pressed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Preset Parse Error
// =============================================================================

/// Returned when text or a number does not name one of the fixed presets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} preset '{input}'. Valid options: {expected}")]
pub struct ParsePresetError {
    kind: &'static str,
    input: String,
    expected: &'static str,
}

// =============================================================================
// Tip Preset
// =============================================================================

/// One of the fixed tip percentage buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TipPreset {
    /// 10%
    Ten,
    /// 15%
    Fifteen,
    /// 20%
    Twenty,
}

impl TipPreset {
    /// All presets, in the order they are shown.
    pub const ALL: [TipPreset; 3] = [TipPreset::Ten, TipPreset::Fifteen, TipPreset::Twenty];

    /// The preset's percentage as a whole number.
    pub const fn percent(&self) -> u32 {
        match self {
            TipPreset::Ten => 10,
            TipPreset::Fifteen => 15,
            TipPreset::Twenty => 20,
        }
    }

    /// The preset's percentage as used by the calculator.
    pub fn percentage(&self) -> f64 {
        f64::from(self.percent())
    }
}

impl fmt::Display for TipPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl TryFrom<u32> for TipPreset {
    type Error = ParsePresetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        TipPreset::ALL
            .into_iter()
            .find(|p| p.percent() == value)
            .ok_or_else(|| ParsePresetError {
                kind: "tip",
                input: value.to_string(),
                expected: "10, 15, 20",
            })
    }
}

impl From<TipPreset> for u32 {
    fn from(preset: TipPreset) -> Self {
        preset.percent()
    }
}

/// Accepts `"15"` and `"15%"`.
impl FromStr for TipPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        digits
            .parse::<u32>()
            .ok()
            .and_then(|n| TipPreset::try_from(n).ok())
            .ok_or_else(|| ParsePresetError {
                kind: "tip",
                input: s.to_string(),
                expected: "10, 15, 20",
            })
    }
}

// =============================================================================
// People Preset
// =============================================================================

/// One of the fixed number-of-people buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PeoplePreset {
    Two,
    Three,
    Four,
}

impl PeoplePreset {
    /// All presets, in the order they are shown.
    pub const ALL: [PeoplePreset; 3] = [PeoplePreset::Two, PeoplePreset::Three, PeoplePreset::Four];

    /// Number of people this preset stands for.
    pub const fn count(&self) -> u32 {
        match self {
            PeoplePreset::Two => 2,
            PeoplePreset::Three => 3,
            PeoplePreset::Four => 4,
        }
    }
}

impl fmt::Display for PeoplePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl TryFrom<u32> for PeoplePreset {
    type Error = ParsePresetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PeoplePreset::ALL
            .into_iter()
            .find(|p| p.count() == value)
            .ok_or_else(|| ParsePresetError {
                kind: "people",
                input: value.to_string(),
                expected: "2, 3, 4",
            })
    }
}

impl From<PeoplePreset> for u32 {
    fn from(preset: PeoplePreset) -> Self {
        preset.count()
    }
}

impl FromStr for PeoplePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(|n| PeoplePreset::try_from(n).ok())
            .ok_or_else(|| ParsePresetError {
                kind: "people",
                input: s.to_string(),
                expected: "2, 3, 4",
            })
    }
}

// =============================================================================
// Split Choice
// =============================================================================

/// Answer to "Split bill?".
///
/// ## States
/// ```text
///              choose yes              choose no
///  Undecided ─────────────► Split ◄──────────────► NotSplit
///  (initial)                        (either way)
/// ```
/// `Undecided` is never left by the core; only the UI moves between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitChoice {
    /// The user has not answered yet.
    #[default]
    Undecided,

    /// Divide the total between several people.
    Split,

    /// One payer; the total is not divided.
    NotSplit,
}

impl SplitChoice {
    /// `Some(true)` for split, `Some(false)` for not split, `None` if undecided.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            SplitChoice::Undecided => None,
            SplitChoice::Split => Some(true),
            SplitChoice::NotSplit => Some(false),
        }
    }
}

impl From<bool> for SplitChoice {
    fn from(split: bool) -> Self {
        if split {
            SplitChoice::Split
        } else {
            SplitChoice::NotSplit
        }
    }
}

impl From<Option<bool>> for SplitChoice {
    fn from(split: Option<bool>) -> Self {
        split.map_or(SplitChoice::Undecided, SplitChoice::from)
    }
}

impl fmt::Display for SplitChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitChoice::Undecided => write!(f, "undecided"),
            SplitChoice::Split => write!(f, "yes"),
            SplitChoice::NotSplit => write!(f, "no"),
        }
    }
}

impl FromStr for SplitChoice {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "split" => Ok(SplitChoice::Split),
            "no" | "n" | "false" => Ok(SplitChoice::NotSplit),
            _ => Err(ParsePresetError {
                kind: "split",
                input: s.to_string(),
                expected: "yes, no",
            }),
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A choice between a fixed preset and a free-text override.
///
/// Built from the two raw UI inputs with [`Selection::from_inputs`], which is
/// where the precedence rule lives: non-blank custom text always wins, no
/// matter which input the user touched last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection<P> {
    /// Nothing chosen.
    Unset,

    /// A preset button is selected.
    Preset(P),

    /// Custom text, trimmed and known to be non-empty.
    Custom(String),
}

/// Tip percentage selection.
pub type TipSelection = Selection<TipPreset>;

/// Number-of-people selection.
pub type PeopleSelection = Selection<PeoplePreset>;

impl<P: Copy> Selection<P> {
    /// Applies custom-over-preset precedence to the raw inputs.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::types::{Selection, TipPreset};
    ///
    /// let sel = Selection::from_inputs("12.5", Some(TipPreset::Twenty));
    /// assert_eq!(sel, Selection::Custom("12.5".to_string()));
    ///
    /// let sel = Selection::from_inputs("   ", Some(TipPreset::Twenty));
    /// assert_eq!(sel, Selection::Preset(TipPreset::Twenty));
    /// ```
    pub fn from_inputs(custom_text: &str, preset: Option<P>) -> Self {
        let custom = custom_text.trim();
        if !custom.is_empty() {
            Selection::Custom(custom.to_string())
        } else if let Some(preset) = preset {
            Selection::Preset(preset)
        } else {
            Selection::Unset
        }
    }

    /// The effective preset, if the preset is what will be used.
    pub fn preset(&self) -> Option<P> {
        match self {
            Selection::Preset(p) => Some(*p),
            _ => None,
        }
    }
}

impl<P> Default for Selection<P> {
    fn default() -> Self {
        Selection::Unset
    }
}

// =============================================================================
// Bill Request
// =============================================================================

/// Everything the UI hands over when "Calculate" is pressed.
///
/// Fields are raw: the bill and custom entries are unparsed text, and a
/// preset may coexist with custom text. [`crate::resolver::resolve`] reduces
/// this to [`ResolvedInputs`] or a [`crate::CalcError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillRequest {
    /// Bill amount entry.
    pub bill_text: String,

    /// Highlighted tip button, if any.
    pub tip_preset: Option<TipPreset>,

    /// Custom tip entry (percent).
    pub custom_tip: String,

    /// Answer to "Split bill?".
    pub split: SplitChoice,

    /// Highlighted people button, if any.
    pub people_preset: Option<PeoplePreset>,

    /// Custom number-of-people entry.
    pub custom_people: String,
}

impl BillRequest {
    /// Starts a request for the given bill text with nothing else chosen.
    pub fn new(bill_text: impl Into<String>) -> Self {
        BillRequest {
            bill_text: bill_text.into(),
            ..Default::default()
        }
    }

    pub fn with_tip_preset(mut self, preset: TipPreset) -> Self {
        self.tip_preset = Some(preset);
        self
    }

    pub fn with_custom_tip(mut self, text: impl Into<String>) -> Self {
        self.custom_tip = text.into();
        self
    }

    pub fn with_split(mut self, split: impl Into<SplitChoice>) -> Self {
        self.split = split.into();
        self
    }

    pub fn with_people_preset(mut self, preset: PeoplePreset) -> Self {
        self.people_preset = Some(preset);
        self
    }

    pub fn with_custom_people(mut self, text: impl Into<String>) -> Self {
        self.custom_people = text.into();
        self
    }

    /// The tip selection after precedence is applied.
    pub fn tip_selection(&self) -> TipSelection {
        Selection::from_inputs(&self.custom_tip, self.tip_preset)
    }

    /// The people selection after precedence is applied.
    pub fn people_selection(&self) -> PeopleSelection {
        Selection::from_inputs(&self.custom_people, self.people_preset)
    }
}

// =============================================================================
// Resolved Inputs
// =============================================================================

/// The three authoritative scalars (plus the split flag) a calculation needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    /// Non-negative bill amount in major currency units.
    pub bill_amount: f64,

    /// Non-negative tip percentage (15.0 = 15%).
    pub tip_percentage: f64,

    /// Whether the total is divided.
    pub split: bool,

    /// Number of payers; 1 when not split.
    pub people: i64,
}

// =============================================================================
// Bill Breakdown
// =============================================================================

/// Result of a successful calculation. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub tip_amount: f64,

    /// Bill plus tip.
    pub total: f64,

    pub people: i64,

    /// `total / people`; equals `total` when not split.
    pub per_person: f64,

    pub split: bool,
}

impl BillBreakdown {
    /// The amount shown on the result line.
    pub fn headline_amount(&self) -> f64 {
        if self.split {
            self.per_person
        } else {
            self.total
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_preset_parsing() {
        assert_eq!("10".parse::<TipPreset>().unwrap(), TipPreset::Ten);
        assert_eq!("15%".parse::<TipPreset>().unwrap(), TipPreset::Fifteen);
        assert_eq!(" 20 % ".parse::<TipPreset>().unwrap(), TipPreset::Twenty);
        assert!("12".parse::<TipPreset>().is_err());
        assert!("abc".parse::<TipPreset>().is_err());
    }

    #[test]
    fn test_people_preset_parsing() {
        assert_eq!("2".parse::<PeoplePreset>().unwrap(), PeoplePreset::Two);
        assert_eq!("4".parse::<PeoplePreset>().unwrap(), PeoplePreset::Four);
        assert!("5".parse::<PeoplePreset>().is_err());
        assert!("".parse::<PeoplePreset>().is_err());
    }

    #[test]
    fn test_split_choice_parsing() {
        assert_eq!("yes".parse::<SplitChoice>().unwrap(), SplitChoice::Split);
        assert_eq!("No".parse::<SplitChoice>().unwrap(), SplitChoice::NotSplit);
        assert!("maybe".parse::<SplitChoice>().is_err());
        assert_eq!(SplitChoice::default(), SplitChoice::Undecided);
        assert_eq!(SplitChoice::from(None), SplitChoice::Undecided);
        assert_eq!(SplitChoice::from(Some(true)).as_bool(), Some(true));
    }

    #[test]
    fn test_selection_precedence() {
        let sel: TipSelection = Selection::from_inputs("", None);
        assert_eq!(sel, Selection::Unset);
        assert_eq!(sel.preset(), None);

        let sel = Selection::from_inputs("", Some(TipPreset::Fifteen));
        assert_eq!(sel.preset(), Some(TipPreset::Fifteen));

        // Custom wins even though a preset is still recorded.
        let sel = Selection::from_inputs(" 7 ", Some(TipPreset::Fifteen));
        assert_eq!(sel, Selection::Custom("7".to_string()));
        assert_eq!(sel.preset(), None);
    }

    #[test]
    fn test_request_builders() {
        let req = BillRequest::new("90.00")
            .with_custom_tip("10")
            .with_tip_preset(TipPreset::Twenty)
            .with_split(true)
            .with_people_preset(PeoplePreset::Three);

        assert_eq!(req.tip_selection(), Selection::Custom("10".to_string()));
        assert_eq!(req.people_selection(), Selection::Preset(PeoplePreset::Three));
        assert_eq!(req.split, SplitChoice::Split);
    }

    #[test]
    fn test_request_json_uses_preset_values() {
        let req = BillRequest::new("50")
            .with_tip_preset(TipPreset::Fifteen)
            .with_split(false);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tip_preset"], 15);
        assert_eq!(json["split"], "not_split");

        let back: BillRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);

        let bad = serde_json::json!({ "tip_preset": 12 });
        assert!(serde_json::from_value::<BillRequest>(bad).is_err());
    }
}
