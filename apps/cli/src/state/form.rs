//! # Form State
//!
//! The selections currently on screen, owned exclusively by the front end.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  User Action              Method                  State Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Type bill ──────────────► set_bill() ──────────► bill_text = t         │
//! │                                                                         │
//! │  Click 15% ──────────────► select_tip_preset() ─► preset, custom = ""  │
//! │                                                                         │
//! │  Type custom tip ────────► enter_custom_tip() ──► custom, preset = None │
//! │                                                                         │
//! │  Click Yes / No ─────────► choose_split() ──────► split, people reset   │
//! │                                                                         │
//! │  Click 3 / type count ───► select_people_preset / enter_custom_people   │
//! │                            (only while split = yes)                     │
//! │                                                                         │
//! │  Click Calculate ────────► calculate() ─────────► result_line           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clearing the competing input keeps the highlights honest. The core
//! applies custom-over-preset precedence on its own, so correctness of the
//! result never depends on the order of these calls.

use tipcalc_core::calculator::calculate_request;
use tipcalc_core::report;
use tipcalc_core::{BillBreakdown, BillRequest, PeoplePreset, SplitChoice, TipPreset};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Everything the calculator window shows.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    bill_text: String,
    tip_preset: Option<TipPreset>,
    custom_tip: String,
    split: SplitChoice,
    people_preset: Option<PeoplePreset>,
    custom_people: String,

    /// Last rendered result or error line.
    result_line: String,

    /// Breakdown behind `result_line`, when it was a success.
    last_breakdown: Option<BillBreakdown>,
}

impl FormState {
    /// Creates an empty form whose result line uses `symbol`.
    pub fn new(symbol: &str) -> Self {
        FormState {
            bill_text: String::new(),
            tip_preset: None,
            custom_tip: String::new(),
            split: SplitChoice::Undecided,
            people_preset: None,
            custom_people: String::new(),
            result_line: report::initial_line(symbol),
            last_breakdown: None,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn set_bill(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
        debug!(bill = %self.bill_text, "Bill amount entered");
    }

    /// Highlights a tip button and empties the custom tip entry.
    pub fn select_tip_preset(&mut self, preset: TipPreset) {
        self.tip_preset = Some(preset);
        self.custom_tip.clear();
        debug!(%preset, "Tip preset selected");
    }

    /// Records custom tip text and drops the tip highlight.
    pub fn enter_custom_tip(&mut self, text: impl Into<String>) {
        self.custom_tip = text.into();
        self.tip_preset = None;
        debug!(custom_tip = %self.custom_tip, "Custom tip entered");
    }

    /// Answers "Split bill?". Any previous people choice is discarded.
    pub fn choose_split(&mut self, split: bool) {
        self.split = SplitChoice::from(split);
        self.people_preset = None;
        self.custom_people.clear();
        debug!(split, "Split choice made");
    }

    /// Highlights a people button and empties the custom people entry.
    ///
    /// ## Errors
    /// [`AppError::PeopleOptionsHidden`] unless split = yes.
    pub fn select_people_preset(&mut self, preset: PeoplePreset) -> AppResult<()> {
        self.ensure_people_visible()?;
        self.people_preset = Some(preset);
        self.custom_people.clear();
        debug!(%preset, "People preset selected");
        Ok(())
    }

    /// Records custom people text and drops the people highlight.
    ///
    /// ## Errors
    /// [`AppError::PeopleOptionsHidden`] unless split = yes.
    pub fn enter_custom_people(&mut self, text: impl Into<String>) -> AppResult<()> {
        self.ensure_people_visible()?;
        self.custom_people = text.into();
        self.people_preset = None;
        debug!(custom_people = %self.custom_people, "Custom people entered");
        Ok(())
    }

    /// Runs the calculation and stores the line to display.
    pub fn calculate(&mut self, symbol: &str) -> &str {
        let request = self.to_request();
        let outcome = calculate_request(&request);

        match &outcome {
            Ok(breakdown) => debug!(?breakdown, "Calculation succeeded"),
            Err(err) => debug!(%err, "Calculation rejected"),
        }

        self.result_line = report::render(&outcome, symbol);
        self.last_breakdown = outcome.ok();
        &self.result_line
    }

    /// Back to a blank form.
    pub fn reset(&mut self, symbol: &str) {
        *self = FormState::new(symbol);
        debug!("Form reset");
    }

    // =========================================================================
    // Derived View State
    // =========================================================================

    /// Snapshot of the raw selections for the core.
    pub fn to_request(&self) -> BillRequest {
        BillRequest {
            bill_text: self.bill_text.clone(),
            tip_preset: self.tip_preset,
            custom_tip: self.custom_tip.clone(),
            split: self.split,
            people_preset: if self.people_options_visible() {
                self.people_preset
            } else {
                None
            },
            custom_people: if self.people_options_visible() {
                self.custom_people.clone()
            } else {
                String::new()
            },
        }
    }

    /// The tip button drawn as selected.
    pub fn highlighted_tip(&self) -> Option<TipPreset> {
        self.to_request().tip_selection().preset()
    }

    /// The split button drawn as selected.
    pub fn highlighted_split(&self) -> Option<bool> {
        self.split.as_bool()
    }

    /// The people button drawn as selected, if the section is visible.
    pub fn highlighted_people(&self) -> Option<PeoplePreset> {
        self.to_request().people_selection().preset()
    }

    /// Whether the number-of-people section is shown.
    pub fn people_options_visible(&self) -> bool {
        self.split == SplitChoice::Split
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    pub fn custom_tip(&self) -> &str {
        &self.custom_tip
    }

    pub fn custom_people(&self) -> &str {
        &self.custom_people
    }

    pub fn result_line(&self) -> &str {
        &self.result_line
    }

    pub fn last_breakdown(&self) -> Option<&BillBreakdown> {
        self.last_breakdown.as_ref()
    }

    fn ensure_people_visible(&self) -> AppResult<()> {
        if self.people_options_visible() {
            Ok(())
        } else {
            warn!(split = %self.split, "People chosen while people options are hidden");
            Err(AppError::PeopleOptionsHidden)
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new(tipcalc_core::DEFAULT_CURRENCY_SYMBOL)
    }
}
