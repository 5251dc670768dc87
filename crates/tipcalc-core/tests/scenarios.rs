//! End-to-end result lines for the documented calculator scenarios.

use tipcalc_core::report::evaluate;
use tipcalc_core::types::{BillRequest, PeoplePreset, TipPreset};

const GBP: &str = "£";

#[test]
fn preset_tip_not_split() {
    let req = BillRequest::new("100.00")
        .with_tip_preset(TipPreset::Fifteen)
        .with_split(false);
    assert_eq!(evaluate(&req, GBP), "Total: £115.00");
}

#[test]
fn custom_tip_split_between_preset_people() {
    let req = BillRequest::new("90.00")
        .with_custom_tip("10")
        .with_split(true)
        .with_people_preset(PeoplePreset::Three);
    assert_eq!(evaluate(&req, GBP), "Total per person: £33.00");
}

#[test]
fn missing_tip() {
    let req = BillRequest::new("50.00")
        .with_split(true)
        .with_people_preset(PeoplePreset::Two);
    assert_eq!(
        evaluate(&req, GBP),
        "Error: Please select or enter a tip percentage."
    );
}

#[test]
fn negative_bill_rejected_before_calculation() {
    let req = BillRequest::new("-5.00")
        .with_tip_preset(TipPreset::Ten)
        .with_split(false);
    assert_eq!(evaluate(&req, GBP), "Error: Please enter a valid bill amount.");
}

#[test]
fn zero_custom_people() {
    let req = BillRequest::new("40.00")
        .with_tip_preset(TipPreset::Twenty)
        .with_split(true)
        .with_custom_people("0");
    assert_eq!(
        evaluate(&req, GBP),
        "Error: Number of people must be greater than zero."
    );
}

#[test]
fn missing_split_choice() {
    let req = BillRequest::new("40.00").with_tip_preset(TipPreset::Twenty);
    assert_eq!(
        evaluate(&req, GBP),
        "Error: Please choose whether to split the bill."
    );
}

#[test]
fn missing_people() {
    let req = BillRequest::new("40.00")
        .with_tip_preset(TipPreset::Twenty)
        .with_split(true);
    assert_eq!(
        evaluate(&req, GBP),
        "Error: Please select or enter number of people."
    );
}

#[test]
fn custom_tip_entered_after_preset_still_wins() {
    // The preset stays recorded; precedence alone decides.
    let req = BillRequest::new("100")
        .with_tip_preset(TipPreset::Twenty)
        .with_custom_tip("12.5")
        .with_split(false);
    assert_eq!(evaluate(&req, GBP), "Total: £112.50");
}

#[test]
fn other_currency_symbol() {
    let req = BillRequest::new("100.00")
        .with_tip_preset(TipPreset::Fifteen)
        .with_split(false);
    assert_eq!(evaluate(&req, "$"), "Total: $115.00");
}

#[test]
fn very_large_bill_prints_true_total() {
    let req = BillRequest::new("1e17")
        .with_tip_preset(TipPreset::Fifteen)
        .with_split(false);
    assert_eq!(evaluate(&req, GBP), "Total: £115000000000000000.00");
}

#[test]
fn very_large_bill_split() {
    let req = BillRequest::new("1e17")
        .with_tip_preset(TipPreset::Ten)
        .with_split(true)
        .with_people_preset(PeoplePreset::Four);
    assert_eq!(evaluate(&req, GBP), "Total per person: £27500000000000000.00");
}

#[test]
fn huge_finite_bill_is_not_clamped() {
    let req = BillRequest::new("1e300")
        .with_tip_preset(TipPreset::Twenty)
        .with_split(false);
    let line = evaluate(&req, GBP);
    assert!(line.starts_with("Total: £12"), "{line}");
    assert!(line.ends_with(".00"), "{line}");
}

#[test]
fn bill_whose_total_overflows_is_rejected() {
    let req = BillRequest::new("1.7e308")
        .with_tip_preset(TipPreset::Twenty)
        .with_split(false);
    assert_eq!(evaluate(&req, GBP), "Error: Please enter a valid bill amount.");
}
