//! # Calculate Command
//!
//! One request from command-line flags, one result on stdout.
//!
//! ```text
//! tipcalc calculate --bill 90 --custom-tip 10 --split yes --people 3
//! Total per person: £33.00
//!
//! tipcalc calculate --bill 90 --tip 10 --split yes --json
//! {"ok":false,"message":"Error: Please select or enter number of people.",
//!  "error":{"code":"MISSING_PEOPLE_SELECTION","message":"..."}}
//! ```
//!
//! Calculation errors are output, not failures: the exit code stays 0.

use std::io::Write;

use serde::Serialize;
use tipcalc_core::calculator::calculate_request;
use tipcalc_core::{report, BillBreakdown, BillRequest};
use tracing::debug;

use crate::cli::CalculateArgs;
use crate::error::{AppResult, ErrorResponse};
use crate::state::AppConfig;

/// JSON shape of a calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub ok: bool,

    /// The same line the text output prints.
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BillBreakdown>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl CalculationResponse {
    pub fn from_request(request: &BillRequest, symbol: &str) -> Self {
        let outcome = calculate_request(request);
        let message = report::render(&outcome, symbol);

        match outcome {
            Ok(breakdown) => CalculationResponse {
                ok: true,
                message,
                breakdown: Some(breakdown),
                error: None,
            },
            Err(err) => CalculationResponse {
                ok: false,
                message,
                breakdown: None,
                error: Some(ErrorResponse::from(&err)),
            },
        }
    }
}

/// Runs `tipcalc calculate`.
pub fn run<W: Write>(args: &CalculateArgs, config: &AppConfig, out: &mut W) -> AppResult<()> {
    let request = args.to_request();
    debug!(?request, "calculate command");

    let response = CalculationResponse::from_request(&request, config.currency_symbol());

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", response.message)?;
    if config.show_breakdown() {
        if let Some(breakdown) = &response.breakdown {
            for line in report::breakdown_lines(breakdown, config.currency_symbol()) {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::{PeoplePreset, SplitChoice, TipPreset};

    fn run_to_string(args: &CalculateArgs, config: &AppConfig) -> String {
        let mut out = Vec::new();
        run(args, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let args = CalculateArgs {
            bill: "100.00".to_string(),
            tip: Some(TipPreset::Fifteen),
            split: Some(SplitChoice::NotSplit),
            ..Default::default()
        };
        assert_eq!(run_to_string(&args, &AppConfig::default()), "Total: £115.00\n");
    }

    #[test]
    fn test_text_output_with_breakdown() {
        let args = CalculateArgs {
            bill: "90".to_string(),
            custom_tip: "10".to_string(),
            split: Some(SplitChoice::Split),
            people: Some(PeoplePreset::Three),
            ..Default::default()
        };
        let mut config = AppConfig::default();
        config.display.show_breakdown = true;

        assert_eq!(
            run_to_string(&args, &config),
            "Total per person: £33.00\nTip: £9.00\nBill total: £99.00\n"
        );
    }

    #[test]
    fn test_error_is_output_not_failure() {
        let args = CalculateArgs {
            bill: "40.00".to_string(),
            tip: Some(TipPreset::Twenty),
            split: Some(SplitChoice::Split),
            custom_people: "0".to_string(),
            ..Default::default()
        };
        let mut config = AppConfig::default();
        config.display.show_breakdown = true;

        assert_eq!(
            run_to_string(&args, &config),
            "Error: Number of people must be greater than zero.\n"
        );
    }

    #[test]
    fn test_json_output() {
        let args = CalculateArgs {
            bill: "50".to_string(),
            split: Some(SplitChoice::Split),
            people: Some(PeoplePreset::Two),
            json: true,
            ..Default::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&run_to_string(&args, &AppConfig::default())).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "Error: Please select or enter a tip percentage.");
        assert_eq!(json["error"]["code"], "MISSING_TIP_SELECTION");
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn test_json_success_has_breakdown() {
        let args = CalculateArgs {
            bill: "100".to_string(),
            tip: Some(TipPreset::Ten),
            split: Some(SplitChoice::NotSplit),
            json: true,
            ..Default::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&run_to_string(&args, &AppConfig::default())).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["breakdown"]["total"], 110.0);
        assert_eq!(json["breakdown"]["people"], 1);
    }
}
