//! End-to-end command tests: parse argv with clap, dispatch, capture stdout.

use std::io::Cursor;

use clap::Parser;
use tipcalc_cli_lib::cli::Cli;
use tipcalc_cli_lib::commands::dispatch;
use tipcalc_cli_lib::error::AppError;
use tipcalc_cli_lib::state::AppConfig;

fn run_with_input(args: &[&str], stdin: &str, config: &AppConfig) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut out = Vec::new();
    dispatch(
        cli.command.as_ref(),
        config,
        cli.config.clone(),
        Cursor::new(stdin.to_string()),
        &mut out,
    )?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn run(args: &[&str]) -> String {
    run_with_input(args, "", &AppConfig::default()).unwrap()
}

#[test]
fn calculate_not_split() {
    let out = run(&[
        "tipcalc", "calculate", "--bill", "100.00", "--tip", "15", "--split", "no",
    ]);
    assert_eq!(out, "Total: £115.00\n");
}

#[test]
fn calculate_custom_tip_split() {
    let out = run(&[
        "tipcalc",
        "calculate",
        "--bill",
        "90.00",
        "--custom-tip",
        "10",
        "--split",
        "yes",
        "--people",
        "3",
    ]);
    assert_eq!(out, "Total per person: £33.00\n");
}

#[test]
fn calculate_errors_are_lines() {
    assert_eq!(
        run(&["tipcalc", "calculate", "--bill", "-5.00", "--tip", "10", "--split", "no"]),
        "Error: Please enter a valid bill amount.\n"
    );
    assert_eq!(
        run(&["tipcalc", "calculate", "--bill", "50", "--split", "yes", "--people", "2"]),
        "Error: Please select or enter a tip percentage.\n"
    );
    assert_eq!(
        run(&["tipcalc", "calculate", "--bill", "50", "--tip", "10"]),
        "Error: Please choose whether to split the bill.\n"
    );
    assert_eq!(
        run(&[
            "tipcalc",
            "calculate",
            "--bill",
            "40.00",
            "--tip",
            "20",
            "--split",
            "yes",
            "--custom-people",
            "0",
        ]),
        "Error: Number of people must be greater than zero.\n"
    );
}

#[test]
fn calculate_json_error_shape() {
    let out = run(&[
        "tipcalc", "calculate", "--bill", "abc", "--tip", "10", "--split", "no", "--json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "INVALID_NUMBER");
    assert_eq!(json["error"]["field"], "bill_amount");
    assert_eq!(json["error"]["message"], "Please enter a valid bill amount.");
}

#[test]
fn no_subcommand_runs_form() {
    let out = run_with_input(
        &["tipcalc"],
        "bill 100\ntip 15\nsplit no\ncalculate\nquit\n",
        &AppConfig::default(),
    )
    .unwrap();

    assert!(out.starts_with("Tip Calculator."));
    assert!(out.contains("Total: £115.00\n"));
}

#[test]
fn config_init_then_refuse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path_arg = path.to_str().unwrap();
    let config = AppConfig::default();

    let out =
        run_with_input(&["tipcalc", "config", "init", "--config", path_arg], "", &config).unwrap();
    assert!(out.starts_with("Wrote "));
    assert!(path.exists());

    let err = run_with_input(&["tipcalc", "--config", path_arg, "config", "init"], "", &config)
        .unwrap_err();
    assert!(matches!(err, AppError::ConfigExists(_)));
    assert!(err.to_string().contains("--force"));
}
