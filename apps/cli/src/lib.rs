//! # Tip Calculator CLI Library
//!
//! Terminal front end for `tipcalc-core`: argument parsing, configuration,
//! the interactive form, and output formatting.
//!
//! ## Module Organization
//! ```text
//! tipcalc_cli_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── What the calculator form currently shows
//! │   └── config.rs   ◄─── Currency and display settings
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── calculate.rs◄─── One-shot calculation
//! │   ├── form.rs     ◄─── Interactive session
//! │   └── config.rs   ◄─── Config file commands
//! └── error.rs        ◄─── CLI error type and JSON error shape
//! ```
//!
//! stdout carries results only. Logs go to stderr so `--json` output stays
//! machine-readable.

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};
use error::AppResult;
use state::AppConfig;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,tipcalc_cli_lib=debug,tipcalc=debug,tipcalc_core=debug";

/// Runs the parsed command line.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • --config <path>: errors are fatal                                 │
/// │     • platform default: errors fall back to defaults with a warning     │
/// │                                                                         │
/// │  2. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • calculate / config / form (the default)                           │
/// │     • stdin for the form, locked stdout for every result                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(&cli)?;
    info!(
        symbol = %config.currency.symbol,
        code = %config.currency.code,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    commands::dispatch(
        cli.command.as_ref(),
        &config,
        cli.config.clone(),
        stdin.lock(),
        &mut out,
    )
}

fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    // `config init` and `config path` work even when the existing file is broken
    if matches!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Init { .. } | ConfigCommands::Path
        })
    ) {
        return Ok(AppConfig::load_or_default(cli.config.clone()));
    }

    match &cli.config {
        Some(path) => AppConfig::load(Some(path.clone())),
        None => Ok(AppConfig::load_or_default(None)),
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - Default: WARN
/// - `-v`: DEBUG for the tipcalc crates
/// - `RUST_LOG` overrides both
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
