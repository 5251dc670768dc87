//! # Commands Module
//!
//! One module per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (dispatch)
//! ├── calculate.rs  ◄─── One-shot calculation from flags
//! ├── form.rs       ◄─── Interactive form session
//! └── config.rs     ◄─── Show / create the config file
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  tipcalc calculate --bill 100 --tip 15 --split no                       │
//! │         │                                                               │
//! │         │ (clap parses into Cli / Commands)                             │
//! │         ▼                                                               │
//! │  dispatch(command, &AppConfig, ...)                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  calculate::run ──► BillRequest ──► tipcalc_core ──► "Total: £115.00"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command writes to a caller-supplied `Write`, so tests capture
//! output in a `Vec<u8>` instead of stdout.

pub mod calculate;
pub mod config;
pub mod form;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::Commands;
use crate::error::AppResult;
use crate::state::AppConfig;

/// Runs one command. `None` starts the interactive form.
pub fn dispatch<R: BufRead, W: Write>(
    command: Option<&Commands>,
    config: &AppConfig,
    config_path: Option<PathBuf>,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Some(Commands::Calculate(args)) => calculate::run(args, config, out),
        Some(Commands::Config { action }) => config::run(action, config, config_path, out),
        Some(Commands::Form) | None => form::run_session(input, out, config),
    }
}
