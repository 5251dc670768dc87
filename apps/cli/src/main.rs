//! # Tip Calculator Entry Point
//!
//! ```text
//! tipcalc                         interactive form
//! tipcalc calculate --bill ...    one result line
//! tipcalc config show|init|path   configuration file
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use clap::Parser;
use tipcalc_cli_lib::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tipcalc_cli_lib::init_tracing(cli.verbose);
    tipcalc_cli_lib::run(cli)?;
    Ok(())
}
