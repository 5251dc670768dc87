use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tipcalc_core::{BillRequest, PeoplePreset, SplitChoice, TipPreset};

/// Tip Calculator - split a restaurant bill including tip
#[derive(Debug, Parser)]
#[command(name = "tipcalc")]
#[command(about = "Work out each person's share of a bill including tip")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to the interactive form when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate a single bill and print the result line
    Calculate(CalculateArgs),
    /// Fill in the calculator form interactively
    Form,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path that would be used
    Path,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CalculateArgs {
    /// Bill amount, e.g. 90.00
    #[arg(short, long, allow_hyphen_values = true, default_value = "")]
    pub bill: String,

    /// Tip preset: 10, 15 or 20
    #[arg(short, long)]
    pub tip: Option<TipPreset>,

    /// Custom tip percentage (overrides --tip)
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    pub custom_tip: String,

    /// Split the bill: yes or no
    #[arg(short, long)]
    pub split: Option<SplitChoice>,

    /// People preset when splitting: 2, 3 or 4
    #[arg(short, long)]
    pub people: Option<PeoplePreset>,

    /// Custom number of people (overrides --people)
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    pub custom_people: String,

    /// Print a JSON object instead of the result line
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    /// The raw request these flags describe.
    pub fn to_request(&self) -> BillRequest {
        BillRequest {
            bill_text: self.bill.clone(),
            tip_preset: self.tip,
            custom_tip: self.custom_tip.clone(),
            split: self.split.unwrap_or_default(),
            people_preset: self.people,
            custom_people: self.custom_people.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "tipcalc", "calculate", "--bill", "-5.00", "--tip", "15%", "--split", "no",
        ])
        .unwrap();

        let Some(Commands::Calculate(args)) = cli.command else {
            panic!("expected calculate");
        };
        let req = args.to_request();
        assert_eq!(req.bill_text, "-5.00");
        assert_eq!(req.tip_preset, Some(TipPreset::Fifteen));
        assert_eq!(req.split, SplitChoice::NotSplit);
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Cli::try_parse_from(["tipcalc", "calculate", "--tip", "12"]).is_err());
        assert!(Cli::try_parse_from(["tipcalc", "calculate", "--people", "5"]).is_err());
    }

    #[test]
    fn test_split_defaults_to_undecided() {
        let cli = Cli::try_parse_from(["tipcalc", "calculate", "--bill", "10"]).unwrap();
        let Some(Commands::Calculate(args)) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.to_request().split, SplitChoice::Undecided);
    }

    #[test]
    fn test_global_flags_and_default_command() {
        let cli = Cli::try_parse_from(["tipcalc", "-v", "--config", "/tmp/t.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
        assert!(cli.command.is_none());
    }
}
