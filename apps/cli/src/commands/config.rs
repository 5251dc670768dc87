//! # Config Commands
//!
//! `tipcalc config show | init | path`.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::ConfigCommands;
use crate::error::{AppError, AppResult};
use crate::state::AppConfig;

/// Runs a `config` subcommand.
///
/// `config` is the effective configuration (file, environment, defaults)
/// and `path` the explicit `--config` value, if any.
pub fn run<W: Write>(
    action: &ConfigCommands,
    config: &AppConfig,
    path: Option<PathBuf>,
    out: &mut W,
) -> AppResult<()> {
    match action {
        ConfigCommands::Show => show(config, out),
        ConfigCommands::Init { force } => init(path, *force, out),
        ConfigCommands::Path => {
            let path = resolve_path(path)?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
    }
}

/// Prints the effective configuration as TOML.
pub fn show<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<()> {
    debug!("config show command");
    write!(out, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}

/// Writes the default configuration, refusing to overwrite unless forced.
pub fn init<W: Write>(path: Option<PathBuf>, force: bool, out: &mut W) -> AppResult<()> {
    let path = resolve_path(path)?;

    if path.exists() && !force {
        return Err(AppError::ConfigExists(path));
    }

    let written = AppConfig::default().save(Some(path))?;
    info!(path = ?written, "Default config written");
    writeln!(out, "Wrote {}", written.display())?;
    Ok(())
}

fn resolve_path(path: Option<PathBuf>) -> AppResult<PathBuf> {
    path.or_else(AppConfig::default_config_path)
        .ok_or(AppError::NoConfigPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_prints_toml() {
        let mut out = Vec::new();
        show(&AppConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[currency]"));
        assert!(text.contains("show_breakdown = false"));
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tipcalc").join("config.toml");
        let mut out = Vec::new();

        init(Some(path.clone()), false, &mut out).unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap(), AppConfig::default());

        let err = init(Some(path.clone()), false, &mut out).unwrap_err();
        assert!(matches!(err, AppError::ConfigExists(p) if p == path));

        std::fs::write(&path, "[display]\nshow_breakdown = true\n").unwrap();
        init(Some(path.clone()), true, &mut out).unwrap();
        assert!(!AppConfig::from_file(&path).unwrap().show_breakdown());
    }

    #[test]
    fn test_path_prints_explicit_path() {
        let mut out = Vec::new();
        run(
            &ConfigCommands::Path,
            &AppConfig::default(),
            Some(PathBuf::from("/tmp/tipcalc.toml")),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/tmp/tipcalc.toml\n");
    }
}
