//! # Configuration State
//!
//! Display settings for the calculator, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TIPCALC_CURRENCY_SYMBOL=$                                          │
//! │     TIPCALC_CURRENCY_CODE=USD                                          │
//! │     TIPCALC_SHOW_BREAKDOWN=true                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/tipcalc/config.toml (Linux)                              │
//! │     ~/Library/Application Support/com.tipcalc.tipcalc/config.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     £ / GBP, no breakdown                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! symbol = "£"
//! code = "GBP"
//!
//! [display]
//! show_breakdown = false
//! ```
//!
//! Read-only after load; nothing mutates it during a session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tipcalc_core::{DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Longest currency symbol accepted (e.g. "CHF ").
const MAX_SYMBOL_CHARS: usize = 8;

const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Currency Settings
// =============================================================================

/// How amounts are labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// Symbol printed before every amount.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// ISO 4217 code (informational).
    #[serde(default = "default_code")]
    pub code: String,
}

fn default_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: default_symbol(),
            code: default_code(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Print tip and bill-total lines under a successful result.
    #[serde(default)]
    pub show_breakdown: bool,
}

// =============================================================================
// App Config
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes configuration as TOML and returns the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> AppResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(AppError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let symbol_len = self.currency.symbol.chars().count();
        if symbol_len == 0 || symbol_len > MAX_SYMBOL_CHARS {
            return Err(AppError::InvalidConfig(format!(
                "currency symbol must be 1 to {} characters, got '{}'",
                MAX_SYMBOL_CHARS, self.currency.symbol
            )));
        }

        let code = &self.currency.code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::InvalidConfig(format!(
                "currency code must be three letters, got '{}'",
                code
            )));
        }

        Ok(())
    }

    /// Applies `TIPCALC_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("TIPCALC_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(code) = lookup("TIPCALC_CURRENCY_CODE") {
            self.currency.code = code.to_uppercase();
        }

        if let Some(flag) = lookup("TIPCALC_SHOW_BREAKDOWN") {
            match parse_flag(&flag) {
                Some(value) => self.display.show_breakdown = value,
                None => warn!(value = %flag, "Unknown TIPCALC_SHOW_BREAKDOWN value"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tipcalc", "tipcalc")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn currency_symbol(&self) -> &str {
        &self.currency.symbol
    }

    pub fn show_breakdown(&self) -> bool {
        self.display.show_breakdown
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
