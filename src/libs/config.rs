//! Configuration management for the taxilog application.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the same
//! per-user data directory as the database. Every field has a default, so a
//! missing file, or a file written by an older version, still loads.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\taxilog\taxilog\config.json`
//! - **macOS**: `~/Library/Application Support/taxilog/taxilog/config.json`
//! - **Linux**: `~/.local/share/taxilog/taxilog/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taxilog::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.currency = "$".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::aggregate::PeriodType;
use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Symbol appended to money amounts in tables.
    pub currency: String,

    /// Period used by `dashboard` and `export` when none is given.
    pub default_period: PeriodType,

    /// chrono format string for dates in the record list.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency: DEFAULT_CURRENCY.to_string(),
            default_period: PeriodType::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the user data directory.
    ///
    /// A missing file yields the default configuration; a file that exists
    /// but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            msg_debug!(Message::ConfigNotFound(config_file_path.display().to_string()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigSaveError, e)))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        Self::init_in(&DataStorage::new())
    }

    /// Runs the wizard against the configuration in `storage`.
    ///
    /// A configuration file that cannot be parsed stops the wizard before any
    /// prompt, so it is never silently overwritten with defaults.
    pub fn init_in(storage: &DataStorage) -> Result<Self> {
        let current = Self::read_from(storage)?;
        let theme = ColorfulTheme::default();

        let currency: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCurrency.to_string())
            .default(current.currency.clone())
            .interact_text()?;

        let periods: Vec<String> = PeriodType::ALL.iter().map(ToString::to_string).collect();
        let selected = PeriodType::ALL
            .iter()
            .position(|period| *period == current.default_period)
            .unwrap_or(1);
        let period_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPeriod.to_string())
            .items(&periods)
            .default(selected)
            .interact()?;

        let date_format: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .interact_text()?;

        Ok(Config {
            currency,
            default_period: PeriodType::ALL.get(period_index).copied().unwrap_or_default(),
            date_format,
        })
    }
}
