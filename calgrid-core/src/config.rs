//! Global calgrid configuration.

use std::path::PathBuf;

use chrono::Weekday;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalGridError, CalGridResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/calgrid";
static DEFAULT_WEEK_START: &str = "sunday";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_week_start() -> String {
    DEFAULT_WEEK_START.to_string()
}

/// Global configuration at ~/.config/calgrid/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CalGridConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// First day of the week in the month grid ("sunday", "monday", ...).
    #[serde(default = "default_week_start")]
    pub week_starts_on: String,
}

impl Default for CalGridConfig {
    fn default() -> Self {
        CalGridConfig {
            data_dir: default_data_dir(),
            week_starts_on: default_week_start(),
        }
    }
}

impl CalGridConfig {
    /// Load the config, creating a commented-out default file on first run.
    pub fn load() -> CalGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))
    }

    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Where the events snapshot lives.
    pub fn events_path(&self) -> PathBuf {
        self.data_path().join("events.json")
    }

    /// The configured first day of the week for the month grid.
    pub fn week_start(&self) -> CalGridResult<Weekday> {
        match self.week_starts_on.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Mon),
            "tuesday" => Ok(Weekday::Tue),
            "wednesday" => Ok(Weekday::Wed),
            "thursday" => Ok(Weekday::Thu),
            "friday" => Ok(Weekday::Fri),
            "saturday" => Ok(Weekday::Sat),
            "sunday" => Ok(Weekday::Sun),
            other => Err(CalGridError::Config(format!(
                "Invalid week_starts_on '{other}' (expected a weekday name)"
            ))),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Where your events snapshot lives:
# data_dir = \"{}\"

# First day of the week in the month grid:
# week_starts_on = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_WEEK_START
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalGridConfig::default();
        assert_eq!(config.week_start().unwrap(), Weekday::Sun);
        assert!(config.events_path().ends_with("events.json"));
    }

    #[test]
    fn test_week_start_parsing() {
        let mut config = CalGridConfig::default();
        config.week_starts_on = "Monday".to_string();
        assert_eq!(config.week_start().unwrap(), Weekday::Mon);

        config.week_starts_on = "someday".to_string();
        assert!(config.week_start().is_err());
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let config: CalGridConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.week_starts_on, "sunday");
    }
}
