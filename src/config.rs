//! Configuration for theme, acknowledgment timing, and the save ledger.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

/// How long the "saved" acknowledgment stays on screen.
pub const DEFAULT_ACK_SECONDS: u64 = 3;

/// Application configuration persisted as YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub ack_seconds: u64,
    /// When set, every save is appended to this file as a JSON line.
    pub ledger_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Blue.to_string(),
            ack_seconds: DEFAULT_ACK_SECONDS,
            ledger_path: None,
        }
    }
}

impl Config {
    /// Applies command line overrides on top of the loaded config. Overrides
    /// are not written back to disk.
    pub fn with_overrides(
        mut self,
        theme: Option<String>,
        ack_seconds: Option<u64>,
        ledger_path: Option<String>,
    ) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(secs) = ack_seconds {
            self.ack_seconds = secs;
        }
        if ledger_path.is_some() {
            self.ledger_path = ledger_path;
        }
        self
    }
}

/// Loads the config from a YAML file, creating it with defaults if missing.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path to the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
